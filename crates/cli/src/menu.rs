//! Interactive warehouse menu.
//!
//! Thin presentation layer: it constructs suppliers and products from raw
//! input, calls into the warehouse API, and renders the return values. All
//! domain errors are caught here and printed, never propagated.

use stockyard_core::DomainResult;
use stockyard_products::{Product, ProductName};
use stockyard_suppliers::{Supplier, SupplierName};
use stockyard_warehouse::{SortKey, Warehouse};

use crate::input;

pub fn run() -> anyhow::Result<()> {
    let mut warehouse = Warehouse::new("Main warehouse");
    seed_demo_data(&mut warehouse);

    loop {
        display_menu();
        let choice = input::read_int("Select an option: ", Some(0), Some(9))?;

        match choice {
            0 => {
                println!("\nThank you for using the warehouse management system!");
                return Ok(());
            }
            1 => add_supplier(&mut warehouse)?,
            2 => add_product(&mut warehouse)?,
            3 => display_all_products(&warehouse),
            4 => display_sorted_products(&warehouse)?,
            5 => display_all_suppliers(&warehouse),
            6 => display_supplier_products(&warehouse)?,
            7 => remove_product(&mut warehouse)?,
            8 => update_product_info(&mut warehouse)?,
            9 => display_transactions(&warehouse),
            _ => unreachable!("read_int enforces the 0-9 range"),
        }
    }
}

fn seed_demo_data(warehouse: &mut Warehouse) {
    let result: DomainResult<()> = (|| {
        warehouse.add_supplier(Supplier::new(
            "Techline Ltd",
            "tech@example.com",
            "+12025550134",
            "1 Central St, Springfield",
        )?)?;
        warehouse.add_supplier(Supplier::new(
            "Electra Co",
            "electra@example.com",
            "+12025550187",
            "45 Main St, Shelbyville",
        )?)?;

        warehouse.add_product(Product::new(
            "Dell XPS Laptop",
            10,
            45000.0,
            "Techline Ltd".into(),
        )?)?;
        warehouse.add_product(Product::new(
            "Samsung Galaxy Phone",
            20,
            15000.0,
            "Techline Ltd".into(),
        )?)?;
        warehouse.add_product(Product::new(
            "Apple iPad Tablet",
            15,
            30000.0,
            "Electra Co".into(),
        )?)?;
        Ok(())
    })();

    match result {
        Ok(()) => println!("Demo data loaded."),
        Err(e) => tracing::warn!("failed to load demo data: {e}"),
    }
}

fn display_menu() {
    println!("\n{}", "=".repeat(50));
    println!("{:^50}", "WAREHOUSE MANAGEMENT SYSTEM");
    println!("{}", "=".repeat(50));
    println!("1. Add a new supplier");
    println!("2. Add a new product");
    println!("3. View all products");
    println!("4. View products (sorted)");
    println!("5. View all suppliers");
    println!("6. View a supplier's products");
    println!("7. Remove a product (ship out)");
    println!("8. Update product info");
    println!("9. View transaction history");
    println!("0. Exit");
    println!("{}", "=".repeat(50));
}

fn add_supplier(warehouse: &mut Warehouse) -> anyhow::Result<()> {
    println!("\n--- Add a new supplier ---");

    let name = input::read_line("Company name: ")?;
    let email = input::read_line("Email: ")?;
    let phone = input::read_line("Phone: ")?;
    let address = input::read_line("Address: ")?;

    match Supplier::new(&name, email, phone, address)
        .and_then(|supplier| warehouse.add_supplier(supplier))
    {
        Ok(()) => println!("Supplier '{name}' added"),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn add_product(warehouse: &mut Warehouse) -> anyhow::Result<()> {
    println!("\n--- Add a new product ---");

    if warehouse.suppliers().is_empty() {
        println!("Add at least one supplier first");
        return Ok(());
    }

    let name = input::read_line("Product name: ")?;
    let quantity = input::read_int("Quantity: ", Some(1), None)?;
    let price = input::read_float("Unit price: ", Some(0.01))?;
    let description = input::read_line("Description (optional): ")?;

    let supplier_name = choose_supplier(warehouse)?;

    match Product::new(&name, quantity, price, supplier_name)
        .map(|product| product.with_description(description))
        .and_then(|product| warehouse.add_product(product))
    {
        Ok(()) => println!("Product '{name}' added to the warehouse"),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn choose_supplier(warehouse: &Warehouse) -> anyhow::Result<SupplierName> {
    println!("\nAvailable suppliers:");
    let suppliers = warehouse.suppliers();
    for (i, supplier) in suppliers.iter().enumerate() {
        println!("{}. {}", i + 1, supplier.name());
    }

    let index = input::read_int(
        "Choose a supplier (number): ",
        Some(1),
        Some(suppliers.len() as i64),
    )? - 1;
    Ok(suppliers[index as usize].name().clone())
}

fn choose_product(warehouse: &Warehouse) -> anyhow::Result<(ProductName, i64)> {
    let products = warehouse.products();
    for (i, product) in products.iter().enumerate() {
        println!("{}. {} (available: {} pcs)", i + 1, product.name(), product.quantity());
    }

    let index = input::read_int(
        "Your choice: ",
        Some(1),
        Some(products.len() as i64),
    )? - 1;
    let product = products[index as usize];
    Ok((product.name().clone(), product.quantity()))
}

fn product_table(products: &[&Product]) {
    println!(
        "{:<30} {:<10} {:<15} {:<20}",
        "Name", "Quantity", "Price", "Supplier"
    );
    println!("{}", "-".repeat(75));
    for product in products {
        println!(
            "{:<30} {:<10} {:<15.2} {:<20}",
            product.name().as_str(),
            product.quantity(),
            product.price(),
            product.supplier().as_str()
        );
    }
}

fn display_all_products(warehouse: &Warehouse) {
    println!("\n--- All products in the warehouse ---");

    let products = warehouse.products();
    if products.is_empty() {
        println!("The warehouse is empty");
        return;
    }
    product_table(&products);
}

fn display_sorted_products(warehouse: &Warehouse) -> anyhow::Result<()> {
    println!("\n--- Sorted products ---");

    if warehouse.products().is_empty() {
        println!("The warehouse is empty");
        return Ok(());
    }

    println!("Sort by:");
    println!("1. Name");
    println!("2. Quantity");
    println!("3. Price");
    let choice = input::read_int("Your choice: ", Some(1), Some(3))?;

    let key_str = ["name", "quantity", "price"][choice as usize - 1];
    match key_str.parse::<SortKey>() {
        Ok(key) => product_table(&warehouse.products_sorted(key)),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn display_all_suppliers(warehouse: &Warehouse) {
    println!("\n--- All suppliers ---");

    let suppliers = warehouse.suppliers();
    if suppliers.is_empty() {
        println!("No suppliers registered");
        return;
    }

    println!(
        "{:<30} {:<17} {:<25} {:<30}",
        "Name", "Phone", "Email", "Address"
    );
    println!("{}", "-".repeat(100));
    for supplier in suppliers {
        println!(
            "{:<30} {:<17} {:<25} {:<30}",
            supplier.name().as_str(),
            supplier.phone(),
            supplier.email(),
            supplier.address()
        );
    }
}

fn display_supplier_products(warehouse: &Warehouse) -> anyhow::Result<()> {
    println!("\n--- A supplier's products ---");

    if warehouse.suppliers().is_empty() {
        println!("No suppliers registered");
        return Ok(());
    }

    println!("Choose a supplier:");
    let supplier_name = choose_supplier(warehouse)?;

    match warehouse.supplier_products(&supplier_name) {
        Ok(products) if products.is_empty() => {
            println!("Supplier '{supplier_name}' has no products in the warehouse");
        }
        Ok(products) => {
            println!("\nProducts from '{supplier_name}':");
            println!("{:<30} {:<10} {:<15}", "Name", "Quantity", "Price");
            println!("{}", "-".repeat(55));
            for product in products {
                println!(
                    "{:<30} {:<10} {:<15.2}",
                    product.name().as_str(),
                    product.quantity(),
                    product.price()
                );
            }
        }
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn remove_product(warehouse: &mut Warehouse) -> anyhow::Result<()> {
    println!("\n--- Ship out a product ---");

    if warehouse.products().is_empty() {
        println!("The warehouse is empty");
        return Ok(());
    }

    println!("Choose a product to ship:");
    let (name, available) = choose_product(warehouse)?;

    let quantity = input::read_int(
        &format!("Quantity to ship (max {available}): "),
        Some(1),
        Some(available),
    )?;

    match warehouse.remove_product(&name, quantity) {
        Ok(()) => println!("Shipped {quantity} pcs of '{name}'"),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn update_product_info(warehouse: &mut Warehouse) -> anyhow::Result<()> {
    println!("\n--- Update product info ---");

    if warehouse.products().is_empty() {
        println!("The warehouse is empty");
        return Ok(());
    }

    println!("Choose a product to update:");
    let (name, _) = choose_product(warehouse)?;

    {
        let products = warehouse.products();
        let product = products
            .iter()
            .find(|p| *p.name() == name)
            .expect("just chosen from the active list");
        println!("\nCurrent info:");
        println!("Name: {}", product.name());
        println!("Quantity: {}", product.quantity());
        println!("Price: {:.2}", product.price());
        println!("Supplier: {}", product.supplier());
    }

    println!("\nWhat would you like to update?");
    println!("1. Quantity");
    println!("2. Price");
    println!("3. Both");
    let choice = input::read_int("Your choice: ", Some(1), Some(3))?;

    let new_quantity = if choice == 1 || choice == 3 {
        Some(input::read_int("New quantity: ", Some(0), None)?)
    } else {
        None
    };
    let new_price = if choice == 2 || choice == 3 {
        Some(input::read_float("New price: ", Some(0.01))?)
    } else {
        None
    };

    match warehouse.update_product_info(&name, new_quantity, new_price) {
        Ok(()) => println!("Product '{name}' updated"),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn display_transactions(warehouse: &Warehouse) {
    println!("\n--- Warehouse transaction history ---");

    let transactions = warehouse.transactions();
    if transactions.is_empty() {
        println!("The transaction history is empty");
        return;
    }

    println!(
        "{:<12} {:<30} {:<10} {:<20}",
        "Kind", "Product", "Quantity", "Date"
    );
    println!("{}", "-".repeat(75));
    for tx in transactions {
        println!(
            "{:<12} {:<30} {:<10} {:<20}",
            tx.kind().to_string(),
            tx.product().as_str(),
            tx.quantity(),
            tx.date().format("%d.%m.%Y %H:%M").to_string()
        );
    }
}
