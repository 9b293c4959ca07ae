use indexmap::IndexMap;

use stockyard_core::{AggregateRoot, DomainError, DomainResult};
use stockyard_ledger::{Transaction, TransactionType};
use stockyard_products::{Product, ProductName};
use stockyard_suppliers::{Supplier, SupplierName};

use crate::sort::SortKey;

/// Aggregate root: Warehouse.
///
/// Owns the supplier and product mappings (unique keys, insertion-ordered)
/// and the append-only stock-movement log. Invariants enforced here:
///
/// - every product references a supplier registered at the time it was added;
/// - the stock-movement paths never leave an active product at quantity zero
///   (full shipment delists the entry);
/// - every successful stock-changing mutation appends exactly one transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Warehouse {
    name: String,
    products: IndexMap<ProductName, Product>,
    suppliers: IndexMap<SupplierName, Supplier>,
    transactions: Vec<Transaction>,
    version: u64,
}

impl Warehouse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: IndexMap::new(),
            suppliers: IndexMap::new(),
            transactions: Vec::new(),
            version: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a supplier.
    ///
    /// Fails with a duplicate-key error if a supplier with the same name is
    /// already registered. Supplier registration is not a stock movement, so
    /// no transaction is recorded.
    pub fn add_supplier(&mut self, supplier: Supplier) -> DomainResult<()> {
        if self.suppliers.contains_key(supplier.name()) {
            return Err(DomainError::duplicate_key(format!(
                "supplier '{}' is already registered",
                supplier.name()
            )));
        }

        tracing::debug!(supplier = %supplier.name(), "supplier registered");
        self.suppliers.insert(supplier.name().clone(), supplier);
        self.version += 1;
        Ok(())
    }

    /// Receive a product into stock.
    ///
    /// The product's supplier must already be registered. If a product with
    /// the same name is already active, the incoming quantity is merged into
    /// the existing entry (delta merge) and the existing price is replaced by
    /// the incoming one; otherwise the product is inserted as a new entry.
    /// Either way exactly one receipt transaction is appended, carrying the
    /// incoming quantity, not the merged total.
    pub fn add_product(&mut self, product: Product) -> DomainResult<()> {
        self.ensure_supplier(product.supplier())?;

        let name = product.name().clone();
        let incoming_quantity = product.quantity();
        let incoming_price = product.price();

        match self.products.get_mut(&name) {
            Some(existing) => {
                existing.update_quantity(existing.quantity() + incoming_quantity)?;
                // Re-check through the entity so a price that bypassed
                // construction validation still cannot land in the map.
                existing.update_price(incoming_price)?;
            }
            None => {
                self.products.insert(name.clone(), product);
            }
        }

        self.transactions.push(Transaction::new(
            name.clone(),
            incoming_quantity,
            TransactionType::Receipt,
        ));
        self.version += 1;
        tracing::info!(product = %name, quantity = incoming_quantity, "receipt recorded");
        Ok(())
    }

    /// Ship a quantity of a product out of stock.
    ///
    /// Fails if the product is unknown, or with an insufficient-stock error
    /// (reporting the available quantity) if the request exceeds what is on
    /// hand. On success one shipment transaction is appended with the
    /// requested quantity, and an entry whose stock reaches exactly zero is
    /// delisted: it disappears from the query operations while its history
    /// stays in the log, and receiving it again later starts a fresh entry.
    pub fn remove_product(&mut self, product_name: &ProductName, quantity: i64) -> DomainResult<()> {
        let product = self.products.get_mut(product_name).ok_or_else(|| {
            DomainError::not_found(format!("product '{product_name}' is not in the warehouse"))
        })?;

        let available = product.quantity();
        if quantity > available {
            return Err(DomainError::insufficient_stock(quantity, available));
        }

        let remaining = available - quantity;
        product.update_quantity(remaining)?;

        self.transactions.push(Transaction::new(
            product_name.clone(),
            quantity,
            TransactionType::Shipment,
        ));
        self.version += 1;
        tracing::info!(product = %product_name, quantity, remaining, "shipment recorded");

        if remaining == 0 {
            // shift_remove keeps the insertion order of the remaining entries.
            self.products.shift_remove(product_name);
            tracing::debug!(product = %product_name, "product delisted");
        }
        Ok(())
    }

    /// Manually edit a product's quantity and/or price.
    ///
    /// Fails if the product is unknown; each supplied value goes through the
    /// entity's own validation. Manual edits are not stock movements: no
    /// transaction is recorded, only receipts and shipments reach the log.
    pub fn update_product_info(
        &mut self,
        product_name: &ProductName,
        new_quantity: Option<i64>,
        new_price: Option<f64>,
    ) -> DomainResult<()> {
        let product = self.products.get_mut(product_name).ok_or_else(|| {
            DomainError::not_found(format!("product '{product_name}' is not in the warehouse"))
        })?;

        if let Some(quantity) = new_quantity {
            product.update_quantity(quantity)?;
        }
        if let Some(price) = new_price {
            product.update_price(price)?;
        }

        self.version += 1;
        tracing::debug!(product = %product_name, "product info updated");
        Ok(())
    }

    /// Active products, in insertion order of first registration (a merge
    /// does not re-order the entry).
    pub fn products(&self) -> Vec<&Product> {
        self.products.values().collect()
    }

    /// Active products, stably sorted ascending by the selected key.
    pub fn products_sorted(&self, key: SortKey) -> Vec<&Product> {
        let mut items: Vec<&Product> = self.products.values().collect();
        match key {
            SortKey::Name => items.sort_by(|a, b| a.name().cmp(b.name())),
            SortKey::Quantity => items.sort_by_key(|p| p.quantity()),
            SortKey::Price => items.sort_by(|a, b| a.price().total_cmp(&b.price())),
        }
        items
    }

    /// Active products of one supplier, in active-map order.
    ///
    /// Fails if the supplier is not registered.
    pub fn supplier_products(&self, supplier_name: &SupplierName) -> DomainResult<Vec<&Product>> {
        self.ensure_supplier(supplier_name)?;
        Ok(self
            .products
            .values()
            .filter(|p| p.supplier() == supplier_name)
            .collect())
    }

    /// Registered suppliers, in insertion order.
    pub fn suppliers(&self) -> Vec<&Supplier> {
        self.suppliers.values().collect()
    }

    /// The stock-movement log, in chronological (append) order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn ensure_supplier(&self, name: &SupplierName) -> DomainResult<()> {
        if self.suppliers.contains_key(name) {
            return Ok(());
        }
        Err(DomainError::not_found(format!(
            "supplier '{name}' is not registered"
        )))
    }
}

impl AggregateRoot for Warehouse {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }

    fn version(&self) -> u64 {
        self.version
    }
}
