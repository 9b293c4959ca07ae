use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockyard_products::Product;
use stockyard_suppliers::Supplier;
use stockyard_warehouse::{SortKey, Warehouse};

fn seeded_warehouse(product_count: usize) -> Warehouse {
    let mut warehouse = Warehouse::new("bench");
    warehouse
        .add_supplier(Supplier::new("Acme", "a@b.co", "+12345678901", "Addr").unwrap())
        .unwrap();
    for i in 0..product_count {
        let product = Product::new(format!("product-{i:06}"), 100, 1.0 + i as f64, "Acme".into())
            .unwrap();
        warehouse.add_product(product).unwrap();
    }
    warehouse
}

fn bench_receipts(c: &mut Criterion) {
    let mut group = c.benchmark_group("receipts");
    group.throughput(Throughput::Elements(1));

    group.bench_function("fresh_entry", |b| {
        let mut warehouse = seeded_warehouse(0);
        let mut i = 0_u64;
        b.iter(|| {
            let product =
                Product::new(format!("product-{i:012}"), 10, 5.0, "Acme".into()).unwrap();
            warehouse.add_product(black_box(product)).unwrap();
            i += 1;
        });
    });

    group.bench_function("merge_into_existing", |b| {
        let mut warehouse = seeded_warehouse(1);
        b.iter(|| {
            let product = Product::new("product-000000", 10, 5.0, "Acme".into()).unwrap();
            warehouse.add_product(black_box(product)).unwrap();
        });
    });

    group.finish();
}

fn bench_shipments(c: &mut Criterion) {
    c.bench_function("shipment_partial", |b| {
        // Enough stock that the bench never drains the entry.
        let mut warehouse = seeded_warehouse(1);
        warehouse
            .update_product_info(&"product-000000".into(), Some(i64::MAX / 2), None)
            .unwrap();
        b.iter(|| {
            warehouse
                .remove_product(black_box(&"product-000000".into()), 1)
                .unwrap();
        });
    });
}

fn bench_sorted_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("products_sorted");
    for size in [100_usize, 1_000, 10_000] {
        let warehouse = seeded_warehouse(size);
        group.throughput(Throughput::Elements(size as u64));
        for key in [SortKey::Name, SortKey::Quantity, SortKey::Price] {
            group.bench_with_input(
                BenchmarkId::new(key.to_string(), size),
                &warehouse,
                |b, warehouse| {
                    b.iter(|| black_box(warehouse.products_sorted(key)));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_receipts, bench_shipments, bench_sorted_queries);
criterion_main!(benches);
