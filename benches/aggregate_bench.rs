//! Benchmarks for dashboard aggregates and chart rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ecommerce_dashboard::analysis::{category_counts, payment_counts};
use ecommerce_dashboard::render::{payment_methods, top_categories};
use ecommerce_dashboard::OrderItem;

const CATEGORIES: [&str; 8] = [
    "bed_bath_table",
    "health_beauty",
    "sports_leisure",
    "furniture_decor",
    "computers_accessories",
    "housewares",
    "watches_gifts",
    "telephony",
];

const PAYMENTS: [&str; 4] = ["credit_card", "boleto", "voucher", "debit_card"];

fn create_test_items(count: usize) -> Vec<OrderItem> {
    (0..count)
        .map(|i| {
            OrderItem::new(
                format!("order-{}", i / 2),
                format!("product-{}", i % 5000),
                CATEGORIES[i % CATEGORIES.len()],
                PAYMENTS[i % PAYMENTS.len()],
            )
        })
        .collect()
}

fn bench_aggregates(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregates");

    for size in [1000, 10000, 100000] {
        let items = create_test_items(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("category_counts_{}", size), |b| {
            b.iter(|| category_counts(black_box(&items)))
        });

        group.bench_function(format!("payment_counts_{}", size), |b| {
            b.iter(|| payment_counts(black_box(&items)))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let items = create_test_items(10000);
    let categories = category_counts(&items);
    let payments = payment_counts(&items);

    group.bench_function("top_categories_svg", |b| {
        b.iter(|| top_categories(black_box(&categories)).to_svg())
    });

    group.bench_function("payment_methods_svg", |b| {
        b.iter(|| payment_methods(black_box(&payments)).to_svg())
    });

    group.finish();
}

criterion_group!(benches, bench_aggregates, bench_render);
criterion_main!(benches);
