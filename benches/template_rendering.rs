//! Benchmarks for Messenger template rendering
//!
//! Measures building and serializing list and card templates for catalogs
//! of increasing size.

use catalogbot::messenger::{category_list_template, product_card_template};
use catalogbot_common::{CategoryId, ProductId};
use catalogbot_db::models::{Category, Product, RankedProduct};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn make_categories(n: usize) -> Vec<Category> {
    (0..n)
        .map(|i| Category {
            id: CategoryId::new(i as i64 + 1),
            name: format!("Category {i}"),
            image: format!("http://images.example.com/category-{i}.png"),
            description: format!("This is a short description for category {i}"),
        })
        .collect()
}

fn make_products(n: usize) -> Vec<RankedProduct> {
    (0..n)
        .map(|i| RankedProduct {
            product: Product {
                id: ProductId::new(i as i64 + 1),
                name: format!("Product {i}"),
                image: format!("http://images.example.com/product-{i}.png"),
                more_info: format!("http://www.example.com/product-{i}/"),
                buy_link: format!("http://www.example.com/shop/product-{i}"),
                description: "Thinner, lighter and faster than anything that came before it. "
                    .repeat(6),
            },
            position: i as i64 + 1,
        })
        .collect()
}

fn bench_category_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_list_template");

    for size in [3usize, 10, 100] {
        let categories = make_categories(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("build", size), &categories, |b, cats| {
            b.iter(|| category_list_template(black_box(cats)));
        });

        let template = category_list_template(&categories);
        group.bench_with_input(BenchmarkId::new("serialize", size), &template, |b, t| {
            b.iter(|| serde_json::to_string(black_box(t)).unwrap());
        });
    }

    group.finish();
}

fn bench_product_cards(c: &mut Criterion) {
    let mut group = c.benchmark_group("product_card_template");

    for size in [4usize, 9, 100] {
        let products = make_products(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("build", size), &products, |b, prods| {
            b.iter(|| product_card_template(black_box(prods)));
        });

        let template = product_card_template(&products);
        group.bench_with_input(BenchmarkId::new("serialize", size), &template, |b, t| {
            b.iter(|| serde_json::to_string(black_box(t)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_category_list, bench_product_cards);
criterion_main!(benches);
