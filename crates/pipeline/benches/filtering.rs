//! Benchmarks for the filter engine
//!
//! Run with: cargo bench --package pipeline
//!
//! Compares sequential and rayon filtering over a large synthetic catalog.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use domain::{Color, Product, Size};
use pipeline::specs::{ColorSpecification, NameContainsSpecification, SizeSpecification};
use pipeline::{Filter, ItemFilter, SpecificationExt};

fn build_catalog(n: usize) -> Vec<Product> {
    (0..n)
        .map(|i| {
            Product::new(
                format!("product-{i}"),
                Color::ALL[i % Color::ALL.len()],
                Size::ALL[(i / 3) % Size::ALL.len()],
            )
        })
        .collect()
}

fn bench_sequential_filter(c: &mut Criterion) {
    let products = build_catalog(100_000);
    let spec = ColorSpecification::new(Color::Green)
        .and(SizeSpecification::new(Size::Large))
        .or(NameContainsSpecification::new("-42"));

    c.bench_function("filter_sequential_100k", |b| {
        b.iter(|| {
            let matched = ItemFilter.filter(black_box(&products), &spec);
            black_box(matched)
        })
    });
}

fn bench_parallel_filter(c: &mut Criterion) {
    let products = build_catalog(100_000);
    let spec = ColorSpecification::new(Color::Green)
        .and(SizeSpecification::new(Size::Large))
        .or(NameContainsSpecification::new("-42"));

    c.bench_function("filter_parallel_100k", |b| {
        b.iter(|| {
            let matched = ItemFilter.par_filter(black_box(products.as_slice()), &spec);
            black_box(matched)
        })
    });
}

criterion_group!(benches, bench_sequential_filter, bench_parallel_filter);
criterion_main!(benches);
