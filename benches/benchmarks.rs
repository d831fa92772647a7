//! Benchmarks for lightbnb

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lightbnb::{build_property_query, PropertyFilter, DEFAULT_LIMIT};

fn bench_property_query_unfiltered(c: &mut Criterion) {
    c.bench_function("property_query_unfiltered", |b| {
        b.iter(|| build_property_query(black_box(&PropertyFilter::default()), DEFAULT_LIMIT));
    });
}

fn bench_property_query_all_filters(c: &mut Criterion) {
    let filter = PropertyFilter {
        city: Some("Vancouver".to_string()),
        minimum_price_per_night: Some(50.0),
        maximum_price_per_night: Some(200.0),
        minimum_rating: Some(4.0),
    };
    c.bench_function("property_query_all_filters", |b| {
        b.iter(|| build_property_query(black_box(&filter), DEFAULT_LIMIT));
    });
}

criterion_group!(
    benches,
    bench_property_query_unfiltered,
    bench_property_query_all_filters
);
criterion_main!(benches);
