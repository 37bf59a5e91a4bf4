// File: crates/hospital-data/benches/dataset_bench.rs
// Summary: Criterion benches for dataset generation and chart aggregations.

use criterion::{criterion_group, criterion_main, Criterion, black_box};
use hospital_data::aggregate;
use hospital_data::{generate, Dataset, GeneratorConfig};

fn bench_generate(c: &mut Criterion) {
    let config = GeneratorConfig::default().with_seed(Some(1));
    c.bench_function("generate_1500", |b| b.iter(|| black_box(generate(&config))));
}

fn bench_aggregate(c: &mut Criterion) {
    let ds = Dataset::from_records(generate(&GeneratorConfig::default().with_seed(Some(1))));
    let mut group = c.benchmark_group("aggregate");
    group.bench_function("value_counts_disease", |b| b.iter(|| black_box(aggregate::top_diseases(&ds, 10))));
    group.bench_function("monthly_bill_totals", |b| b.iter(|| black_box(aggregate::monthly_bill_totals(&ds))));
    group.bench_function("age_histogram", |b| b.iter(|| black_box(aggregate::age_histogram(&ds, 20))));
    group.finish();
}

criterion_group!(benches, bench_generate, bench_aggregate);
criterion_main!(benches);
