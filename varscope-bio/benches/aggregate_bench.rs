use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use varscope_bio::aggregate::GroupAggregator;
use varscope_bio::taxonomy::{NameResolver, TaxonomyTable};
use varscope_core::{AbundanceRecord, BootstrapTable};

const PREFIXES: [&str; 6] = ["AY", "BA.1", "BA.2", "B.1.1.7", "XBB", "P.1"];

fn generate_sample(num_lineages: usize) -> (Vec<AbundanceRecord>, BootstrapTable) {
    let codes: Vec<String> = (0..num_lineages)
        .map(|i| format!("{}.{}.{}", PREFIXES[i % PREFIXES.len()], i % 17, i))
        .collect();
    let fraction = 1.0 / num_lineages as f64;

    let point = codes
        .iter()
        .map(|c| AbundanceRecord::new(c.clone(), fraction))
        .collect();

    let row = |scale: f64| vec![fraction * scale; num_lineages];
    let bootstrap = BootstrapTable::new(codes)
        .with_row(0.25, row(0.9))
        .unwrap()
        .with_row(0.5, row(1.0))
        .unwrap()
        .with_row(0.75, row(1.1))
        .unwrap();

    (point, bootstrap)
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    let table = TaxonomyTable::who_default();
    let aggregator = GroupAggregator::new(NameResolver::new(&table));

    for num_lineages in [10, 100, 1000].iter() {
        let (point, bootstrap) = generate_sample(*num_lineages);

        group.bench_with_input(
            BenchmarkId::from_parameter(num_lineages),
            num_lineages,
            |b, _| {
                b.iter(|| {
                    let results = aggregator.aggregate(&point, &bootstrap).unwrap();
                    black_box(results);
                });
            },
        );
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let table = TaxonomyTable::who_default();
    let resolver = NameResolver::new(&table);

    c.bench_function("resolve/deep_sublineage", |b| {
        b.iter(|| black_box(resolver.resolve(black_box("B.1.617.2.9.8.7.6"))))
    });
}

criterion_group!(benches, bench_aggregate, bench_resolve);
criterion_main!(benches);
