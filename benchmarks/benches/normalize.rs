use criterion::{criterion_group, criterion_main, Criterion};
use verba_normalizer::normalize;

fn normalize_benchmark(c: &mut Criterion) {
    const FRENCH: &str = "Anticonstitutionnellement";

    c.bench_function("normalize 25 bytes", |b| b.iter(|| normalize(FRENCH)));
}

criterion_group!(benches, normalize_benchmark);
criterion_main!(benches);
