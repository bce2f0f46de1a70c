use criterion::{black_box, criterion_group, criterion_main, Criterion};
use moonsign::{ecliptic_from_equatorial, Equatorial, Zodiac};

fn converter_bench(c: &mut Criterion) {
    let eq = Equatorial::new(95.4471, 23.3457);

    c.bench_function("ecliptic_from_equatorial", |b| {
        b.iter(|| ecliptic_from_equatorial(black_box(&eq), black_box(23.44)))
    });
}

fn classifier_bench(c: &mut Criterion) {
    let zodiac = Zodiac::new();
    let eq = Equatorial::new(95.4471, 23.3457);

    let mut group = c.benchmark_group("classify");
    group.bench_function("longitude_both_tables", |b| {
        b.iter(|| zodiac.classify_longitude(black_box(95.0)))
    });
    group.bench_function("sectors_for", |b| {
        b.iter(|| zodiac.sectors_for(black_box(&eq)))
    });
    group.finish();
}

criterion_group!(benches, converter_bench, classifier_bench);
criterion_main!(benches);
