use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cantor::{fraction_at, fraction_to_sequence, Enumerator};

static QUERIES: [u64; 6] = [10, 100, 1_000, 5_000, 20_000, 50_000];

fn lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("fraction_at");
    for k in QUERIES {
        group.bench_function(&format!("walk_{k}"), |b| b.iter(|| fraction_at(black_box(k))));

        let mut enumerator = Enumerator::new();
        group.bench_function(&format!("checkpoint_{k}"), move |b| {
            b.iter(|| enumerator.fraction_at(black_box(k)))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("index_of");
    for k in QUERIES {
        let q = fraction_at(k);
        let (n, d) = (q.numerator() as i64, q.denominator() as i64);
        group.bench_function(&format!("walk_{k}"), |b| {
            b.iter(|| fraction_to_sequence(black_box(n), black_box(d)))
        });

        let mut enumerator = Enumerator::new();
        group.bench_function(&format!("checkpoint_{k}"), move |b| {
            b.iter(|| enumerator.index_of(black_box(n), black_box(d)))
        });
    }
    group.finish();
}

criterion_group! {
    name = walk;
    config = Criterion::default().sample_size(50);
    targets = lookups
}

criterion_main!(walk);
