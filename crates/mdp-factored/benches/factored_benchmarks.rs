use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mdp_factored::{to_factors, to_index, to_index_partial_factors, PartialFactorsEnumerator};

fn bench_indexing(c: &mut Criterion) {
    let space = vec![4, 3, 5, 2, 6, 3, 4, 2];
    let dense = vec![3, 2, 4, 1, 5, 2, 3, 1];

    c.bench_function("to_index_dense", |b| {
        b.iter(|| to_index(black_box(&space), black_box(&dense)));
    });

    c.bench_function("to_factors", |b| {
        b.iter(|| to_factors(black_box(&space), black_box(5_000)));
    });

    let enumerator = PartialFactorsEnumerator::new(space.clone(), vec![0, 2, 4, 6]);
    let partials: Vec<_> = enumerator.collect();
    c.bench_function("to_index_partial_factors", |b| {
        b.iter(|| {
            partials
                .iter()
                .map(|pf| to_index_partial_factors(black_box(&space), pf))
                .sum::<usize>()
        });
    });
}

fn bench_enumeration(c: &mut Criterion) {
    let space = vec![3; 8];
    let ids: Vec<_> = (0..8).collect();

    c.bench_function("enumerate_3^8", |b| {
        b.iter(|| {
            let mut e = PartialFactorsEnumerator::new(space.clone(), ids.clone());
            let mut n = 0usize;
            while e.is_valid() {
                n += e.values[0];
                e.advance();
            }
            n
        });
    });

    c.bench_function("enumerate_3^8_skip", |b| {
        b.iter(|| PartialFactorsEnumerator::with_skip(space.clone(), ids.clone(), 3).count());
    });
}

criterion_group!(benches, bench_indexing, bench_enumeration);
criterion_main!(benches);
