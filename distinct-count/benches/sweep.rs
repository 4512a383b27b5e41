use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use distinct_count::{Query, Solver, SolverOptions, TableKind, naive};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn random_input<R: Rng>(
    rng: &mut R,
    len: usize,
    value_limit: u32,
    queries: usize,
) -> (Vec<u32>, Vec<Query>) {
    let values = (0..len).map(|_| rng.gen_range(0..value_limit)).collect();
    let queries = (0..queries)
        .map(|slot| {
            let a = rng.gen_range(0..len);
            let b = rng.gen_range(0..len);
            Query::new(a.min(b), a.max(b), slot)
        })
        .collect();
    (values, queries)
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");

    let mut rng = ChaCha20Rng::from_seed([
        0x3C, 0x71, 0xDA, 0xFC, 0x55, 0xEF, 0xE0, 0xAB, 0x5C, 0x1A, 0x9F, 0xEB,
        0xA4, 0x9E, 0x61, 0xE6, 0x1E, 0x7E, 0x29, 0x77, 0x38, 0x9A, 0xF5, 0x67,
        0xF5, 0xDD, 0x07, 0x06, 0xAE, 0xE4, 0x5A, 0xDC,
    ]);

    // The classic limits: 30k values below one million, 200k queries.
    let (values, queries) = random_input(&mut rng, 30_000, 1_000_000, 200_000);
    for table in [TableKind::Dense, TableKind::Sparse] {
        let solver = Solver::new(SolverOptions::new().with_table(table)).unwrap();
        group.bench_with_input(
            BenchmarkId::new("offline", format!("{table:?}")),
            &(&values, &queries),
            |b, (values, queries)| b.iter(|| black_box(solver.solve(values, queries).unwrap())),
        );
    }

    // Brute force is quadratic-ish; keep its input small.
    let (values, queries) = random_input(&mut rng, 2_000, 1_000, 2_000);
    let solver = Solver::default();
    group
        .bench_function(BenchmarkId::new("small", "offline"), |b| {
            b.iter(|| black_box(solver.solve(&values, &queries).unwrap()))
        })
        .bench_function(BenchmarkId::new("small", "naive"), |b| {
            b.iter(|| black_box(naive::solve(&values, &queries).unwrap()))
        });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_sweep
}
criterion_main!(benches);
