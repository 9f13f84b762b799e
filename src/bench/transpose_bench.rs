use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use trans::blocked::Strategy;
use trans::registry::Registry;

fn bench_registered(c: &mut Criterion) {
    let registry = Registry::with_defaults();
    let mut group = c.benchmark_group("transpose");

    for shape in Strategy::tuned_shapes() {
        let (m, n) = (shape.cols, shape.rows);
        let a: Vec<i32> = (0..(m * n) as i32).collect();
        let mut b = vec![0; m * n];

        for entry in registry.iter() {
            group.bench_with_input(
                BenchmarkId::new(entry.desc, shape),
                &a,
                |bench, a| bench.iter(|| (entry.func)(m, n, black_box(a), black_box(&mut b))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_registered);
criterion_main!(benches);
