use criterion::{criterion_group, criterion_main, Criterion};
use ndarray::aview1;
use optlhs::{
    C2, GeometricProfile, Lhs, MonteCarloLhs, OptimalLhsAlgorithm, PhiP, SimulatedAnnealingLhs,
};

fn criterion_optimizers(c: &mut Criterion) {
    let dims = [2, 10];
    let sizes = [20, 100];

    let mut group = c.benchmark_group("optimal-lhs");
    group.sample_size(10);
    let arr1 = aview1(&[0., 1.]);
    for dim in dims {
        for size in sizes {
            let xlimits = arr1.broadcast((dim, 2)).unwrap();
            let lhs = Lhs::new(&xlimits, size);
            group.bench_function(format!("annealing-c2-{dim}-dim-{size}-size"), |b| {
                let profile = GeometricProfile::new(10., 0.95, 1000).unwrap();
                let sa = SimulatedAnnealingLhs::new(lhs.clone(), C2, profile);
                b.iter(|| std::hint::black_box(sa.optimize_with_seed(42).unwrap()));
            });
            group.bench_function(format!("montecarlo-phip-{dim}-dim-{size}-size"), |b| {
                let mc = MonteCarloLhs::new(lhs.clone(), PhiP::default(), 100).unwrap();
                b.iter(|| std::hint::black_box(mc.optimize_with_seed(42).unwrap()));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, criterion_optimizers);
criterion_main!(benches);
