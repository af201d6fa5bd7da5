use ndarray::arr2;
use optlhs::{
    C2, ChainOutput, GeometricProfile, Lhs, LhsKind, LinearProfile, MinDist, MonteCarloLhs,
    OptimalLhsAlgorithm, PhiP, SimulatedAnnealingLhs,
};

fn main() {
    env_logger::init();

    let xlimits = arr2(&[[0., 1.], [-10., 10.], [5., 15.]]);
    let n = 10;
    let lhs = Lhs::new(&xlimits, n);

    println!("Optimize LHS of {n} samples in");
    println!("{xlimits}\n");

    println!("*** using simulated annealing on C2 (geometric profile, 4 restarts)");
    let profile = GeometricProfile::new(10., 0.95, 2000).unwrap();
    let result = SimulatedAnnealingLhs::new(lhs.clone(), C2, profile)
        .n_restarts(4)
        .optimize_with_seed(42)
        .unwrap();
    for (i, record) in result.records().iter().enumerate() {
        println!("run #{i}: {:?}", record.summary);
    }
    println!("C2 = {}", result.value());
    println!("{}\n", result.design());

    println!("*** using simulated annealing on PhiP (linear profile, best visited design)");
    let profile = LinearProfile::new(1., 2000).unwrap();
    let centered = lhs.clone().kind(LhsKind::Centered);
    let result = SimulatedAnnealingLhs::new(centered, PhiP::default(), profile)
        .chain_output(ChainOutput::BestVisited)
        .optimize_with_seed(42)
        .unwrap();
    println!("PhiP = {}", result.value());
    println!("{}\n", result.design());

    println!("*** using Monte Carlo search on MinDist (1000 designs)");
    let result = MonteCarloLhs::new(lhs, MinDist, 1000)
        .unwrap()
        .optimize_with_seed(42)
        .unwrap();
    println!("MinDist = {}", result.value());
    println!("{}\n", result.design());
}
