/*!
This library implements the optimization of [Latin Hypercube designs](https://en.wikipedia.org/wiki/Latin_hypercube_sampling)
with respect to space-filling criteria, as used to sample the input space of computer experiments.

A LHS design of `ns` points in `[0., 1.]^nx` is such that, in every dimension, each of the `ns`
equal-width intervals contains exactly one point. Swapping two values within a column keeps
this property: this is the move used to improve a design.

Example:
```
use optlhs::{
    C2, GeometricProfile, Lhs, MinDist, MonteCarloLhs, OptimalLhsAlgorithm,
    SimulatedAnnealingLhs,
};
use ndarray::arr2;

// Design space is defined as [5., 10.] x [0., 1.], designs have 10 points
let xlimits = arr2(&[[5., 10.], [0., 1.]]);
let lhs = Lhs::new(&xlimits, 10);

// Improve the centered L2-discrepancy of a LHS by simulated annealing
let profile = GeometricProfile::new(10., 0.95, 1000).unwrap();
let result = SimulatedAnnealingLhs::new(lhs.clone(), C2, profile)
    .optimize_with_seed(42)
    .unwrap();
let design = result.design();
// or else keep the LHS with the greatest minimum distance among 100 random ones
let result = MonteCarloLhs::new(lhs, MinDist, 100)
    .unwrap()
    .optimize_with_seed(42)
    .unwrap();
```

This library provides:
* space-filling criteria: [centered L2-discrepancy](crate::criteria::C2),
  [PhiP](crate::criteria::PhiP) and [minimum distance](crate::criteria::MinDist),
* temperature profiles: [geometric](crate::profiles::GeometricProfile) and
  [linear](crate::profiles::LinearProfile),
* optimizers: [simulated annealing](crate::SimulatedAnnealingLhs) and
  [Monte Carlo](crate::MonteCarloLhs) search,
* a generator of initial LHS designs: [Lhs](crate::Lhs).
*/
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
pub mod criteria;
mod errors;
mod lhs;
mod monte_carlo;
mod optimal_lhs;
pub mod profiles;
mod result;
mod simulated_annealing;
mod traits;
pub mod utils;

pub use criteria::*;
pub use errors::*;
pub use lhs::*;
pub use monte_carlo::*;
pub use optimal_lhs::*;
pub use profiles::*;
pub use result::*;
pub use simulated_annealing::*;
pub use traits::*;
