//! Space-filling criteria measuring the uniformity of a design.
//!
//! Each criterion can be fully evaluated on a design, or updated after the swap of
//! two values within a column of the design, which is the move used by the LHS
//! optimizers. Designs are normalized column-wise to `[0, 1]` by min-max scaling
//! before being scored.
mod c2;
mod mindist;
mod phip;

pub use c2::*;
pub use mindist::*;
pub use phip::*;

use crate::utils::swap_in_column;
use linfa::Float;
use ndarray::{Array2, ArrayBase, Data, Ix2};

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// A space-filling criterion used as the objective of LHS optimization
pub trait SpaceFillingCriterion<F: Float> {
    /// Criterion name
    fn name(&self) -> &'static str;

    /// Computes the criterion of the given (ns, nx) design
    fn evaluate(&self, x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> F;

    /// Swaps `x[row1, column]` and `x[row2, column]` and returns the criterion of the
    /// swapped design given `crit`, the criterion value of `x` before the swap.
    ///
    /// The returned value is the one `evaluate` gives on the swapped design.
    /// This default implementation swaps then evaluates the whole design,
    /// criteria may update `crit` from the terms involving `row1` and `row2` only.
    fn perturb_lhs(
        &self,
        x: &mut Array2<F>,
        crit: F,
        row1: usize,
        row2: usize,
        column: usize,
    ) -> F {
        let _ = crit;
        swap_in_column(x, row1, row2, column);
        self.evaluate(&*x)
    }

    /// Whether the criterion has to be minimized (otherwise maximized)
    fn is_minimization(&self) -> bool;

    /// Whether `candidate` is strictly better than `reference`
    fn is_better(&self, candidate: F, reference: F) -> bool {
        if self.is_minimization() {
            candidate < reference
        } else {
            candidate > reference
        }
    }
}

/// Available space-filling criteria
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub enum SpaceFilling {
    /// Centered L2-discrepancy, see [C2]
    C2,
    /// Lp-potential of inverse distances, see [PhiP]
    PhiP(PhiP),
    /// Minimum distance between points, see [MinDist]
    MinDist,
}

impl Default for SpaceFilling {
    fn default() -> Self {
        SpaceFilling::PhiP(PhiP::default())
    }
}

impl<F: Float> SpaceFillingCriterion<F> for SpaceFilling {
    fn name(&self) -> &'static str {
        match self {
            SpaceFilling::C2 => SpaceFillingCriterion::<F>::name(&C2),
            SpaceFilling::PhiP(phip) => SpaceFillingCriterion::<F>::name(phip),
            SpaceFilling::MinDist => SpaceFillingCriterion::<F>::name(&MinDist),
        }
    }

    fn evaluate(&self, x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> F {
        match self {
            SpaceFilling::C2 => C2.evaluate(x),
            SpaceFilling::PhiP(phip) => phip.evaluate(x),
            SpaceFilling::MinDist => MinDist.evaluate(x),
        }
    }

    fn perturb_lhs(
        &self,
        x: &mut Array2<F>,
        crit: F,
        row1: usize,
        row2: usize,
        column: usize,
    ) -> F {
        match self {
            SpaceFilling::C2 => C2.perturb_lhs(x, crit, row1, row2, column),
            SpaceFilling::PhiP(phip) => phip.perturb_lhs(x, crit, row1, row2, column),
            SpaceFilling::MinDist => MinDist.perturb_lhs(x, crit, row1, row2, column),
        }
    }

    fn is_minimization(&self) -> bool {
        match self {
            SpaceFilling::C2 => SpaceFillingCriterion::<F>::is_minimization(&C2),
            SpaceFilling::PhiP(phip) => SpaceFillingCriterion::<F>::is_minimization(phip),
            SpaceFilling::MinDist => SpaceFillingCriterion::<F>::is_minimization(&MinDist),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{DesignGenerator, Lhs};
    use approx::assert_relative_eq;
    use ndarray::arr2;
    use ndarray_rand::rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256Plus;

    /// Checks that the swap update of the criterion matches a full evaluation
    /// of the swapped design on random LHS designs
    pub(crate) fn check_perturb_lhs<C: SpaceFillingCriterion<f64>>(criterion: &C) {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        for (ns, nx) in [(5, 1), (10, 2), (12, 4)] {
            let xlimits = arr2(&[[0., 1.]]).broadcast((nx, 2)).unwrap().to_owned();
            let lhs = Lhs::new(&xlimits, ns);
            for _ in 0..20 {
                let x = lhs.standard_design(&mut rng);
                let crit = criterion.evaluate(&x);
                let column = rng.gen_range(0..nx);
                let row1 = rng.gen_range(0..ns);
                let row2 = (row1 + rng.gen_range(1..ns)) % ns;

                let mut perturbed = x.clone();
                let actual = criterion.perturb_lhs(&mut perturbed, crit, row1, row2, column);

                let mut expected_x = x.clone();
                expected_x.swap([row1, column], [row2, column]);
                let expected = criterion.evaluate(&expected_x);

                assert_eq!(perturbed, expected_x);
                assert_relative_eq!(actual, expected, max_relative = 1e-9);
            }
        }
    }

    /// Checks that swapping twice restores the design and its criterion
    pub(crate) fn check_double_swap<C: SpaceFillingCriterion<f64>>(criterion: &C) {
        let mut rng = Xoshiro256Plus::seed_from_u64(0);
        let lhs = Lhs::new(&arr2(&[[0., 1.], [0., 1.], [0., 1.]]), 8);
        let x = lhs.standard_design(&mut rng);
        let crit = criterion.evaluate(&x);

        let mut y = x.clone();
        let swapped = criterion.perturb_lhs(&mut y, crit, 1, 6, 2);
        let restored = criterion.perturb_lhs(&mut y, swapped, 1, 6, 2);

        assert_eq!(y, x);
        assert_eq!(criterion.evaluate(&y), crit);
        assert_relative_eq!(restored, crit, max_relative = 1e-9);
    }

    #[test]
    fn test_space_filling_dispatch() {
        let x = arr2(&[[0.1, 0.3], [0.5, 0.9], [0.9, 0.1], [0.3, 0.5], [0.7, 0.7]]);
        let crit = SpaceFilling::C2;
        assert_eq!(SpaceFillingCriterion::<f64>::evaluate(&crit, &x), C2.evaluate(&x));
        assert!(SpaceFillingCriterion::<f64>::is_minimization(&crit));
        let crit = SpaceFilling::MinDist;
        assert_eq!(
            SpaceFillingCriterion::<f64>::evaluate(&crit, &x),
            MinDist.evaluate(&x)
        );
        assert!(!SpaceFillingCriterion::<f64>::is_minimization(&crit));
        let crit = SpaceFilling::default();
        assert_eq!(
            SpaceFillingCriterion::<f64>::evaluate(&crit, &x),
            PhiP::default().evaluate(&x)
        );
        assert_eq!(SpaceFillingCriterion::<f64>::name(&crit), "PhiP");
    }

    #[test]
    fn test_space_filling_perturb_lhs() {
        check_perturb_lhs(&SpaceFilling::C2);
        check_perturb_lhs(&SpaceFilling::MinDist);
        check_perturb_lhs(&SpaceFilling::PhiP(PhiP::new(2.).unwrap()));
    }

    #[test]
    fn test_is_better() {
        assert!(SpaceFillingCriterion::<f64>::is_better(&C2, 1., 2.));
        assert!(!SpaceFillingCriterion::<f64>::is_better(&C2, 2., 2.));
        assert!(SpaceFillingCriterion::<f64>::is_better(&MinDist, 2., 1.));
        assert!(!SpaceFillingCriterion::<f64>::is_better(&MinDist, 1., 1.));
    }

    #[cfg(feature = "serializable")]
    #[test]
    fn test_serialize_space_filling() {
        let crit = SpaceFilling::PhiP(PhiP::new(10.).unwrap());
        let json = serde_json::to_string(&crit).unwrap();
        let loaded: SpaceFilling = serde_json::from_str(&json).unwrap();
        assert_eq!(crit, loaded);
    }
}
