use super::SpaceFillingCriterion;
use crate::utils::{normalize, pdist};
use linfa::Float;
use ndarray::{ArrayBase, Data, Ix2};
use ndarray_stats::QuantileExt;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Minimum Euclidean distance between two points of the normalized design,
/// to be maximized.
///
/// Coincident points give 0, a design with less than two points gives infinity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct MinDist;

impl<F: Float> SpaceFillingCriterion<F> for MinDist {
    fn name(&self) -> &'static str {
        "MinDist"
    }

    fn evaluate(&self, x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> F {
        let distances = pdist(&normalize(x));
        distances.min().copied().unwrap_or(F::infinity())
    }

    fn is_minimization(&self) -> bool {
        false
    }
}
