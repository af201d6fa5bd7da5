use super::SpaceFillingCriterion;
use crate::errors::{OptLhsError, Result};
use crate::utils::{normalize, pdist, swap_in_column, ColumnScaler};
use linfa::Float;
use ndarray::{Array2, ArrayBase, Data, Ix2};

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Above this exponent, updating the potential from `crit^p` loses too much precision
const INCREMENTAL_MAX_P: f64 = 5.;

const DEFAULT_P: f64 = 50.;

/// PhiP criterion: Lp-norm of the inverse pairwise distances
///
/// ```text
/// PhiP(X) = (sum_{i<j} d(x_i, x_j)^(-p))^(1/p)
/// ```
/// computed on the normalized design and to be minimized. When `p` tends to infinity,
/// minimizing PhiP is equivalent to maximizing the minimum distance.
/// Coincident points give an infinite value.
///
/// See Morris M. D. and Mitchell T. J. (1995), "Exploratory designs for computational
/// experiments", Journal of Statistical Planning and Inference, 43:381-402.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct PhiP {
    p: f64,
}

impl Default for PhiP {
    fn default() -> Self {
        PhiP { p: DEFAULT_P }
    }
}

impl PhiP {
    /// Constructor given the exponent `p >= 1`
    pub fn new(p: f64) -> Result<Self> {
        if !(p.is_finite() && p >= 1.) {
            return Err(OptLhsError::InvalidConfigError(format!(
                "PhiP exponent should be finite and greater or equal to 1, got {p}"
            )));
        }
        Ok(PhiP { p })
    }

    /// Exponent of the criterion
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Sum of `d^(-p)` over pairs made of `row1` or `row2` and another row,
    /// the pair (row1, row2) excluded.
    /// Returns `None` when one of the distances is zero.
    fn swap_sum<F: Float>(
        &self,
        x: &Array2<F>,
        scaler: &ColumnScaler<F>,
        row1: usize,
        row2: usize,
    ) -> Option<F> {
        let exponent = F::cast(-self.p / 2.);
        let mut sum = F::zero();
        for j in (0..x.nrows()).filter(|&j| j != row1 && j != row2) {
            for i in [row1, row2] {
                let d2 = (0..x.ncols()).fold(F::zero(), |acc, k| {
                    let diff = scaler.scaled(x, i, k) - scaler.scaled(x, j, k);
                    acc + diff * diff
                });
                if d2 == F::zero() {
                    return None;
                }
                sum += d2.powf(exponent);
            }
        }
        Some(sum)
    }
}

impl<F: Float> SpaceFillingCriterion<F> for PhiP {
    fn name(&self) -> &'static str {
        "PhiP"
    }

    fn evaluate(&self, x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> F {
        let p = F::cast(self.p);
        let distances = pdist(&normalize(x));
        if distances.iter().any(|&d| d == F::zero()) {
            return F::infinity();
        }
        distances.mapv(|d| d.powf(-p)).sum().powf(F::one() / p)
    }

    /// For `p <= 5`, updates `crit^p` from the pairs involving the swapped rows,
    /// otherwise evaluates the swapped design.
    fn perturb_lhs(
        &self,
        x: &mut Array2<F>,
        crit: F,
        row1: usize,
        row2: usize,
        column: usize,
    ) -> F {
        if self.p > INCREMENTAL_MAX_P || !crit.is_finite() || row1 == row2 {
            swap_in_column(x, row1, row2, column);
            return self.evaluate(&*x);
        }
        let p = F::cast(self.p);
        let scaler = ColumnScaler::new(&*x);
        let old = self.swap_sum(x, &scaler, row1, row2);
        swap_in_column(x, row1, row2, column);
        let new = self.swap_sum(x, &scaler, row1, row2);
        match (old, new) {
            (Some(old), Some(new)) => {
                let sum = crit.powf(p) - old + new;
                if sum > F::zero() {
                    sum.powf(F::one() / p)
                } else {
                    self.evaluate(&*x)
                }
            }
            _ => self.evaluate(&*x),
        }
    }

    fn is_minimization(&self) -> bool {
        true
    }
}
