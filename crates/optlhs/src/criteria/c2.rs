use super::SpaceFillingCriterion;
use crate::utils::{normalize, swap_in_column};
use linfa::Float;
use ndarray::{Array2, ArrayBase, ArrayView1, Data, Ix2};

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Centered L2-discrepancy
///
/// ```text
/// C2(X)^2 = (13/12)^d - 2/n * sum_i prod_k (1 + |z_ik|/2 - z_ik^2/2)
///           + 1/n^2 * sum_i sum_j prod_k (1 + |z_ik|/2 + |z_jk|/2 - |z_ik - z_jk|/2)
/// ```
/// where `z_ik = x_ik - 1/2` and `x` is the normalized design.
/// The discrepancy has to be minimized.
///
/// See Hickernell F. J. (1998), "A generalized discrepancy and quadrature error bound",
/// Mathematics of Computation, 67(221):299-322.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct C2;

fn centered<F: Float>(x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Array2<F> {
    let half = F::cast(0.5);
    normalize(x).mapv(|v| v - half)
}

fn self_term<F: Float>(zi: ArrayView1<F>) -> F {
    let half = F::cast(0.5);
    zi.fold(F::one(), |acc, &a| {
        acc * (F::one() + half * num_traits::Float::abs(a) - half * a * a)
    })
}

fn cross_term<F: Float>(zi: ArrayView1<F>, zj: ArrayView1<F>) -> F {
    let half = F::cast(0.5);
    zi.iter().zip(zj.iter()).fold(F::one(), |acc, (&a, &b)| {
        acc * (F::one()
            + half * (num_traits::Float::abs(a) + num_traits::Float::abs(b))
            - half * num_traits::Float::abs(a - b))
    })
}

/// Terms of the squared discrepancy involving rows `row1` or `row2`, except
/// the cross term between them which a swap leaves unchanged.
/// Returns (self terms, diagonal terms, cross terms with other rows)
fn swap_terms<F: Float>(z: &Array2<F>, row1: usize, row2: usize) -> (F, F, F) {
    let (z1, z2) = (z.row(row1), z.row(row2));
    let selves = self_term(z1) + self_term(z2);
    let diag = cross_term(z1, z1) + cross_term(z2, z2);
    let mut cross = F::zero();
    for (j, zj) in z.rows().into_iter().enumerate() {
        if j != row1 && j != row2 {
            cross += cross_term(z1, zj) + cross_term(z2, zj);
        }
    }
    (selves, diag, cross)
}

fn discrepancy<F: Float>(squared: F) -> F {
    if squared < F::zero() {
        F::zero()
    } else {
        squared.sqrt()
    }
}

impl<F: Float> SpaceFillingCriterion<F> for C2 {
    fn name(&self) -> &'static str {
        "C2"
    }

    fn evaluate(&self, x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> F {
        let (n, d) = x.dim();
        if n == 0 {
            return F::zero();
        }
        let z = centered(x);
        let nf = F::cast(n);
        let two = F::cast(2.);

        let sum1 = z.rows().into_iter().fold(F::zero(), |acc, zi| acc + self_term(zi));
        let mut sum2 = F::zero();
        for i in 0..n {
            let zi = z.row(i);
            sum2 += cross_term(zi, zi);
            for j in (i + 1)..n {
                sum2 += two * cross_term(zi, z.row(j));
            }
        }
        let squared = F::cast(13. / 12.).powi(d as i32) - two / nf * sum1 + sum2 / (nf * nf);
        discrepancy(squared)
    }

    /// Updates the discrepancy from the `O(n.d)` terms involving the swapped rows
    fn perturb_lhs(
        &self,
        x: &mut Array2<F>,
        crit: F,
        row1: usize,
        row2: usize,
        column: usize,
    ) -> F {
        if row1 == row2 {
            return crit;
        }
        if !crit.is_finite() {
            swap_in_column(x, row1, row2, column);
            return self.evaluate(&*x);
        }
        let mut z = centered(&*x);
        let (self_old, diag_old, cross_old) = swap_terms(&z, row1, row2);
        swap_in_column(x, row1, row2, column);
        swap_in_column(&mut z, row1, row2, column);
        let (self_new, diag_new, cross_new) = swap_terms(&z, row1, row2);

        let nf = F::cast(x.nrows());
        let two = F::cast(2.);
        let squared = crit * crit - two / nf * (self_new - self_old)
            + (diag_new - diag_old + two * (cross_new - cross_old)) / (nf * nf);
        discrepancy(squared)
    }

    fn is_minimization(&self) -> bool {
        true
    }
}
