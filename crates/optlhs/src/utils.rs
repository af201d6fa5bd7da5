use linfa::Float;
use ndarray::{Array, Array1, Array2, ArrayBase, Axis, Data, Ix2};
use ndarray_stats::{DeviationExt, QuantileExt};

/// Computes the pairwise distances between rows of a 2D-array
///
/// Distances are returned in the order (0, 1), (0, 2), ..., (1, 2), ...
/// Points without any component are all at distance 0.
pub fn pdist<F: Float>(x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Array1<F> {
    let nrows = x.nrows();
    let npairs = nrows * nrows.saturating_sub(1) / 2;
    if x.ncols() == 0 {
        return Array1::zeros(npairs);
    }
    let mut distances = Vec::with_capacity(npairs);
    for i in 0..nrows {
        let a = x.row(i);
        for j in (i + 1)..nrows {
            let b = x.row(j);
            // rows share the same non zero length
            let d = a.l2_dist(&b).unwrap_or(0.);
            distances.push(F::cast(d));
        }
    }
    Array::from_vec(distances)
}

/// Min-max scaling of the columns of a design
///
/// Each column is mapped to [0, 1] using its minimum and maximum values.
/// A constant column is mapped to 0.
/// As swapping two values within a column leaves its extrema unchanged,
/// a scaler computed on a design stays valid for every swapped design.
#[derive(Clone, Debug)]
pub struct ColumnScaler<F: Float> {
    lower: Array1<F>,
    inv_range: Array1<F>,
}

impl<F: Float> ColumnScaler<F> {
    /// Computes scaling factors from the given design
    pub fn new(x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Self {
        let mut lower = Array1::zeros(x.ncols());
        let mut inv_range = Array1::zeros(x.ncols());
        for (k, col) in x.axis_iter(Axis(1)).enumerate() {
            if let (Ok(&lo), Ok(&up)) = (col.min(), col.max()) {
                lower[k] = lo;
                if up > lo {
                    inv_range[k] = F::one() / (up - lo);
                }
            }
        }
        ColumnScaler { lower, inv_range }
    }

    /// Scaled value of the component `k` of the `i`th row of `x`
    #[inline]
    pub fn scaled(&self, x: &Array2<F>, i: usize, k: usize) -> F {
        (x[[i, k]] - self.lower[k]) * self.inv_range[k]
    }

    /// Returns the scaled design
    pub fn transform(&self, x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Array2<F> {
        let mut scaled = x.to_owned();
        for (k, mut col) in scaled.axis_iter_mut(Axis(1)).enumerate() {
            let (lo, inv) = (self.lower[k], self.inv_range[k]);
            col.mapv_inplace(|v| (v - lo) * inv);
        }
        scaled
    }
}

/// Normalizes each column of a design to [0, 1] by min-max scaling
pub fn normalize<F: Float>(x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Array2<F> {
    ColumnScaler::new(x).transform(x)
}

/// Swaps the values of rows `row1` and `row2` in the given column.
///
/// This is the only move applied to designs: as a permutation within a column
/// it preserves the LHS property. Applying it twice restores the design.
#[inline]
pub fn swap_in_column<F: Float>(x: &mut Array2<F>, row1: usize, row2: usize, column: usize) {
    x.swap([row1, column], [row2, column]);
}

/// Checks the LHS property of a design in `[0., 1.]^nx`: each column bucketed into
/// `n` strata `[k/n, (k+1)/n)` hits every stratum exactly once.
pub fn is_latin<F: Float>(x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> bool {
    let n = x.nrows();
    x.axis_iter(Axis(1)).all(|col| {
        let mut hits = vec![false; n];
        col.iter().all(|&v| {
            let v = v.to_f64().unwrap_or(f64::NAN);
            if !(0. ..=1.).contains(&v) {
                return false;
            }
            let k = ((v * n as f64).floor() as usize).min(n - 1);
            !std::mem::replace(&mut hits[k], true)
        })
    })
}
