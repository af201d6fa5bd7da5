use linfa::Float;
use ndarray::{Array2, ArrayBase, Data, Ix2};
use ndarray_rand::rand::Rng;

/// Generator of initial Latin Hypercube designs used by optimal LHS algorithms
///
/// A generator is able to draw `size` samples in `[0., 1.]^dim` (the standard space)
/// satisfying the LHS property, and to map such a design to the physical sample space
/// defined by `[lower_bound_xi, upper_bound_xi]^nx`.
pub trait DesignGenerator<F: Float> {
    /// Returns the bounds of the sample space
    ///
    /// # Returns
    ///
    /// * A (nx, 2) matrix where the ith row is the interval of the ith components of a sample.
    fn sampling_space(&self) -> &Array2<F>;

    /// Number of samples of generated designs
    fn size(&self) -> usize;

    /// Dimension of the sample space
    fn dim(&self) -> usize {
        self.sampling_space().nrows()
    }

    /// Generates a (size, dim)-shaped LHS design belonging to `[0., 1.]^dim`
    ///
    /// Random draws are taken from the given generator, which is only borrowed
    /// for the duration of the call.
    fn standard_design<R: Rng>(&self, rng: &mut R) -> Array2<F>;

    /// Maps a design from `[0., 1.]^dim` to the sample space
    ///
    /// # Parameters
    ///
    /// * `x`: a (ns, dim) matrix of samples in the standard space
    ///
    /// # Returns
    ///
    /// * A (ns, dim) matrix where each sample belongs to `[lower_bound_xi, upper_bound_xi]^nx`
    fn standard_to_physical(&self, x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Array2<F> {
        let xlimits = self.sampling_space();
        let lower = xlimits.column(0);
        let scaler = &xlimits.column(1) - &lower;
        x * &scaler + lower
    }
}
