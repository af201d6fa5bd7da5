use crate::DesignGenerator;
use linfa::Float;
use ndarray::{s, Array, Array2, ArrayBase, Data, Ix2};
use ndarray_rand::{rand::seq::SliceRandom, rand::Rng, rand_distr::Uniform, RandomExt};

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Kinds of Latin Hypercube Design used as starting designs
#[derive(Clone, Debug, Default, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub enum LhsKind {
    /// sample is choosen randomly within its latin hypercube intervals
    #[default]
    Classic,
    /// sample is the middle of its latin hypercube intervals
    Centered,
}

/// The LHS design is built as follows: each dimension space is divided into ns sections
/// where ns is the number of sampling points, and one point in selected in each section.
/// The selection method gives different kind of LHS (see [LhsKind])
///
/// Unlike a sampling method, the generator does not own any random generator:
/// it is given the one of the running algorithm at each draw.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct Lhs<F: Float> {
    /// Sampling space definition as a (nx, 2) matrix
    /// The ith row is the [lower_bound, upper_bound] of xi, the ith component of x
    xlimits: Array2<F>,
    /// Number of samples of the design
    size: usize,
    /// The requested kind of LHS
    kind: LhsKind,
}

impl<F: Float> Lhs<F> {
    /// Constructor given a design space given a (nx, 2) matrix \[\[lower bound, upper bound\], ...\]
    /// and the number of samples of generated designs.
    ///
    /// **Panics** if xlimits number of columns is different from 2.
    ///
    /// ```
    /// use optlhs::Lhs;
    /// use ndarray::arr2;
    ///
    /// let doe = Lhs::new(&arr2(&[[0.0, 1.0], [5.0, 10.0]]), 10);
    /// ```
    pub fn new(xlimits: &ArrayBase<impl Data<Elem = F>, Ix2>, size: usize) -> Self {
        if xlimits.ncols() != 2 {
            panic!("xlimits must have 2 columns (lower, upper)");
        }
        Lhs {
            xlimits: xlimits.to_owned(),
            size,
            kind: LhsKind::default(),
        }
    }

    /// Sets the kind of LHS
    pub fn kind(mut self, kind: LhsKind) -> Self {
        self.kind = kind;
        self
    }

    fn classic_lhs<R: Rng>(&self, rng: &mut R) -> Array2<F> {
        let ns = self.size;
        let nx = self.xlimits.nrows();
        let cut = Array::linspace(0., 1., ns + 1);

        let rnd = Array::random_using((ns, nx), Uniform::new(0., 1.), rng);
        let a = cut.slice(s![..ns]).to_owned();
        let b = cut.slice(s![1..(ns + 1)]);
        let c = &b - &a;
        let mut lhs = Array2::<f64>::zeros((ns, nx));
        for j in 0..nx {
            let mut colj = (rnd.column(j).to_owned() * &c + &a).to_vec();
            colj.shuffle(rng);
            lhs.column_mut(j).assign(&Array::from_vec(colj));
        }
        lhs.mapv(|v| F::cast(v))
    }

    fn centered_lhs<R: Rng>(&self, rng: &mut R) -> Array2<F> {
        let ns = self.size;
        let nx = self.xlimits.nrows();
        let cut = Array::linspace(0., 1., ns + 1);

        let a = cut.slice(s![..ns]).to_owned();
        let b = cut.slice(s![1..(ns + 1)]);
        let mut c = ((a + b) / 2.).to_vec();
        let mut lhs = Array2::<f64>::zeros((ns, nx));

        for j in 0..nx {
            c.shuffle(rng);
            lhs.column_mut(j).assign(&Array::from_vec(c.clone()));
        }
        lhs.mapv(|v| F::cast(v))
    }
}

impl<F: Float> DesignGenerator<F> for Lhs<F> {
    fn sampling_space(&self) -> &Array2<F> {
        &self.xlimits
    }

    fn size(&self) -> usize {
        self.size
    }

    fn standard_design<R: Rng>(&self, rng: &mut R) -> Array2<F> {
        match &self.kind {
            LhsKind::Classic => self.classic_lhs(rng),
            LhsKind::Centered => self.centered_lhs(rng),
        }
    }
}
