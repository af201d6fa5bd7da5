use crate::criteria::{C2, MinDist, PhiP, SpaceFillingCriterion};
use crate::errors::Result;
use linfa::Float;
use ndarray::{Array1, Array2, ArrayBase, ArrayView1, Data, Ix2};

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Diagnostic table of an optimization run: one row per iteration
/// (or per drawn design) and labelled columns.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct History<F: Float> {
    labels: Vec<String>,
    values: Array2<F>,
}

impl<F: Float> History<F> {
    /// Builds an history table from its column labels and its rows stored contiguously
    pub(crate) fn from_rows(labels: &[&str], rows: Vec<F>) -> Result<Self> {
        let ncols = labels.len();
        let nrows = if ncols == 0 { 0 } else { rows.len() / ncols };
        Ok(History {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            values: Array2::from_shape_vec((nrows, ncols), rows)?,
        })
    }

    /// Column labels
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The (niter, ncols) table
    pub fn values(&self) -> &Array2<F> {
        &self.values
    }

    /// Number of recorded iterations
    pub fn len(&self) -> usize {
        self.values.nrows()
    }

    /// Whether no iteration was recorded
    pub fn is_empty(&self) -> bool {
        self.values.nrows() == 0
    }

    /// Column of the table given its label if any
    pub fn column(&self, label: &str) -> Option<ArrayView1<F>> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|k| self.values.column(k))
    }
}

/// Values of the available space-filling criteria for a given design
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct SpaceFillingSummary<F: Float> {
    /// Centered L2-discrepancy
    pub c2: F,
    /// PhiP criterion with default exponent
    pub phip: F,
    /// Minimum distance between points
    pub mindist: F,
}

impl<F: Float> SpaceFillingSummary<F> {
    /// Computes the summary of the given design
    pub fn new(x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Self {
        SpaceFillingSummary {
            c2: C2.evaluate(x),
            phip: PhiP::default().evaluate(x),
            mindist: MinDist.evaluate(x),
        }
    }
}

/// Outcome of one optimization run
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct RestartRecord<F: Float> {
    /// Final design in `[0, 1]^nx`
    pub standard_design: Array2<F>,
    /// Criterion value of the final design
    pub value: F,
    /// Iterations history
    pub history: History<F>,
    /// All criteria values of the final design
    pub summary: SpaceFillingSummary<F>,
}

/// Result of an optimal LHS algorithm: the best design found over all runs
/// together with the records of every run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct OptimalLhsResult<F: Float> {
    design: Array2<F>,
    weights: Array1<F>,
    minimization: bool,
    optimal_index: usize,
    records: Vec<RestartRecord<F>>,
}

impl<F: Float> OptimalLhsResult<F> {
    /// Builds the result from the records of the runs and the design of the best one
    /// mapped in the physical space.
    pub(crate) fn new(
        design: Array2<F>,
        minimization: bool,
        optimal_index: usize,
        records: Vec<RestartRecord<F>>,
    ) -> Self {
        let n = design.nrows();
        let weights = Array1::from_elem(n, F::one() / F::cast(n.max(1)));
        OptimalLhsResult {
            design,
            weights,
            minimization,
            optimal_index,
            records,
        }
    }

    /// Optimal design in the physical space
    pub fn design(&self) -> &Array2<F> {
        &self.design
    }

    /// Uniform weights of the design points
    pub fn weights(&self) -> &Array1<F> {
        &self.weights
    }

    /// Optimal design in `[0, 1]^nx`
    pub fn standard_design(&self) -> &Array2<F> {
        &self.optimal().standard_design
    }

    /// Criterion value of the optimal design
    pub fn value(&self) -> F {
        self.optimal().value
    }

    /// History of the run which found the optimal design
    pub fn history(&self) -> &History<F> {
        &self.optimal().history
    }

    /// Whether the optimized criterion was minimized
    pub fn is_minimization(&self) -> bool {
        self.minimization
    }

    /// Index of the run which found the optimal design
    pub fn optimal_index(&self) -> usize {
        self.optimal_index
    }

    /// Record of the run which found the optimal design
    pub fn optimal(&self) -> &RestartRecord<F> {
        &self.records[self.optimal_index]
    }

    /// Records of all runs
    pub fn records(&self) -> &[RestartRecord<F>] {
        &self.records
    }
}
