use crate::criteria::SpaceFillingCriterion;
use crate::errors::{OptLhsError, Result};
use crate::optimal_lhs::{OptimalLhs, OptimalLhsAlgorithm};
use crate::profiles::TemperatureProfile;
use crate::result::{History, OptimalLhsResult, RestartRecord, SpaceFillingSummary};
use crate::traits::DesignGenerator;
use crate::utils::swap_in_column;
use linfa::Float;
use log::debug;
use ndarray::{Array2, ArrayBase, Data, Ix2};
use ndarray_rand::rand::Rng;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

const HISTORY_LABELS: [&str; 3] = ["criterion", "probability", "temperature"];
/// Upper bound of the history rows allocated before running a chain
const MAX_PREALLOCATED_ROWS: usize = 1 << 16;

/// Design returned by an annealing chain
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub enum ChainOutput {
    /// state of the chain at the end of the iterations
    #[default]
    Terminal,
    /// best state visited by the chain
    BestVisited,
}

/// Optimal LHS by simulated annealing
///
/// Starting from a LHS design, each iteration swaps two values drawn at random
/// within a random column, which keeps the LHS property. A move improving the
/// criterion is always accepted, otherwise it is accepted with probability
/// `exp(delta / T)` where `delta < 0` is the loss and `T` the temperature given
/// by the profile. Rejected moves are undone.
///
/// The chain runs for the whole iteration budget of the profile, or until the
/// temperature reaches zero. The algorithm can be restarted several times, the
/// best final design over all runs is retained.
///
/// ```
/// use optlhs::{C2, GeometricProfile, Lhs, OptimalLhsAlgorithm, SimulatedAnnealingLhs};
/// use ndarray::arr2;
///
/// let xlimits = arr2(&[[0., 1.], [5., 10.]]);
/// let profile = GeometricProfile::new(10., 0.95, 500).unwrap();
/// let result = SimulatedAnnealingLhs::new(Lhs::new(&xlimits, 10), C2, profile)
///     .n_restarts(2)
///     .optimize_with_seed(42)
///     .unwrap();
/// assert_eq!(result.design().dim(), (10, 2));
/// assert_eq!(result.records().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct SimulatedAnnealingLhs<F, G, C, P>
where
    F: Float,
    G: DesignGenerator<F>,
    C: SpaceFillingCriterion<F>,
    P: TemperatureProfile<F>,
{
    base: OptimalLhs<F, G, C>,
    profile: P,
    /// Number of runs in addition to the first one
    n_restarts: usize,
    /// When set, every run starts from this design instead of a generated one
    start_design: Option<Array2<F>>,
    chain_output: ChainOutput,
}

impl<F, G, C, P> SimulatedAnnealingLhs<F, G, C, P>
where
    F: Float,
    G: DesignGenerator<F>,
    C: SpaceFillingCriterion<F>,
    P: TemperatureProfile<F>,
{
    /// Constructor given the generator of initial designs, the criterion to optimize
    /// and the temperature profile
    pub fn new(generator: G, criterion: C, profile: P) -> Self {
        SimulatedAnnealingLhs {
            base: OptimalLhs::new(generator, criterion),
            profile,
            n_restarts: 0,
            start_design: None,
            chain_output: ChainOutput::default(),
        }
    }

    /// Sets the number of runs in addition to the first one
    pub fn n_restarts(mut self, n_restarts: usize) -> Self {
        self.n_restarts = n_restarts;
        self
    }

    /// Sets the design returned by each run
    pub fn chain_output(mut self, chain_output: ChainOutput) -> Self {
        self.chain_output = chain_output;
        self
    }

    /// Sets the design in `[0, 1]^nx` every run starts from
    ///
    /// Returns an error if the design shape differs from the (size, dim) of
    /// the generator or if a value does not belong to [0, 1].
    pub fn with_start_design(mut self, x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Result<Self> {
        let expected = (self.base.generator().size(), self.base.generator().dim());
        if x.dim() != expected {
            return Err(OptLhsError::InvalidValue(format!(
                "Start design shape {:?} does not match expected {:?}",
                x.dim(),
                expected
            )));
        }
        if x.iter().any(|&v| !(v >= F::zero() && v <= F::one())) {
            return Err(OptLhsError::InvalidValue(
                "Start design values should belong to [0, 1]".to_string(),
            ));
        }
        self.start_design = Some(x.to_owned());
        Ok(self)
    }

    /// Common optimal LHS parameters
    pub fn base(&self) -> &OptimalLhs<F, G, C> {
        &self.base
    }

    /// Temperature profile
    pub fn profile(&self) -> &P {
        &self.profile
    }

    /// Runs one annealing chain from the given design
    fn anneal<R: Rng>(&self, mut x: Array2<F>, rng: &mut R) -> Result<RestartRecord<F>> {
        let criterion = self.base.criterion();
        let minimization = criterion.is_minimization();
        let (n, nx) = x.dim();
        let i_max = if n > 0 && nx > 0 {
            self.profile.i_max()
        } else {
            0
        };

        let mut crit = criterion.evaluate(&x);
        let mut best = match self.chain_output {
            ChainOutput::Terminal => None,
            ChainOutput::BestVisited => Some((x.clone(), crit)),
        };
        debug!("Annealing from {} = {}", criterion.name(), crit);

        let mut rows =
            Vec::with_capacity(HISTORY_LABELS.len() * i_max.min(MAX_PREALLOCATED_ROWS));
        let mut n_accepted = 0;
        let mut i = 0;
        let mut temperature = self.profile.temperature(0);
        while i < i_max && temperature > F::zero() {
            let column = rng.gen_range(0..nx);
            let row1 = rng.gen_range(0..n);
            let row2 = rng.gen_range(0..n);
            // drawn whatever the move to keep the sequence of draws
            let u = F::cast(rng.gen::<f64>());

            let mut proba = F::one();
            if row1 != row2 {
                let candidate = criterion.perturb_lhs(&mut x, crit, row1, row2, column);
                let delta = if minimization {
                    crit - candidate
                } else {
                    candidate - crit
                };
                if delta >= F::zero() {
                    crit = candidate;
                    n_accepted += 1;
                } else {
                    proba = (delta / temperature).exp().min(F::one());
                    if u < proba {
                        crit = candidate;
                        n_accepted += 1;
                    } else {
                        swap_in_column(&mut x, row1, row2, column);
                    }
                }
            }
            rows.extend([crit, proba, temperature]);

            if let Some((best_x, best_crit)) = best.as_mut() {
                if criterion.is_better(crit, *best_crit) {
                    best_x.assign(&x);
                    *best_crit = crit;
                }
            }

            i += 1;
            temperature = self.profile.temperature(i);
        }
        debug!(
            "Annealing ended after {} iterations ({} accepted moves) with {} = {}",
            i,
            n_accepted,
            criterion.name(),
            crit
        );

        let (x, crit) = best.unwrap_or((x, crit));
        let history = History::from_rows(&HISTORY_LABELS, rows)?;
        Ok(RestartRecord {
            summary: SpaceFillingSummary::new(&x),
            standard_design: x,
            value: crit,
            history,
        })
    }
}

impl<F, G, C, P> OptimalLhsAlgorithm<F> for SimulatedAnnealingLhs<F, G, C, P>
where
    F: Float,
    G: DesignGenerator<F>,
    C: SpaceFillingCriterion<F>,
    P: TemperatureProfile<F>,
{
    fn optimize<R: Rng>(&self, rng: &mut R) -> Result<OptimalLhsResult<F>> {
        let mut records = Vec::new();
        for run in 0..=self.n_restarts {
            let x = match &self.start_design {
                Some(x) => x.clone(),
                None => self.base.generator().standard_design(rng),
            };
            let record = self.anneal(x, rng)?;
            debug!("Run #{} ended with criterion {}", run, record.value);
            records.push(record);
        }
        Ok(self.base.finalize(records))
    }
}
