use crate::criteria::SpaceFillingCriterion;
use crate::errors::{OptLhsError, Result};
use crate::optimal_lhs::{OptimalLhs, OptimalLhsAlgorithm};
use crate::result::{History, OptimalLhsResult, RestartRecord, SpaceFillingSummary};
use crate::traits::DesignGenerator;
use linfa::Float;
use log::debug;
use ndarray::Array2;
use ndarray_rand::rand::Rng;

const HISTORY_LABELS: [&str; 1] = ["criterion"];

/// Optimal LHS by Monte Carlo search
///
/// `n_simu` designs are drawn from the generator and scored, the best one is retained
/// (the first one drawn in case of ties).
///
/// ```
/// use optlhs::{Lhs, MinDist, MonteCarloLhs, OptimalLhsAlgorithm};
/// use ndarray::arr2;
///
/// let xlimits = arr2(&[[0., 1.], [5., 10.]]);
/// let result = MonteCarloLhs::new(Lhs::new(&xlimits, 10), MinDist, 100)
///     .unwrap()
///     .optimize_with_seed(42)
///     .unwrap();
/// assert_eq!(result.history().len(), 100);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloLhs<F, G, C>
where
    F: Float,
    G: DesignGenerator<F>,
    C: SpaceFillingCriterion<F>,
{
    base: OptimalLhs<F, G, C>,
    n_simu: usize,
}

impl<F, G, C> MonteCarloLhs<F, G, C>
where
    F: Float,
    G: DesignGenerator<F>,
    C: SpaceFillingCriterion<F>,
{
    /// Constructor given the generator of designs, the criterion to optimize
    /// and the number of designs to draw.
    ///
    /// Returns an error if `n_simu` is 0.
    pub fn new(generator: G, criterion: C, n_simu: usize) -> Result<Self> {
        if n_simu == 0 {
            return Err(OptLhsError::InvalidConfigError(
                "Monte Carlo LHS needs at least one simulation".to_string(),
            ));
        }
        Ok(MonteCarloLhs {
            base: OptimalLhs::new(generator, criterion),
            n_simu,
        })
    }

    /// Common optimal LHS parameters
    pub fn base(&self) -> &OptimalLhs<F, G, C> {
        &self.base
    }

    /// Number of drawn designs
    pub fn n_simu(&self) -> usize {
        self.n_simu
    }
}

impl<F, G, C> OptimalLhsAlgorithm<F> for MonteCarloLhs<F, G, C>
where
    F: Float,
    G: DesignGenerator<F>,
    C: SpaceFillingCriterion<F>,
{
    fn optimize<R: Rng>(&self, rng: &mut R) -> Result<OptimalLhsResult<F>> {
        let generator = self.base.generator();
        let criterion = self.base.criterion();

        let mut values = Vec::with_capacity(self.n_simu);
        let mut best: Option<(Array2<F>, F)> = None;
        for _ in 0..self.n_simu {
            let x = generator.standard_design(rng);
            let crit = criterion.evaluate(&x);
            values.push(crit);
            let improved = match &best {
                Some((_, best_crit)) => criterion.is_better(crit, *best_crit),
                None => true,
            };
            if improved {
                best = Some((x, crit));
            }
        }
        let (x, crit) = best.ok_or_else(|| {
            OptLhsError::InvalidConfigError("No design drawn".to_string())
        })?;
        debug!(
            "Monte Carlo search: best {} = {} over {} designs",
            criterion.name(),
            crit,
            self.n_simu
        );

        let record = RestartRecord {
            summary: SpaceFillingSummary::new(&x),
            standard_design: x,
            value: crit,
            history: History::from_rows(&HISTORY_LABELS, values)?,
        };
        Ok(self.base.finalize(vec![record]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{C2, MinDist, PhiP, SpaceFilling};
    use crate::lhs::Lhs;
    use crate::utils::is_latin;
    use approx::assert_abs_diff_eq;
    use ndarray::arr2;
    use ndarray_rand::rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn test_monte_carlo_monotone_improvement() {
        let lhs = Lhs::new(&arr2(&[[0., 1.], [0., 1.], [0., 1.]]), 10);
        for criterion in [SpaceFilling::C2, SpaceFilling::MinDist] {
            // the same seed draws the same first designs, so the optimum
            // found with more simulations is never worse
            let mut previous: Option<f64> = None;
            for n_simu in [1, 2, 5, 10, 20, 50] {
                let result = MonteCarloLhs::new(lhs.clone(), criterion, n_simu)
                    .unwrap()
                    .optimize_with_seed(42)
                    .unwrap();
                let value = result.value();
                let values = result.history().column("criterion").unwrap();
                assert_eq!(values.len(), n_simu);
                assert!(values.iter().any(|&v| v == value));
                assert!(values.iter().all(|&v| !criterion.is_better(v, value)));
                if let Some(previous) = previous {
                    assert!(!criterion.is_better(previous, value));
                }
                previous = Some(value);

                assert_eq!(value, criterion.evaluate(result.standard_design()));
                assert!(is_latin(result.standard_design()));
            }
        }
    }

    #[test]
    fn test_monte_carlo_improves_on_first_draw() {
        let lhs = Lhs::<f64>::new(&arr2(&[[0., 1.], [0., 1.]]), 8);
        let first = MonteCarloLhs::new(lhs.clone(), MinDist, 1)
            .unwrap()
            .optimize_with_seed(7)
            .unwrap();
        let result = MonteCarloLhs::new(lhs, MinDist, 200)
            .unwrap()
            .optimize_with_seed(7)
            .unwrap();
        assert_eq!(
            result.history().column("criterion").unwrap()[0],
            first.value()
        );
        assert!(result.value() >= first.value());
        assert!(!result.is_minimization());
    }

    #[test]
    fn test_monte_carlo_first_best_kept() {
        let lhs = Lhs::new(&arr2(&[[0., 1.], [0., 1.]]), 3);
        let result = MonteCarloLhs::new(lhs.clone(), MinDist, 30)
            .unwrap()
            .optimize_with_seed(0)
            .unwrap();
        let values = result.history().column("criterion").unwrap();
        let best = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        assert_eq!(result.value(), best);

        // replay the draws to find the first design reaching the best value
        let mut rng = Xoshiro256Plus::seed_from_u64(0);
        let first = (0..30)
            .map(|_| lhs.standard_design(&mut rng))
            .find(|x| MinDist.evaluate(x) == best)
            .unwrap();
        assert_eq!(result.standard_design(), &first);
    }

    #[test]
    fn test_monte_carlo_physical_design() {
        let xlimits = arr2(&[[5., 10.], [-1., 1.]]);
        let lhs = Lhs::new(&xlimits, 5);
        let result = MonteCarloLhs::new(lhs, PhiP::default(), 10)
            .unwrap()
            .optimize_with_seed(3)
            .unwrap();
        let expected = result.standard_design() * &arr2(&[[5., 2.]]) + &arr2(&[[5., -1.]]);
        assert_abs_diff_eq!(result.design(), &expected, epsilon = 1e-12);
        assert_eq!(result.records().len(), 1);
        assert_eq!(result.optimal_index(), 0);
    }

    #[test]
    fn test_monte_carlo_without_dimension() {
        let lhs = Lhs::new(&Array2::<f64>::zeros((0, 2)), 4);
        for criterion in [
            SpaceFilling::C2,
            SpaceFilling::MinDist,
            SpaceFilling::PhiP(PhiP::default()),
        ] {
            let result = MonteCarloLhs::new(lhs.clone(), criterion, 3)
                .unwrap()
                .optimize_with_seed(1)
                .unwrap();
            assert_eq!(result.design().dim(), (4, 0));
            assert_eq!(result.history().len(), 3);
        }
    }

    #[test]
    fn test_monte_carlo_no_simulation() {
        let lhs = Lhs::new(&arr2(&[[0., 1.]]), 5);
        assert!(MonteCarloLhs::new(lhs, C2, 0).is_err());
    }
}
