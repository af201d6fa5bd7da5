use crate::criteria::SpaceFillingCriterion;
use crate::errors::Result;
use crate::result::{OptimalLhsResult, RestartRecord};
use crate::traits::DesignGenerator;
use linfa::Float;
use log::info;
use ndarray_rand::rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
use std::marker::PhantomData;

/// An algorithm searching for the LHS design optimizing a space-filling criterion
pub trait OptimalLhsAlgorithm<F: Float> {
    /// Runs the optimization using the given random generator
    ///
    /// The generator is only borrowed: draws are taken in a fixed order so that a given
    /// generator state always leads to the same result.
    fn optimize<R: Rng>(&self, rng: &mut R) -> Result<OptimalLhsResult<F>>;

    /// Runs the optimization with a random generator seeded with `seed`
    fn optimize_with_seed(&self, seed: u64) -> Result<OptimalLhsResult<F>> {
        self.optimize(&mut Xoshiro256Plus::seed_from_u64(seed))
    }
}

/// Common part of optimal LHS algorithms: the generator of initial designs
/// and the criterion to optimize.
#[derive(Clone, Debug)]
pub struct OptimalLhs<F: Float, G: DesignGenerator<F>, C: SpaceFillingCriterion<F>> {
    generator: G,
    criterion: C,
    phantom: PhantomData<F>,
}

impl<F: Float, G: DesignGenerator<F>, C: SpaceFillingCriterion<F>> OptimalLhs<F, G, C> {
    /// Constructor
    pub fn new(generator: G, criterion: C) -> Self {
        OptimalLhs {
            generator,
            criterion,
            phantom: PhantomData,
        }
    }

    /// Generator of initial designs
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Optimized criterion
    pub fn criterion(&self) -> &C {
        &self.criterion
    }

    /// Selects the best run (the first one in case of ties) and maps its
    /// design to the physical space.
    ///
    /// `records` is expected to hold at least one run.
    pub(crate) fn finalize(&self, records: Vec<RestartRecord<F>>) -> OptimalLhsResult<F> {
        let mut optimal_index = 0;
        for (i, record) in records.iter().enumerate().skip(1) {
            if self
                .criterion
                .is_better(record.value, records[optimal_index].value)
            {
                optimal_index = i;
            }
        }
        let standard = &records[optimal_index].standard_design;
        let design = self.generator.standard_to_physical(standard);
        info!(
            "Optimal LHS ({} runs): {} = {} found by run #{}",
            records.len(),
            self.criterion.name(),
            records[optimal_index].value,
            optimal_index
        );
        OptimalLhsResult::new(
            design,
            self.criterion.is_minimization(),
            optimal_index,
            records,
        )
    }
}
