//! Options which influence how the [`Solver`](crate::Solver) searches.
use std::num::NonZeroUsize;

use clap::ValueEnum;

/// Which variable the search branches on next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum SearchStrategy {
    /// The first open candidate of the undecided subject with the fewest open candidates.
    #[default]
    MostConstrained,
    /// The open variable which comes first in the (subject, professor, day, slot, hall) order.
    InputOrder,
}

/// The upper bound used to prune search nodes. Both bounds are admissible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum BoundStrategy {
    /// The objective of the variables at 1 plus every positive coefficient which can still be
    /// collected.
    Potential,
    /// Per exactly-one group, the coefficient of its variable at 1 or else the largest
    /// coefficient among its open variables.
    #[default]
    SubjectMaximum,
}

/// Options for the [`Solver`](crate::Solver) and [`solve`](crate::solve).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverOptions {
    pub search_strategy: SearchStrategy,
    pub bound: BoundStrategy,
    /// The number of threads which search disjoint parts of the search space; `1` searches
    /// sequentially.
    pub num_workers: NonZeroUsize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            search_strategy: SearchStrategy::default(),
            bound: BoundStrategy::default(),
            num_workers: NonZeroUsize::MIN,
        }
    }
}
