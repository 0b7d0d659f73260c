//! The best solution found so far, shared between every search which takes part in a solve.
//!
//! The objective and rank of the incumbent are mirrored in atomics so the bound test performed
//! at every search node is a lock-free read; the solution itself sits behind a [`Mutex`] which
//! is the source of truth when installing. A single sequential search uses the same structure
//! without contention.
//!
//! The rank is stored before the objective is published, so a reader which loads an objective
//! sees the rank of that incumbent or of a later one. Later incumbents only compare better, so
//! a stale pair can cost a prune but never causes a wrong one.
use std::sync::atomic::AtomicI64;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::api::outputs::Solution;

/// Sentinel for "no incumbent yet"; every objective value compares greater.
const NO_INCUMBENT: i64 = i64::MIN;

#[derive(Debug)]
struct RankedSolution {
    rank: usize,
    solution: Solution,
}

#[derive(Debug)]
pub(crate) struct SharedIncumbent {
    best_objective: AtomicI64,
    best_rank: AtomicUsize,
    solution: Mutex<Option<RankedSolution>>,
}

impl Default for SharedIncumbent {
    fn default() -> Self {
        SharedIncumbent {
            best_objective: AtomicI64::new(NO_INCUMBENT),
            best_rank: AtomicUsize::new(usize::MAX),
            solution: Mutex::new(None),
        }
    }
}

impl SharedIncumbent {
    /// The objective of the incumbent, or `i64::MIN` if no solution has been installed.
    pub(crate) fn best_objective(&self) -> i64 {
        self.best_objective.load(Ordering::Acquire)
    }

    /// Whether no solution with an objective of at most `upper_bound` found by the search of
    /// the given `rank` can be installed, so the node bounded by it can be pruned.
    ///
    /// Equal objectives only prune when the incumbent comes from a rank no higher than `rank`;
    /// otherwise the search continues so the lowest rank wins the tie regardless of timing.
    pub(crate) fn dominates(&self, upper_bound: i64, rank: usize) -> bool {
        let best_objective = self.best_objective();
        match upper_bound.cmp(&best_objective) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Equal => self.best_rank.load(Ordering::Relaxed) <= rank,
            std::cmp::Ordering::Greater => false,
        }
    }

    pub(crate) fn has_solution(&self) -> bool {
        self.best_objective() != NO_INCUMBENT
    }

    /// Installs the solution produced by `solution` if `objective` improves on the incumbent, or
    /// equals it while coming from a search with a lower `rank`. The closure is only invoked when
    /// the candidate is installed.
    ///
    /// Returns whether the candidate was installed.
    pub(crate) fn try_install(
        &self,
        objective: i64,
        rank: usize,
        solution: impl FnOnce() -> Solution,
    ) -> bool {
        if objective < self.best_objective() {
            return false;
        }

        let mut guard = self
            .solution
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Re-check against the locked value, the atomic may be stale.
        if let Some(current) = guard.as_ref() {
            let current_objective = current.solution.objective_value();
            let improves = objective > current_objective
                || (objective == current_objective && rank < current.rank);
            if !improves {
                return false;
            }
        }

        *guard = Some(RankedSolution {
            rank,
            solution: solution(),
        });
        self.best_rank.store(rank, Ordering::Relaxed);
        self.best_objective.store(objective, Ordering::Release);

        true
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> Option<Solution> {
        self.solution
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|ranked| ranked.solution.clone())
    }

    pub(crate) fn into_solution(self) -> Option<Solution> {
        self.solution
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .map(|ranked| ranked.solution)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::SharedIncumbent;
    use crate::api::outputs::Solution;

    fn solution(objective: i64) -> Solution {
        Solution::new(vec![true, false].into_boxed_slice(), objective)
    }

    #[test]
    fn starts_without_a_solution() {
        let incumbent = SharedIncumbent::default();

        assert!(!incumbent.has_solution());
        assert_eq!(incumbent.best_objective(), i64::MIN);
        assert!(incumbent.snapshot().is_none());
    }

    #[test]
    fn only_strict_improvements_replace_the_incumbent_of_the_same_rank() {
        let incumbent = SharedIncumbent::default();

        assert!(incumbent.try_install(3, 0, || solution(3)));
        assert!(!incumbent.try_install(3, 0, || solution(3)));
        assert!(!incumbent.try_install(2, 0, || solution(2)));
        assert!(incumbent.try_install(5, 0, || solution(5)));

        assert_eq!(incumbent.best_objective(), 5);
        assert_eq!(
            incumbent.into_solution().map(|s| s.objective_value()),
            Some(5)
        );
    }

    #[test]
    fn equal_objectives_resolve_to_the_lowest_rank() {
        let incumbent = SharedIncumbent::default();

        assert!(incumbent.try_install(4, 3, || solution(4)));
        assert!(incumbent.try_install(4, 1, || solution(4)));
        assert!(!incumbent.try_install(4, 2, || solution(4)));
    }

    #[test]
    fn equal_bounds_are_only_pruned_at_or_above_the_incumbent_rank() {
        let incumbent = SharedIncumbent::default();
        assert!(!incumbent.dominates(i64::MIN + 1, 0));

        let _ = incumbent.try_install(4, 2, || solution(4));

        assert!(incumbent.dominates(3, 0));
        assert!(!incumbent.dominates(4, 1));
        assert!(incumbent.dominates(4, 2));
        assert!(incumbent.dominates(4, 3));
        assert!(!incumbent.dominates(5, 3));
    }

    #[test]
    fn closure_is_not_called_for_rejected_candidates() {
        let incumbent = SharedIncumbent::default();
        let _ = incumbent.try_install(10, 0, || solution(10));

        let installed = incumbent.try_install(1, 0, || panic!("should not build the solution"));

        assert!(!installed);
    }

    #[test]
    fn concurrent_installs_keep_the_maximum() {
        let incumbent = SharedIncumbent::default();

        thread::scope(|scope| {
            for worker in 0..8_i64 {
                let incumbent = &incumbent;
                let _ = scope.spawn(move || {
                    for objective in 0..50 {
                        let value = objective * 8 + worker;
                        let _ = incumbent.try_install(value, worker as usize, || solution(value));
                    }
                });
            }
        });

        assert_eq!(incumbent.best_objective(), 49 * 8 + 7);
        assert_eq!(
            incumbent.snapshot().map(|s| s.objective_value()),
            Some(49 * 8 + 7)
        );
    }
}
