//! Conditions which decide when a search should stop before it has proven optimality.
//!
//! A search queries its condition once at the entry of every search node. When a condition
//! fires, the best solution found so far is reported as feasible rather than optimal.
mod combinator;
mod indefinite;
mod node_budget;
mod os_signal;
mod time_budget;

pub use combinator::Combinator;
pub use indefinite::Indefinite;
pub use node_budget::NodeBudget;
pub use os_signal::OsSignal;
pub use time_budget::TimeBudget;

/// The central trait that defines a termination condition.
pub trait TerminationCondition {
    /// Returns `true` when the search should stop; called at every search node.
    fn should_stop(&mut self) -> bool;
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(condition) => condition.should_stop(),
            None => false,
        }
    }
}

impl<T: TerminationCondition + ?Sized> TerminationCondition for &mut T {
    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }
}
