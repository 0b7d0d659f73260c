//! # Timetabler
//! A branch-and-bound engine for university timetables. Every subject is placed in exactly one
//! (professor, day, slot, hall) cell, a professor teaches at most one subject per slot, a hall
//! hosts at most one subject per slot, and the number of placements on a slot the professor
//! prefers is maximised.
//!
//! ```rust
//! # use timetabler::model::TimetableInstance;
//! # use timetabler::model::TimetableModel;
//! # use timetabler::options::SolverOptions;
//! # use timetabler::results::TerminalState;
//! # use timetabler::termination::Indefinite;
//! let model = TimetableModel::new(TimetableInstance::sample());
//! let outcome = timetabler::solve(&model, &SolverOptions::default(), Indefinite);
//!
//! assert_eq!(outcome.state, TerminalState::Optimal);
//! ```
#[allow(non_upper_case_globals)]
pub mod asserts;
mod api;
pub(crate) mod basic_types;
pub mod branching;
pub mod constraints;
pub(crate) mod engine;
pub mod extraction;
pub mod model;
pub mod objective;
pub mod options;
pub(crate) mod propagators;
pub mod runner;

#[cfg(test)]
mod tests;

pub use api::outputs as results;
pub use api::solve;
pub use api::solver::Solver;
pub use basic_types::ConstraintOperationError;
pub use basic_types::Inconsistency;
pub use propagators::CardinalityConstraint;
pub use propagators::ConstraintId;

pub mod termination {
    //! Conditions which stop the search before the space is exhausted.
    pub use crate::engine::termination::*;
}

pub mod statistics {
    pub use crate::basic_types::statistic_logging::*;
}

pub mod variables {
    pub use crate::engine::assignments::ReadAssignment;
    pub use crate::engine::variables::Literal;
    pub use crate::engine::variables::VariableId;
}
