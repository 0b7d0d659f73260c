//! Defines the constraints that the [`Solver`] provides out of the box which can be added to it.
//!
//! A [`Constraint`] is added to the [`Solver`] through a [`ConstraintPoster`]:
//!
//! ```rust
//! # use timetabler::constraints;
//! # use timetabler::Solver;
//! let mut solver = Solver::default();
//!
//! let a = solver.new_literal().variable();
//! let b = solver.new_literal().variable();
//! let c = solver.new_literal().variable();
//!
//! solver
//!     .add_constraint(constraints::exactly_one([a, b]))
//!     .post()
//!     .expect("no root-level conflict");
//! solver
//!     .add_constraint(constraints::at_most_one([b, c]))
//!     .post()
//!     .expect("no root-level conflict");
//! ```
//!
//! The hard constraints of a timetable are collected by the [`ConstraintRegistry`].

mod cardinality;
mod constraint_poster;
mod registry;

pub use cardinality::*;
pub use constraint_poster::*;
pub use registry::*;

use crate::ConstraintOperationError;
use crate::Solver;

/// A [`Constraint`] is a relation over variables. It disqualifies certain partial assignments
/// from being extended to a solution.
pub trait Constraint {
    /// Add the [`Constraint`] to the [`Solver`].
    ///
    /// This method returns a [`ConstraintOperationError`] if the addition of the [`Constraint`]
    /// led to a root-level conflict.
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError>;
}
