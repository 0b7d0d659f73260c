//! Contains structures and traits to define the decision making procedure of the
//! [`Solver`](crate::Solver).
//!
//! A [`Brancher`] decides which literal to assign next. The provided implementation
//! [`IndependentVariableValueBrancher`] composes a [`VariableSelector`], which picks an unassigned
//! variable, with a [`ValueSelector`], which picks the value to try first. The negation of every
//! decision is explored when the search backtracks over it.
//!
//! ```rust
//! # use timetabler::branching::*;
//! # use timetabler::Solver;
//! let mut solver = Solver::default();
//! let variables = solver
//!     .new_literals()
//!     .take(4)
//!     .map(|literal| literal.variable())
//!     .collect::<Vec<_>>();
//!
//! let mut brancher =
//!     IndependentVariableValueBrancher::new(InputOrder::new(&variables), InDomainMin);
//! ```

mod brancher;
pub mod branchers;
mod selection_context;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::Brancher;
pub use branchers::independent_variable_value_brancher::DefaultBrancher;
pub use branchers::independent_variable_value_brancher::IndependentVariableValueBrancher;
pub use selection_context::SelectionContext;
pub use value_selection::*;
pub use variable_selection::*;
