//! Provides the [`VariableSelector`] trait which is required
//! for variable selectors to implement; the main method in this trait relies on
//! [`VariableSelector::select_variable`].
//!
//! Furthermore, it defines several implementations of the [`VariableSelector`] trait such as
//! [`MostConstrained`]. Any [`VariableSelector`] should only select unassigned variables.

mod input_order;
mod most_constrained;
mod variable_selector;

pub use input_order::*;
pub use most_constrained::*;
pub use variable_selector::VariableSelector;
