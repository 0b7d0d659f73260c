//! Implementations of the [`Brancher`](super::Brancher) trait.
pub mod independent_variable_value_brancher;
