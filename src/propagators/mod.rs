//! Contains the propagators of the engine. Every hard constraint of a timetable is a
//! cardinality constraint over boolean variables, so a single closed enum suffices.

pub(crate) mod cardinality;

use std::fmt::Display;
use std::fmt::Formatter;

pub use cardinality::CardinalityConstraint;

/// A handle to a constraint posted to the engine.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ConstraintId(u32);

impl ConstraintId {
    pub(crate) fn new(index: u32) -> Self {
        ConstraintId(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for ConstraintId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ConstraintId({})", self.0)
    }
}
