#![cfg(any(test, doc))]
//! This module exposes helpers that aid testing of cardinality propagators. The [`TestSolver`]
//! allows setting up specific scenarios under which to test the various operations of a
//! propagator.
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::engine::assignments::Assignments;
use crate::engine::assignments::ReadAssignment;
use crate::engine::variables::Literal;
use crate::engine::variables::VariableId;
use crate::propagators::CardinalityConstraint;

/// A container for boolean variables, which can be used to test propagators.
#[derive(Default, Debug)]
pub(crate) struct TestSolver {
    pub(crate) assignments: Assignments,
}

#[allow(unused)]
impl TestSolver {
    pub(crate) fn new_variable(&mut self) -> VariableId {
        self.assignments.grow()
    }

    pub(crate) fn new_variables(&mut self, n: usize) -> Vec<VariableId> {
        (0..n).map(|_| self.new_variable()).collect()
    }

    pub(crate) fn set(&mut self, variable: VariableId, value: bool) {
        let result = self.assignments.assign(Literal::new(variable, value), true);
        assert!(
            result.is_ok(),
            "{variable} is already assigned the opposite value"
        );
    }

    pub(crate) fn value(&self, variable: VariableId) -> Option<bool> {
        self.assignments.assigned_value(variable)
    }

    /// Runs the propagator once and returns the literals it forces, without applying them.
    pub(crate) fn forced_by(
        &self,
        constraint: &CardinalityConstraint,
    ) -> Result<Vec<Literal>, Inconsistency> {
        let mut forced = vec![];
        constraint.propagate(&self.assignments, &mut forced)?;
        Ok(forced)
    }

    /// Runs the propagator to a fixpoint, applying every forced literal.
    pub(crate) fn propagate(&mut self, constraint: &CardinalityConstraint) -> PropagationStatus {
        loop {
            let forced = self.forced_by(constraint)?;
            if forced.is_empty() {
                return Ok(());
            }

            for literal in forced {
                self.assignments.assign(literal, false)?;
            }
        }
    }

    pub(crate) fn assert_values(&self, variables: &[VariableId], expected: &[Option<bool>]) {
        let actual = variables
            .iter()
            .map(|&variable| self.value(variable))
            .collect::<Vec<_>>();

        assert_eq!(
            expected,
            &actual[..],
            "The expected values {expected:?} did not match the actual values {actual:?}"
        );
    }
}
