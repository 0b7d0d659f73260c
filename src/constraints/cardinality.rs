use super::Constraint;
use crate::propagators::CardinalityConstraint;
use crate::variables::VariableId;
use crate::ConstraintOperationError;
use crate::Solver;

/// Creates the [`Constraint`] `sum(variables) == 1`.
pub fn exactly_one(variables: impl Into<Box<[VariableId]>>) -> CardinalityConstraint {
    CardinalityConstraint::ExactlyOne(variables.into())
}

/// Creates the [`Constraint`] `sum(variables) <= 1`.
pub fn at_most_one(variables: impl Into<Box<[VariableId]>>) -> CardinalityConstraint {
    CardinalityConstraint::AtMostOne(variables.into())
}

impl Constraint for CardinalityConstraint {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        solver.add_cardinality_constraint(self).map(|_| ())
    }
}
