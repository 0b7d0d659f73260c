use thiserror::Error;

/// Errors related to adding constraints to the [`Solver`](crate::Solver).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConstraintOperationError {
    #[error("Adding the constraint led to a root-level contradiction")]
    InfeasibleConstraint,
    #[error("The solver is in an infeasible state; no constraints can be added")]
    InfeasibleState,
    #[error("The constraint refers to variable x{0}, which was not created by this solver")]
    UnknownVariable(usize),
}
