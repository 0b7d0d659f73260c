//! Contains the outputs of solving using the [`Solver`](crate::Solver) and
//! [`solve`](crate::solve).

mod solution;
mod solve_outcome;

pub use solution::Solution;
pub use solve_outcome::SearchStatistics;
pub use solve_outcome::SolveOutcome;
pub use solve_outcome::TerminalState;

/// The result of a call to [`Solver::maximise`](crate::Solver::maximise).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptimisationResult {
    /// The solver has found the optimal solution.
    Optimal(Solution),
    /// The solver was interrupted before proving optimality; this is the best solution found.
    Satisfiable(Solution),
    /// There is no solution (under the given assumptions, if any).
    Unsatisfiable,
    /// The solver was interrupted before finding any solution.
    Unknown,
}
