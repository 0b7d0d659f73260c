use std::fmt::Display;
use std::fmt::Formatter;
use std::time::Duration;

use super::OptimisationResult;
use super::Solution;

/// How a solve ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerminalState {
    /// The search space was exhausted; the solution is optimal.
    Optimal,
    /// The search was stopped early; the solution is the best one found.
    Feasible,
    /// No solution was found. Unless the statistics report an exhausted budget, none exists.
    Infeasible,
}

impl Display for TerminalState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = match self {
            TerminalState::Optimal => "OPTIMAL",
            TerminalState::Feasible => "FEASIBLE",
            TerminalState::Infeasible => "INFEASIBLE",
        };
        f.write_str(state)
    }
}

/// Counters describing the work of a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Search nodes entered.
    pub nodes: u64,
    /// Literals assigned by branching, counting both branches of every decision.
    pub branches: u64,
    /// Nodes at which propagation found a contradiction.
    pub conflicts: u64,
    /// Nodes whose upper bound did not exceed the incumbent.
    pub pruned: u64,
    /// Improving solutions installed as incumbent.
    pub solutions: u64,
    /// Constraint propagations.
    pub propagations: u64,
    pub elapsed: Duration,
    /// Whether the search was stopped by its termination condition.
    pub budget_exhausted: bool,
}

impl SearchStatistics {
    /// Adds the counters of another search. The elapsed time is the longest of the two, as
    /// searches which are merged run side by side.
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.nodes += other.nodes;
        self.branches += other.branches;
        self.conflicts += other.conflicts;
        self.pruned += other.pruned;
        self.solutions += other.solutions;
        self.propagations += other.propagations;
        self.elapsed = self.elapsed.max(other.elapsed);
        self.budget_exhausted |= other.budget_exhausted;
    }
}

/// The result of [`solve`](crate::solve): the terminal state, the best solution and the
/// statistics of the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveOutcome {
    pub state: TerminalState,
    pub solution: Option<Solution>,
    pub statistics: SearchStatistics,
}

impl SolveOutcome {
    /// Converts the result of a single search. An interrupted search is recorded in
    /// [`SearchStatistics::budget_exhausted`]; without a solution it is reported as
    /// [`TerminalState::Infeasible`].
    pub fn from_result(result: OptimisationResult, mut statistics: SearchStatistics) -> Self {
        let (state, solution) = match result {
            OptimisationResult::Optimal(solution) => (TerminalState::Optimal, Some(solution)),
            OptimisationResult::Satisfiable(solution) => {
                statistics.budget_exhausted = true;
                (TerminalState::Feasible, Some(solution))
            }
            OptimisationResult::Unsatisfiable => (TerminalState::Infeasible, None),
            OptimisationResult::Unknown => {
                statistics.budget_exhausted = true;
                (TerminalState::Infeasible, None)
            }
        };

        SolveOutcome {
            state,
            solution,
            statistics,
        }
    }

    pub fn objective_value(&self) -> Option<i64> {
        self.solution.as_ref().map(Solution::objective_value)
    }
}
