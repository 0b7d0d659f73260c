//! Reads the outcome of a solve back in the terms of the timetable: which professor teaches
//! each subject, when and where.

use thiserror::Error;

use crate::model::TimetableModel;
use crate::objective::preference_coefficient;
use crate::results::SearchStatistics;
use crate::results::SolveOutcome;
use crate::results::TerminalState;
use crate::timetabler_assert_eq_simple;
use crate::timetabler_assert_moderate;

/// Returned when the outcome of a solve holds no solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum NoSolutionError {
    #[error("no schedule satisfies every hard constraint")]
    Infeasible,
    /// The search was stopped early; a schedule may still exist.
    #[error("the search was stopped before a schedule was found")]
    BudgetExhausted,
}

/// One teaching duty of the schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub subject: usize,
    pub professor: usize,
    pub day: usize,
    pub slot: usize,
    pub hall: usize,
    /// The preference of the professor for this day and slot.
    pub preference: i64,
}

/// The schedule of a solve together with how it was obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentReport {
    state: TerminalState,
    objective_value: i64,
    /// Indexed by subject.
    assignments: Vec<Assignment>,
    statistics: SearchStatistics,
}

impl AssignmentReport {
    pub fn state(&self) -> TerminalState {
        self.state
    }

    pub fn objective_value(&self) -> i64 {
        self.objective_value
    }

    /// Every duty, in subject order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn assignment(&self, subject: usize) -> Option<&Assignment> {
        self.assignments.get(subject)
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// The duties on the day, ordered by (slot, hall, professor, subject).
    pub fn day_schedule(&self, day: usize) -> Vec<&Assignment> {
        let mut duties = self
            .assignments
            .iter()
            .filter(|assignment| assignment.day == day)
            .collect::<Vec<_>>();
        duties.sort_by_key(|a| (a.slot, a.hall, a.professor, a.subject));
        duties
    }
}

/// Maps each subject of the solution to its (professor, day, slot, hall).
pub fn extract(
    outcome: &SolveOutcome,
    model: &TimetableModel,
) -> Result<AssignmentReport, NoSolutionError> {
    let solution = match (&outcome.solution, outcome.state) {
        (Some(solution), TerminalState::Optimal | TerminalState::Feasible) => solution,
        _ if outcome.statistics.budget_exhausted => return Err(NoSolutionError::BudgetExhausted),
        _ => return Err(NoSolutionError::Infeasible),
    };

    timetabler_assert_moderate!(
        model.registry().find_violation(solution).is_none(),
        "the solution violates {:?}",
        model.registry().find_violation(solution)
    );

    let space = model.space();
    let preferences = model.instance().preferences();
    let mut assignments = solution
        .true_variables()
        .map(|variable| {
            let key = space.key(variable);
            Assignment {
                subject: key.subject,
                professor: key.professor,
                day: key.day,
                slot: key.slot,
                hall: key.hall,
                preference: preference_coefficient(preferences, key),
            }
        })
        .collect::<Vec<_>>();
    assignments.sort_by_key(|assignment| assignment.subject);

    timetabler_assert_eq_simple!(assignments.len(), space.dimensions().subjects());
    timetabler_assert_eq_simple!(
        assignments.iter().map(|a| a.preference).sum::<i64>(),
        solution.objective_value()
    );

    Ok(AssignmentReport {
        state: outcome.state,
        objective_value: solution.objective_value(),
        assignments,
        statistics: outcome.statistics,
    })
}
