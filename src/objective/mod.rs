//! The objective which is maximised: a weighted sum of decision variables, together with the
//! upper bounds used to prune the search.

mod partition;

pub(crate) use partition::ExclusivePartition;

use crate::engine::assignments::ReadAssignment;
use crate::engine::variables::VariableId;
use crate::model::Preferences;
use crate::model::VariableKey;
use crate::model::VariableSpace;
use crate::options::BoundStrategy;

/// The coefficient of the variable `key` in the timetabling objective: the preference of its
/// professor for its day and slot, regardless of subject and hall.
pub fn preference_coefficient(preferences: &Preferences, key: VariableKey) -> i64 {
    preferences.get(key.professor, key.day, key.slot)
}

/// A linear objective `sum(c_i * x_i)` over boolean variables. Variables beyond the provided
/// coefficients have coefficient 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Objective {
    coefficients: Box<[i64]>,
}

impl Objective {
    /// The objective with `coefficients[i]` as the coefficient of the `i`-th variable.
    pub fn new(coefficients: impl Into<Box<[i64]>>) -> Objective {
        Objective {
            coefficients: coefficients.into(),
        }
    }

    /// The total preference satisfaction of a timetable.
    pub fn for_timetable(space: &VariableSpace, preferences: &Preferences) -> Objective {
        Objective::new(
            space
                .iter()
                .map(|(_, key)| preference_coefficient(preferences, key))
                .collect::<Vec<_>>(),
        )
    }

    pub fn coefficient(&self, variable: VariableId) -> i64 {
        self.coefficients
            .get(variable.index())
            .copied()
            .unwrap_or_default()
    }

    fn terms(&self) -> impl Iterator<Item = (VariableId, i64)> + '_ {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(index, &coefficient)| (VariableId::new(index as u32), coefficient))
    }

    /// The objective value of the variables which are 1.
    pub fn evaluate(&self, assignment: &impl ReadAssignment) -> i64 {
        self.terms()
            .filter(|&(variable, _)| assignment.assigned_value(variable) == Some(true))
            .map(|(_, coefficient)| coefficient)
            .sum()
    }

    /// An upper bound on the objective value of every solution which extends the assignment.
    pub(crate) fn upper_bound(
        &self,
        assignment: &impl ReadAssignment,
        strategy: BoundStrategy,
        partition: &ExclusivePartition,
    ) -> i64 {
        match strategy {
            BoundStrategy::Potential => self.potential(assignment, self.terms()),
            BoundStrategy::SubjectMaximum => {
                let grouped = partition
                    .groups()
                    .iter()
                    .map(|group| self.group_maximum(assignment, group))
                    .sum::<i64>();
                let uncovered = partition
                    .uncovered()
                    .iter()
                    .map(|&variable| (variable, self.coefficient(variable)));

                grouped + self.potential(assignment, uncovered)
            }
        }
    }

    /// The coefficients of the terms at 1, plus the positive coefficients of the open terms.
    fn potential(
        &self,
        assignment: &impl ReadAssignment,
        terms: impl Iterator<Item = (VariableId, i64)>,
    ) -> i64 {
        terms
            .map(
                |(variable, coefficient)| match assignment.assigned_value(variable) {
                    Some(true) => coefficient,
                    Some(false) => 0,
                    None => coefficient.max(0),
                },
            )
            .sum()
    }

    /// The contribution of an exactly-one group: the coefficient of its variable at 1, or else
    /// the largest coefficient it can still take.
    fn group_maximum(&self, assignment: &impl ReadAssignment, group: &[VariableId]) -> i64 {
        let mut best_open = None;
        for &variable in group {
            match assignment.assigned_value(variable) {
                Some(true) => return self.coefficient(variable),
                Some(false) => {}
                None => {
                    let coefficient = self.coefficient(variable);
                    best_open = Some(best_open.map_or(coefficient, |best: i64| best.max(coefficient)));
                }
            }
        }

        best_open.unwrap_or_default()
    }
}
