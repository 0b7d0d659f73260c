use crate::engine::assignments::Assignments;
use crate::engine::assignments::ReadAssignment;
use crate::engine::variables::VariableId;

/// A read-only view of the current assignment, handed to the [`Brancher`](super::Brancher).
#[derive(Clone, Copy, Debug)]
pub struct SelectionContext<'a> {
    assignments: &'a Assignments,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(assignments: &'a Assignments) -> Self {
        SelectionContext { assignments }
    }

    pub fn is_fixed(&self, variable: VariableId) -> bool {
        self.assignments.is_fixed(variable)
    }

    pub fn value(&self, variable: VariableId) -> Option<bool> {
        self.assignments.assigned_value(variable)
    }

    pub fn num_unassigned(&self) -> usize {
        self.assignments.num_unassigned()
    }

    #[cfg(test)]
    pub(crate) fn create_for_testing(num_variables: usize) -> Assignments {
        let mut assignments = Assignments::default();
        for _ in 0..num_variables {
            let _ = assignments.grow();
        }
        assignments
    }
}
