use crate::engine::assignments::Assignments;
use crate::engine::assignments::ReadAssignment;
use crate::engine::variables::Literal;
use crate::engine::variables::VariableId;

/// A complete assignment of the variables of a [`Solver`](crate::Solver), tagged with its
/// objective value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    values: Box<[bool]>,
    objective_value: i64,
}

impl Solution {
    pub fn new(values: Box<[bool]>, objective_value: i64) -> Solution {
        Solution {
            values,
            objective_value,
        }
    }

    pub(crate) fn from_assignment(assignments: &Assignments, objective_value: i64) -> Solution {
        let values = (0..assignments.num_variables())
            .map(|index| assignments.assigned_value(VariableId::new(index as u32)) == Some(true))
            .collect();

        Solution::new(values, objective_value)
    }

    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    pub fn objective_value(&self) -> i64 {
        self.objective_value
    }

    pub fn get_value(&self, variable: VariableId) -> bool {
        self.values[variable.index()]
    }

    pub fn get_literal_value(&self, literal: Literal) -> bool {
        self.get_value(literal.variable()) == literal.is_positive()
    }

    /// The variables which are 1, in increasing order.
    pub fn true_variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, &value)| value)
            .map(|(index, _)| VariableId::new(index as u32))
    }
}

impl ReadAssignment for Solution {
    fn assigned_value(&self, variable: VariableId) -> Option<bool> {
        self.values.get(variable.index()).copied()
    }
}
