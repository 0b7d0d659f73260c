use bitfield::bitfield;

use crate::engine::variables::Literal;
use crate::engine::variables::VariableId;
use crate::timetabler_assert_moderate;
use crate::timetabler_assert_simple;

/// Read access to the (partial) value of boolean variables. Implemented by the assignments of
/// the solver during search, and by complete [`Solution`](crate::results::Solution)s.
pub trait ReadAssignment {
    /// The value of the variable, or `None` if it is unassigned.
    fn assigned_value(&self, variable: VariableId) -> Option<bool>;

    /// Whether the literal holds (`Some(true)`), is falsified (`Some(false)`) or is unassigned.
    fn literal_value(&self, literal: Literal) -> Option<bool> {
        self.assigned_value(literal.variable())
            .map(|value| value == literal.is_positive())
    }
}

/// Returned when a variable is assigned the value opposite to the one it already has.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EmptyDomain;

/// The largest number of variables which fits in a [`TrailEntry`].
pub(crate) const MAX_VARIABLES: usize = 1 << 30;

bitfield! {
    /// A packed entry of the trail: the variable index in the low 30 bits, then the value it was
    /// assigned and whether the assignment was a decision of the search.
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct TrailEntry(u32);
    impl Debug;
    u32;
    pub variable_index, set_variable_index: 29, 0;
    pub value, set_value: 30;
    pub is_decision, set_is_decision: 31;
}

impl TrailEntry {
    fn from_literal(literal: Literal, is_decision: bool) -> Self {
        let mut entry = TrailEntry(0);
        entry.set_variable_index(literal.variable().index() as u32);
        entry.set_value(literal.is_positive());
        entry.set_is_decision(is_decision);
        entry
    }

    fn literal(self) -> Literal {
        Literal::new(VariableId::new(self.variable_index()), self.value())
    }
}

/// The current partial assignment together with the trail of assignments in chronological
/// order, which allows undoing the assignments made after a given trail position.
#[derive(Clone, Debug, Default)]
pub(crate) struct Assignments {
    values: Vec<Option<bool>>,
    trail: Vec<TrailEntry>,
    num_unassigned: usize,
}

impl Assignments {
    pub(crate) fn grow(&mut self) -> VariableId {
        timetabler_assert_simple!(
            self.values.len() < MAX_VARIABLES,
            "the trail cannot address more than {MAX_VARIABLES} variables"
        );

        let variable = VariableId::new(self.values.len() as u32);
        self.values.push(None);
        self.num_unassigned += 1;
        variable
    }

    pub(crate) fn num_variables(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn num_unassigned(&self) -> usize {
        self.num_unassigned
    }

    pub(crate) fn is_fixed(&self, variable: VariableId) -> bool {
        self.values[variable.index()].is_some()
    }

    /// The unassigned variable with the smallest index, if any.
    pub(crate) fn first_unassigned(&self) -> Option<VariableId> {
        self.values
            .iter()
            .position(Option::is_none)
            .map(|index| VariableId::new(index as u32))
    }

    /// Makes the literal true. Assigning a literal which already holds is a no-op; assigning a
    /// falsified literal is an [`EmptyDomain`].
    pub(crate) fn assign(&mut self, literal: Literal, is_decision: bool) -> Result<(), EmptyDomain> {
        let slot = &mut self.values[literal.variable().index()];

        match *slot {
            Some(value) if value == literal.is_positive() => Ok(()),
            Some(_) => Err(EmptyDomain),
            None => {
                *slot = Some(literal.is_positive());
                self.num_unassigned -= 1;
                self.trail.push(TrailEntry::from_literal(literal, is_decision));
                Ok(())
            }
        }
    }

    pub(crate) fn num_trail_entries(&self) -> usize {
        self.trail.len()
    }

    pub(crate) fn trail_literal(&self, index: usize) -> Literal {
        self.trail[index].literal()
    }

    pub(crate) fn is_decision(&self, index: usize) -> bool {
        self.trail[index].is_decision()
    }

    /// Unassigns every variable assigned at or after trail position `new_len`, most recent
    /// first, reporting each undone literal to `on_unassign`.
    pub(crate) fn undo_trail(&mut self, new_len: usize, mut on_unassign: impl FnMut(Literal)) {
        timetabler_assert_moderate!(new_len <= self.trail.len());

        while self.trail.len() > new_len {
            let Some(entry) = self.trail.pop() else {
                break;
            };
            let literal = entry.literal();
            self.values[literal.variable().index()] = None;
            self.num_unassigned += 1;
            on_unassign(literal);
        }
    }
}

impl ReadAssignment for Assignments {
    fn assigned_value(&self, variable: VariableId) -> Option<bool> {
        self.values.get(variable.index()).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::Assignments;
    use super::EmptyDomain;
    use super::ReadAssignment;
    use crate::engine::variables::Literal;

    #[test]
    fn assigning_the_opposite_value_is_an_empty_domain() {
        let mut assignments = Assignments::default();
        let x = assignments.grow();

        assert_eq!(assignments.assign(Literal::new(x, true), true), Ok(()));
        assert_eq!(assignments.assign(Literal::new(x, true), false), Ok(()));
        assert_eq!(
            assignments.assign(Literal::new(x, false), false),
            Err(EmptyDomain)
        );
        assert_eq!(assignments.num_trail_entries(), 1);
    }

    #[test]
    fn undo_restores_values_in_reverse_order() {
        let mut assignments = Assignments::default();
        let variables = (0..4).map(|_| assignments.grow()).collect::<Vec<_>>();

        for (index, variable) in variables.iter().enumerate() {
            let _ = assignments.assign(Literal::new(*variable, index % 2 == 0), index == 0);
        }
        assert_eq!(assignments.num_unassigned(), 0);
        assert!(assignments.is_decision(0));
        assert!(!assignments.is_decision(1));

        let mut undone = vec![];
        assignments.undo_trail(1, |literal| undone.push(literal.variable()));

        assert_eq!(undone, vec![variables[3], variables[2], variables[1]]);
        assert_eq!(assignments.num_unassigned(), 3);
        assert_eq!(assignments.assigned_value(variables[0]), Some(true));
        assert_eq!(assignments.assigned_value(variables[1]), None);
        assert_eq!(assignments.first_unassigned(), Some(variables[1]));
    }

    #[test]
    fn trail_entries_round_trip_literals() {
        let mut assignments = Assignments::default();
        let variables = (0..3).map(|_| assignments.grow()).collect::<Vec<_>>();
        let literal = Literal::new(variables[2], false);

        let _ = assignments.assign(literal, false);

        assert_eq!(assignments.trail_literal(0), literal);
        assert_eq!(assignments.literal_value(literal), Some(true));
        assert_eq!(assignments.literal_value(!literal), Some(false));
    }
}
