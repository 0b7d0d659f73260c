use enumset::enum_set;
use enumset::EnumSet;

use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::engine::assignments::ReadAssignment;
use crate::engine::variables::Literal;
use crate::engine::variables::VariableId;
use crate::engine::watch_list::BooleanDomainEvent;

/// A cardinality constraint over a group of boolean variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardinalityConstraint {
    /// Exactly one variable of the group is 1.
    ExactlyOne(Box<[VariableId]>),
    /// At most one variable of the group is 1.
    AtMostOne(Box<[VariableId]>),
}

/// How many variables of a group are 1 and how many are still open.
#[derive(Clone, Copy, Debug, Default)]
struct GroupCount {
    num_true: usize,
    num_unassigned: usize,
}

impl CardinalityConstraint {
    pub fn variables(&self) -> &[VariableId] {
        match self {
            CardinalityConstraint::ExactlyOne(variables)
            | CardinalityConstraint::AtMostOne(variables) => variables,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CardinalityConstraint::ExactlyOne(_) => "ExactlyOne",
            CardinalityConstraint::AtMostOne(_) => "AtMostOne",
        }
    }

    /// The events upon which the constraint can propagate. A variable assigned 0 only matters
    /// to an exactly-one constraint, which may then be left with a single candidate.
    pub(crate) fn watched_events(&self) -> EnumSet<BooleanDomainEvent> {
        match self {
            CardinalityConstraint::ExactlyOne(_) => {
                enum_set!(BooleanDomainEvent::AssignedTrue | BooleanDomainEvent::AssignedFalse)
            }
            CardinalityConstraint::AtMostOne(_) => EnumSet::only(BooleanDomainEvent::AssignedTrue),
        }
    }

    fn count(&self, assignment: &impl ReadAssignment) -> GroupCount {
        self.variables()
            .iter()
            .fold(GroupCount::default(), |mut count, &variable| {
                match assignment.assigned_value(variable) {
                    Some(true) => count.num_true += 1,
                    Some(false) => {}
                    None => count.num_unassigned += 1,
                }
                count
            })
    }

    /// Whether no extension of the assignment can satisfy the constraint.
    pub fn is_violated(&self, assignment: &impl ReadAssignment) -> bool {
        let count = self.count(assignment);

        match self {
            CardinalityConstraint::AtMostOne(_) => count.num_true > 1,
            CardinalityConstraint::ExactlyOne(_) => {
                count.num_true > 1 || (count.num_true == 0 && count.num_unassigned == 0)
            }
        }
    }

    /// Whether every extension of the assignment satisfies the constraint.
    pub fn is_satisfied(&self, assignment: &impl ReadAssignment) -> bool {
        let count = self.count(assignment);

        match self {
            CardinalityConstraint::AtMostOne(_) => count.num_true + count.num_unassigned <= 1,
            CardinalityConstraint::ExactlyOne(_) => {
                count.num_true == 1 && count.num_unassigned == 0
            }
        }
    }

    /// Pushes the literals implied by the constraint under the assignment onto `forced`.
    ///
    /// Once a variable of the group is 1, every other open variable is forced to 0; an
    /// exactly-one group without a 1 and with a single open variable forces that variable to 1.
    /// Only open variables are forced, so propagating again on the extended assignment forces
    /// nothing.
    pub(crate) fn propagate(
        &self,
        assignment: &impl ReadAssignment,
        forced: &mut Vec<Literal>,
    ) -> PropagationStatus {
        let count = self.count(assignment);

        if count.num_true > 1 {
            return Err(Inconsistency::TooManyTrue);
        }

        let open = || {
            self.variables()
                .iter()
                .copied()
                .filter(|&variable| assignment.assigned_value(variable).is_none())
        };

        if count.num_true == 1 {
            forced.extend(open().map(|variable| Literal::new(variable, false)));
            return Ok(());
        }

        if let CardinalityConstraint::ExactlyOne(_) = self {
            match count.num_unassigned {
                0 => return Err(Inconsistency::NoCandidate),
                1 => forced.extend(open().map(|variable| Literal::new(variable, true))),
                _ => {}
            }
        }

        Ok(())
    }
}
