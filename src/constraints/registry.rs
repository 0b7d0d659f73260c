use std::fmt::Display;
use std::fmt::Formatter;

use log::trace;

use crate::basic_types::HashMap;
use crate::engine::assignments::ReadAssignment;
use crate::model::VariableSpace;
use crate::propagators::CardinalityConstraint;
use crate::ConstraintOperationError;
use crate::Solver;

/// Identifies a hard constraint of a timetable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstraintKey {
    /// The subject is taught exactly once.
    Subject { subject: usize },
    /// The professor teaches at most one subject in the slot.
    ProfessorSlot {
        professor: usize,
        day: usize,
        slot: usize,
    },
    /// The hall holds at most one subject in the slot.
    HallSlot { hall: usize, day: usize, slot: usize },
}

impl Display for ConstraintKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintKey::Subject { subject } => write!(f, "exactly_one(subject {subject})"),
            ConstraintKey::ProfessorSlot {
                professor,
                day,
                slot,
            } => write!(f, "at_most_one(professor {professor}, day {day}, slot {slot})"),
            ConstraintKey::HallSlot { hall, day, slot } => {
                write!(f, "at_most_one(hall {hall}, day {day}, slot {slot})")
            }
        }
    }
}

/// The hard constraints of a timetable, each retrievable by its [`ConstraintKey`].
///
/// The constraints are kept in a fixed order: every subject, then every (professor, day, slot),
/// then every (hall, day, slot).
#[derive(Clone, Debug, Default)]
pub struct ConstraintRegistry {
    constraints: Vec<(ConstraintKey, CardinalityConstraint)>,
    by_key: HashMap<ConstraintKey, usize>,
}

impl ConstraintRegistry {
    /// Emits the three constraint families over the variables of the space.
    pub fn for_timetable(space: &VariableSpace) -> ConstraintRegistry {
        let dimensions = *space.dimensions();
        let mut registry = ConstraintRegistry::default();

        for subject in 0..dimensions.subjects() {
            registry.insert(
                ConstraintKey::Subject { subject },
                CardinalityConstraint::ExactlyOne(space.subject_group(subject).collect()),
            );
        }

        for professor in 0..dimensions.professors() {
            for day in 0..dimensions.days() {
                for slot in 0..dimensions.slots() {
                    registry.insert(
                        ConstraintKey::ProfessorSlot {
                            professor,
                            day,
                            slot,
                        },
                        CardinalityConstraint::AtMostOne(
                            space.professor_slot_group(professor, day, slot).collect(),
                        ),
                    );
                }
            }
        }

        for hall in 0..dimensions.halls() {
            for day in 0..dimensions.days() {
                for slot in 0..dimensions.slots() {
                    registry.insert(
                        ConstraintKey::HallSlot { hall, day, slot },
                        CardinalityConstraint::AtMostOne(
                            space.hall_slot_group(hall, day, slot).collect(),
                        ),
                    );
                }
            }
        }

        registry
    }

    fn insert(&mut self, key: ConstraintKey, constraint: CardinalityConstraint) {
        let _ = self.by_key.insert(key, self.constraints.len());
        self.constraints.push((key, constraint));
    }

    pub fn get(&self, key: ConstraintKey) -> Option<&CardinalityConstraint> {
        self.by_key
            .get(&key)
            .map(|&index| &self.constraints[index].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConstraintKey, &CardinalityConstraint)> + '_ {
        self.constraints
            .iter()
            .map(|(key, constraint)| (*key, constraint))
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Posts every constraint to the solver, stopping at the first root-level conflict.
    pub fn post_all(&self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        for (key, constraint) in self.iter() {
            trace!("Posting {key}");
            solver.add_constraint(constraint.clone()).post()?;
        }

        Ok(())
    }

    /// The first constraint, in registry order, which the assignment violates.
    pub fn find_violation(&self, assignment: &impl ReadAssignment) -> Option<ConstraintKey> {
        self.iter()
            .find(|(_, constraint)| constraint.is_violated(assignment))
            .map(|(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::ConstraintKey;
    use super::ConstraintRegistry;
    use crate::api::outputs::Solution;
    use crate::model::Dimensions;
    use crate::model::VariableKey;
    use crate::model::VariableSpace;

    fn space() -> VariableSpace {
        VariableSpace::create(Dimensions::new(2, 2, 1, 2, 1).expect("valid dimensions"))
    }

    #[test]
    fn every_family_is_registered() {
        let registry = ConstraintRegistry::for_timetable(&space());

        assert_eq!(registry.len(), 2 + 2 * 2 + 2);
        assert_eq!(
            registry
                .get(ConstraintKey::ProfessorSlot {
                    professor: 1,
                    day: 0,
                    slot: 1
                })
                .map(|constraint| constraint.variables().len()),
            Some(2)
        );
        assert_eq!(
            registry
                .get(ConstraintKey::Subject { subject: 0 })
                .map(|constraint| constraint.name()),
            Some("ExactlyOne")
        );
        assert!(registry
            .get(ConstraintKey::HallSlot {
                hall: 1,
                day: 0,
                slot: 0
            })
            .is_none());
    }

    #[test]
    fn violations_are_reported_by_key() {
        let space = space();
        let registry = ConstraintRegistry::for_timetable(&space);
        let key = |subject, professor, slot| {
            space
                .variable(VariableKey {
                    subject,
                    professor,
                    day: 0,
                    slot,
                    hall: 0,
                })
                .index()
        };

        let mut values = vec![false; space.len()];
        values[key(0, 0, 0)] = true;
        values[key(1, 1, 1)] = true;
        let valid = Solution::new(values.clone().into_boxed_slice(), 0);
        assert_eq!(registry.find_violation(&valid), None);

        values[key(1, 1, 1)] = false;
        values[key(1, 1, 0)] = true;
        let clash = Solution::new(values.into_boxed_slice(), 0);
        assert_eq!(
            registry.find_violation(&clash),
            Some(ConstraintKey::HallSlot {
                hall: 0,
                day: 0,
                slot: 0
            })
        );
    }
}
