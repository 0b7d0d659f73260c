use std::fmt::Display;
use std::fmt::Formatter;

use super::Dimensions;
use crate::engine::variables::VariableId;
use crate::timetabler_assert_moderate;

/// The index of a decision variable: professor `professor` teaches `subject` on `day` in `slot`
/// in `hall`. The field order is the order of the variable layout, so keys compare like the
/// variables they denote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableKey {
    pub subject: usize,
    pub professor: usize,
    pub day: usize,
    pub slot: usize,
    pub hall: usize,
}

impl Display for VariableKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "schedule_p{}_s{}_d{}_t{}_h{}",
            self.professor, self.subject, self.day, self.slot, self.hall
        )
    }
}

/// Maps every (professor, subject, day, slot, hall) of a timetable to a decision variable and
/// back, in constant time.
///
/// The layout is subject-major: the variables are numbered in the lexicographic order of
/// (subject, professor, day, slot, hall). The candidates of one subject therefore form a
/// contiguous block, and branching in variable order decides subjects one after the other.
#[derive(Clone, Debug)]
pub struct VariableSpace {
    dimensions: Dimensions,
}

impl VariableSpace {
    pub fn create(dimensions: Dimensions) -> VariableSpace {
        VariableSpace { dimensions }
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn len(&self) -> usize {
        self.dimensions.num_variables()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, key: VariableKey) -> bool {
        key.subject < self.dimensions.subjects()
            && key.professor < self.dimensions.professors()
            && key.day < self.dimensions.days()
            && key.slot < self.dimensions.slots()
            && key.hall < self.dimensions.halls()
    }

    /// The variable of the key.
    pub fn variable(&self, key: VariableKey) -> VariableId {
        timetabler_assert_moderate!(self.contains(key), "{key:?} is outside of {}", self.dimensions);

        let d = &self.dimensions;
        let index = (((key.subject * d.professors() + key.professor) * d.days() + key.day)
            * d.slots()
            + key.slot)
            * d.halls()
            + key.hall;

        VariableId::new(index as u32)
    }

    /// The key of the variable; the inverse of [`VariableSpace::variable`].
    pub fn key(&self, variable: VariableId) -> VariableKey {
        timetabler_assert_moderate!(variable.index() < self.len());

        let d = &self.dimensions;
        let mut rest = variable.index();
        let hall = rest % d.halls();
        rest /= d.halls();
        let slot = rest % d.slots();
        rest /= d.slots();
        let day = rest % d.days();
        rest /= d.days();
        let professor = rest % d.professors();
        let subject = rest / d.professors();

        VariableKey {
            subject,
            professor,
            day,
            slot,
            hall,
        }
    }

    /// Every variable with its key, in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, VariableKey)> + '_ {
        (0..self.len()).map(|index| {
            let variable = VariableId::new(index as u32);
            (variable, self.key(variable))
        })
    }

    /// The candidates of a subject: its variables over every (professor, day, slot, hall).
    pub fn subject_group(&self, subject: usize) -> impl Iterator<Item = VariableId> {
        let block = self.dimensions.capacity();
        let start = subject * block;
        (start..start + block).map(|index| VariableId::new(index as u32))
    }

    /// The candidate groups of every subject, in subject order.
    pub fn subject_groups(&self) -> Vec<Box<[VariableId]>> {
        (0..self.dimensions.subjects())
            .map(|subject| self.subject_group(subject).collect())
            .collect()
    }

    /// The variables which occupy a professor at a day and slot, over every (subject, hall).
    pub fn professor_slot_group(
        &self,
        professor: usize,
        day: usize,
        slot: usize,
    ) -> impl Iterator<Item = VariableId> + '_ {
        let halls = self.dimensions.halls();
        (0..self.dimensions.subjects()).flat_map(move |subject| {
            (0..halls).map(move |hall| {
                self.variable(VariableKey {
                    subject,
                    professor,
                    day,
                    slot,
                    hall,
                })
            })
        })
    }

    /// The variables which occupy a hall at a day and slot, over every (professor, subject).
    pub fn hall_slot_group(
        &self,
        hall: usize,
        day: usize,
        slot: usize,
    ) -> impl Iterator<Item = VariableId> + '_ {
        let professors = self.dimensions.professors();
        (0..self.dimensions.subjects()).flat_map(move |subject| {
            (0..professors).map(move |professor| {
                self.variable(VariableKey {
                    subject,
                    professor,
                    day,
                    slot,
                    hall,
                })
            })
        })
    }

    /// A readable name of the variable, such as `schedule_p1_s0_d2_t3_h0`.
    pub fn name(&self, variable: VariableId) -> String {
        self.key(variable).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::VariableKey;
    use super::VariableSpace;
    use crate::model::Dimensions;

    fn space() -> VariableSpace {
        VariableSpace::create(Dimensions::new(2, 3, 2, 2, 2).expect("valid dimensions"))
    }

    #[test]
    fn keys_round_trip_through_every_variable() {
        let space = space();

        for (variable, key) in space.iter() {
            assert_eq!(space.variable(key), variable);
        }
        assert_eq!(space.iter().count(), 48);
    }

    #[test]
    fn variable_order_is_lexicographic_in_the_key() {
        let space = space();
        let keys = space.iter().map(|(_, key)| key).collect::<Vec<_>>();

        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn groups_have_the_expected_sizes_and_members() {
        let space = space();

        let subject = space.subject_group(1).collect::<Vec<_>>();
        assert_eq!(subject.len(), 16);
        assert!(subject.iter().all(|&variable| space.key(variable).subject == 1));

        let professor_slot = space.professor_slot_group(1, 0, 1).collect::<Vec<_>>();
        assert_eq!(professor_slot.len(), 6);
        assert!(professor_slot.iter().all(|&variable| {
            let key = space.key(variable);
            key.professor == 1 && key.day == 0 && key.slot == 1
        }));

        let hall_slot = space.hall_slot_group(0, 1, 1).collect::<Vec<_>>();
        assert_eq!(hall_slot.len(), 6);
        assert!(hall_slot.iter().all(|&variable| {
            let key = space.key(variable);
            key.hall == 0 && key.day == 1 && key.slot == 1
        }));
    }

    #[test]
    fn names_follow_the_schedule_pattern() {
        let space = space();
        let variable = space.variable(VariableKey {
            subject: 2,
            professor: 1,
            day: 0,
            slot: 1,
            hall: 0,
        });

        assert_eq!(space.name(variable), "schedule_p1_s2_d0_t1_h0");
    }
}
