use rand::Rng;

use super::Dimensions;
use super::InstanceError;

/// Whether a professor prefers to teach on a given day and slot: `preference[p][d][t]` is 1 for
/// a preferred slot and 0 otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    days: usize,
    slots: usize,
    values: Box<[i64]>,
}

impl Preferences {
    /// Creates the preferences from a nested `[professor][day][slot]` table whose shape matches
    /// the dimensions and whose values are 0 or 1.
    pub fn from_table(
        dimensions: &Dimensions,
        table: Vec<Vec<Vec<i64>>>,
    ) -> Result<Preferences, InstanceError> {
        let expected = (dimensions.professors(), dimensions.days(), dimensions.slots());
        let shape_error = || InstanceError::PreferenceShape {
            professors: expected.0,
            days: expected.1,
            slots: expected.2,
        };

        if table.len() != expected.0
            || table.iter().any(|days| days.len() != expected.1)
            || table.iter().flatten().any(|slots| slots.len() != expected.2)
        {
            return Err(shape_error());
        }

        let mut values = Vec::with_capacity(expected.0 * expected.1 * expected.2);
        for (professor, days) in table.into_iter().enumerate() {
            for (day, slots) in days.into_iter().enumerate() {
                for (slot, value) in slots.into_iter().enumerate() {
                    if value != 0 && value != 1 {
                        return Err(InstanceError::PreferenceValue {
                            professor,
                            day,
                            slot,
                            value,
                        });
                    }
                    values.push(value);
                }
            }
        }

        Ok(Preferences {
            days: expected.1,
            slots: expected.2,
            values: values.into_boxed_slice(),
        })
    }

    /// Creates the preferences by asking `is_preferred(professor, day, slot)` for every entry.
    pub fn from_fn(
        dimensions: &Dimensions,
        mut is_preferred: impl FnMut(usize, usize, usize) -> bool,
    ) -> Preferences {
        let mut values = Vec::with_capacity(
            dimensions.professors() * dimensions.days() * dimensions.slots(),
        );
        for professor in 0..dimensions.professors() {
            for day in 0..dimensions.days() {
                for slot in 0..dimensions.slots() {
                    values.push(i64::from(is_preferred(professor, day, slot)));
                }
            }
        }

        Preferences {
            days: dimensions.days(),
            slots: dimensions.slots(),
            values: values.into_boxed_slice(),
        }
    }

    /// Draws every entry independently, preferred with probability `density`.
    pub fn random(
        dimensions: &Dimensions,
        density: f64,
        rng: &mut impl Rng,
    ) -> Result<Preferences, InstanceError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(InstanceError::Density(density));
        }

        Ok(Preferences::from_fn(dimensions, |_, _, _| {
            rng.gen_bool(density)
        }))
    }

    pub fn num_professors(&self) -> usize {
        self.values.len() / (self.days * self.slots)
    }

    pub fn num_days(&self) -> usize {
        self.days
    }

    pub fn num_slots(&self) -> usize {
        self.slots
    }

    /// The preference of the professor for the day and slot.
    pub fn get(&self, professor: usize, day: usize, slot: usize) -> i64 {
        self.values[(professor * self.days + day) * self.slots + slot]
    }

    /// The number of preferred (professor, day, slot) combinations.
    pub fn num_preferred(&self) -> usize {
        self.values.iter().filter(|&&value| value == 1).count()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::Preferences;
    use crate::model::Dimensions;
    use crate::model::InstanceError;

    fn dimensions() -> Dimensions {
        Dimensions::new(2, 1, 2, 3, 1).expect("valid dimensions")
    }

    #[test]
    fn table_is_indexed_by_professor_day_slot() {
        let preferences = Preferences::from_table(
            &dimensions(),
            vec![
                vec![vec![1, 0, 0], vec![0, 0, 1]],
                vec![vec![0, 1, 0], vec![0, 0, 0]],
            ],
        )
        .expect("valid table");

        assert_eq!(preferences.get(0, 1, 2), 1);
        assert_eq!(preferences.get(1, 0, 1), 1);
        assert_eq!(preferences.get(1, 1, 2), 0);
        assert_eq!(preferences.num_preferred(), 3);
        assert_eq!(preferences.num_professors(), 2);
    }

    #[test]
    fn misshapen_tables_are_rejected() {
        let result = Preferences::from_table(&dimensions(), vec![vec![vec![1, 0, 0]; 2]]);

        assert!(matches!(
            result,
            Err(InstanceError::PreferenceShape { professors: 2, .. })
        ));
    }

    #[test]
    fn non_binary_values_are_rejected() {
        let result = Preferences::from_table(
            &dimensions(),
            vec![vec![vec![0, 0, 0], vec![0, 2, 0]], vec![vec![0, 0, 0]; 2]],
        );

        assert_eq!(
            result,
            Err(InstanceError::PreferenceValue {
                professor: 0,
                day: 1,
                slot: 1,
                value: 2
            })
        );
    }

    #[test]
    fn random_preferences_respect_the_extreme_densities() {
        let mut rng = SmallRng::seed_from_u64(7);

        let none = Preferences::random(&dimensions(), 0.0, &mut rng).expect("valid density");
        let all = Preferences::random(&dimensions(), 1.0, &mut rng).expect("valid density");

        assert_eq!(none.num_preferred(), 0);
        assert_eq!(all.num_preferred(), 12);
        assert!(matches!(
            Preferences::random(&dimensions(), 1.5, &mut rng),
            Err(InstanceError::Density(_))
        ));
    }
}
