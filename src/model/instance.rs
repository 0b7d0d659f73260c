use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::Dimensions;
use super::InstanceError;
use super::Preferences;

/// The preferences of the sample week: five professors over five days of four slots.
const SAMPLE_PREFERENCES: [[[u8; 4]; 5]; 5] = [
    [[1, 0, 0, 1], [0, 1, 0, 0], [1, 0, 0, 0], [0, 1, 0, 1], [0, 0, 1, 0]],
    [[0, 1, 0, 0], [0, 0, 1, 1], [1, 0, 0, 0], [0, 1, 1, 0], [0, 0, 0, 1]],
    [[0, 0, 1, 0], [1, 0, 0, 0], [0, 1, 0, 1], [0, 0, 1, 0], [1, 0, 0, 0]],
    [[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 1], [0, 1, 0, 0], [1, 0, 0, 0]],
    [[0, 1, 0, 1], [0, 0, 1, 0], [1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 1]],
];

/// The input of a solve: the sizes of the timetable and the preferences of the professors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimetableInstance {
    dimensions: Dimensions,
    preferences: Preferences,
}

impl TimetableInstance {
    pub fn new(
        dimensions: Dimensions,
        preferences: Preferences,
    ) -> Result<TimetableInstance, InstanceError> {
        if preferences.num_professors() != dimensions.professors()
            || preferences.num_days() != dimensions.days()
            || preferences.num_slots() != dimensions.slots()
        {
            return Err(InstanceError::PreferenceShape {
                professors: dimensions.professors(),
                days: dimensions.days(),
                slots: dimensions.slots(),
            });
        }

        Ok(TimetableInstance {
            dimensions,
            preferences,
        })
    }

    /// An instance with preferences drawn with the given density from a generator seeded with
    /// `seed`; equal seeds give equal instances.
    pub fn random(
        dimensions: Dimensions,
        density: f64,
        seed: u64,
    ) -> Result<TimetableInstance, InstanceError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let preferences = Preferences::random(&dimensions, density, &mut rng)?;

        TimetableInstance::new(dimensions, preferences)
    }

    /// A week of five professors and five subjects, over five days of four slots in three halls.
    pub fn sample() -> TimetableInstance {
        let dimensions = Dimensions::SAMPLE;
        let preferences = Preferences::from_fn(&dimensions, |professor, day, slot| {
            SAMPLE_PREFERENCES[professor][day][slot] == 1
        });

        TimetableInstance {
            dimensions,
            preferences,
        }
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }
}

#[cfg(test)]
mod tests {
    use super::TimetableInstance;
    use crate::model::Dimensions;
    use crate::model::InstanceError;
    use crate::model::Preferences;

    #[test]
    fn sample_week_matches_its_table() {
        let instance = TimetableInstance::sample();

        assert_eq!(instance.dimensions().num_variables(), 1500);
        assert_eq!(instance.preferences().get(0, 0, 3), 1);
        assert_eq!(instance.preferences().get(4, 4, 2), 1);
        assert_eq!(instance.preferences().get(2, 0, 0), 0);
    }

    #[test]
    fn equal_seeds_give_equal_instances() {
        let dimensions = Dimensions::new(3, 2, 2, 3, 1).expect("valid dimensions");

        let first = TimetableInstance::random(dimensions, 0.4, 11).expect("valid instance");
        let second = TimetableInstance::random(dimensions, 0.4, 11).expect("valid instance");

        assert_eq!(first, second);
    }

    #[test]
    fn preferences_must_match_the_dimensions() {
        let dimensions = Dimensions::new(3, 2, 2, 3, 1).expect("valid dimensions");
        let other = Dimensions::new(2, 2, 2, 3, 1).expect("valid dimensions");
        let preferences = Preferences::from_fn(&other, |_, _, _| true);

        assert!(matches!(
            TimetableInstance::new(dimensions, preferences),
            Err(InstanceError::PreferenceShape { professors: 3, .. })
        ));
    }
}
