use std::fmt::Display;
use std::fmt::Formatter;

use thiserror::Error;

use crate::engine::assignments::MAX_VARIABLES;

/// One of the five index domains of a timetable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Professors,
    Subjects,
    Days,
    Slots,
    Halls,
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dimension::Professors => "professors",
            Dimension::Subjects => "subjects",
            Dimension::Days => "days",
            Dimension::Slots => "slots",
            Dimension::Halls => "halls",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("the number of {dimension} must be positive")]
    NonPositive { dimension: Dimension },
    /// `variables` is the product of the counts up to the first one which exceeds the limit.
    #[error("the timetable has at least {variables} decision variables, more than the supported {MAX_VARIABLES}")]
    TooLarge { variables: u128 },
}

/// The sizes of the index domains of a timetable. Every count is positive and the number of
/// decision variables fits the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    professors: usize,
    subjects: usize,
    days: usize,
    slots: usize,
    halls: usize,
}

impl Dimensions {
    /// The week of `TimetableInstance::sample`.
    pub(crate) const SAMPLE: Dimensions = Dimensions {
        professors: 5,
        subjects: 5,
        days: 5,
        slots: 4,
        halls: 3,
    };

    pub fn new(
        professors: usize,
        subjects: usize,
        days: usize,
        slots: usize,
        halls: usize,
    ) -> Result<Dimensions, DimensionError> {
        let counts = [
            (Dimension::Professors, professors),
            (Dimension::Subjects, subjects),
            (Dimension::Days, days),
            (Dimension::Slots, slots),
            (Dimension::Halls, halls),
        ];

        if let Some((dimension, _)) = counts.iter().find(|(_, count)| *count == 0) {
            return Err(DimensionError::NonPositive {
                dimension: *dimension,
            });
        }

        // Stops at the first partial product over the limit, so the product never overflows.
        let _ = counts.iter().try_fold(1_u128, |variables, (_, count)| {
            match variables.checked_mul(*count as u128) {
                Some(variables) if variables <= MAX_VARIABLES as u128 => Ok(variables),
                Some(variables) => Err(DimensionError::TooLarge { variables }),
                None => Err(DimensionError::TooLarge {
                    variables: u128::MAX,
                }),
            }
        })?;

        Ok(Dimensions {
            professors,
            subjects,
            days,
            slots,
            halls,
        })
    }

    pub fn professors(&self) -> usize {
        self.professors
    }

    pub fn subjects(&self) -> usize {
        self.subjects
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn slots(&self) -> usize {
        self.slots
    }

    pub fn halls(&self) -> usize {
        self.halls
    }

    pub fn count(&self, dimension: Dimension) -> usize {
        match dimension {
            Dimension::Professors => self.professors,
            Dimension::Subjects => self.subjects,
            Dimension::Days => self.days,
            Dimension::Slots => self.slots,
            Dimension::Halls => self.halls,
        }
    }

    /// The number of decision variables, one per (professor, subject, day, slot, hall).
    pub fn num_variables(&self) -> usize {
        self.professors * self.subjects * self.days * self.slots * self.halls
    }

    /// The number of (professor, day, slot, hall) combinations. A timetable with more subjects
    /// than this is infeasible.
    pub fn capacity(&self) -> usize {
        self.professors * self.days * self.slots * self.halls
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} professors, {} subjects, {} days, {} slots, {} halls",
            self.professors, self.subjects, self.days, self.slots, self.halls
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Dimension;
    use super::DimensionError;
    use super::Dimensions;

    #[test]
    fn zero_counts_are_rejected() {
        assert_eq!(
            Dimensions::new(2, 3, 0, 4, 1),
            Err(DimensionError::NonPositive {
                dimension: Dimension::Days
            })
        );
    }

    #[test]
    fn oversized_instances_are_rejected() {
        let result = Dimensions::new(1 << 10, 1 << 10, 1 << 10, 2, 1);

        assert_eq!(
            result,
            Err(DimensionError::TooLarge {
                variables: 1 << 31
            })
        );
    }

    #[test]
    fn huge_counts_are_rejected_without_overflow() {
        let huge = 1_usize << 40;
        let result = Dimensions::new(huge, huge, huge, huge, huge);

        assert_eq!(
            result,
            Err(DimensionError::TooLarge {
                variables: 1 << 40
            })
        );
    }

    #[test]
    fn the_largest_supported_timetable_is_accepted() {
        let result = Dimensions::new(1 << 10, 1 << 10, 1 << 10, 1, 1);

        assert!(result.is_ok());
    }

    #[test]
    fn counts_are_derived_from_the_sizes() {
        let dimensions = Dimensions::new(2, 3, 4, 5, 6).expect("valid dimensions");

        assert_eq!(dimensions.num_variables(), 720);
        assert_eq!(dimensions.capacity(), 240);
        assert_eq!(dimensions.count(Dimension::Slots), 5);
    }
}
