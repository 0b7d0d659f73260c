//! Leveled assertions. Cheap checks always run; the expensive ones (such as re-validating
//! every incumbent against all constraints) only run in tests or with `debug-checks`.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const timetabler_assert_LEVEL_DEFINITION: u8 = timetabler_assert_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const timetabler_assert_LEVEL_DEFINITION: u8 = timetabler_assert_EXTREME;

pub const timetabler_assert_SIMPLE: u8 = 1;
pub const timetabler_assert_MODERATE: u8 = 2;
pub const timetabler_assert_ADVANCED: u8 = 3;
pub const timetabler_assert_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! print_timetabler_assert_warning_message {
    () => {
        if $crate::asserts::timetabler_assert_LEVEL_DEFINITION >= $crate::asserts::timetabler_assert_MODERATE {
            log::warn!("Potential performance degradation: the timetabler assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.", $crate::asserts::timetabler_assert_LEVEL_DEFINITION);
        };
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! timetabler_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::timetabler_assert_LEVEL_DEFINITION >= $crate::asserts::timetabler_assert_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! timetabler_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::timetabler_assert_LEVEL_DEFINITION >= $crate::asserts::timetabler_assert_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! timetabler_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::timetabler_assert_LEVEL_DEFINITION >= $crate::asserts::timetabler_assert_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! timetabler_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::timetabler_assert_LEVEL_DEFINITION >= $crate::asserts::timetabler_assert_ADVANCED {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! timetabler_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::timetabler_assert_LEVEL_DEFINITION >= $crate::asserts::timetabler_assert_EXTREME {
            assert!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic]
    fn extreme_assertions_are_checked_in_tests() {
        let level = super::timetabler_assert_LEVEL_DEFINITION;
        timetabler_assert_extreme!(level < super::timetabler_assert_EXTREME);
    }

    #[test]
    fn passing_assertions_do_nothing() {
        timetabler_assert_simple!(true);
        timetabler_assert_eq_simple!(2, 1 + 1);
        timetabler_assert_moderate!(true);
        timetabler_assert_advanced!(true);
    }
}
