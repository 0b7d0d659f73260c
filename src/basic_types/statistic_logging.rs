//! Responsible for logging statistics with a configurable prefix and closing line.
//!
//! Nothing is logged until [`configure`] has been called with `log_statistics` set to `true`.

use std::fmt::Display;

use once_cell::sync::OnceCell;

#[derive(Clone, Copy, Debug)]
struct StatisticOptions {
    /// Printed in front of every statistic line.
    statistic_prefix: &'static str,
    /// Printed after a block of statistics, if present.
    after_statistics: Option<&'static str>,
}

static STATISTIC_OPTIONS: OnceCell<StatisticOptions> = OnceCell::new();

/// Configures the logging of statistics. Only the first call has an effect.
pub fn configure(
    log_statistics: bool,
    statistic_prefix: &'static str,
    after_statistics: Option<&'static str>,
) {
    if log_statistics {
        let _ = STATISTIC_OPTIONS.set(StatisticOptions {
            statistic_prefix,
            after_statistics,
        });
    }
}

/// Returns whether statistics will be logged.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}

/// Logs the provided statistic with name `name` and value `value`, in the form
/// `{prefix}{name}={value}`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    if let Some(options) = STATISTIC_OPTIONS.get() {
        println!("{}{name}={value}", options.statistic_prefix);
    }
}

/// Logs the closing line of a block of statistics, if one was configured.
pub fn log_statistic_postfix() {
    if let Some(after) = STATISTIC_OPTIONS
        .get()
        .and_then(|options| options.after_statistics)
    {
        println!("{after}");
    }
}
