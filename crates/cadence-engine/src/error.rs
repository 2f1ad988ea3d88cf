//! Error types for schedule validation and calculation.

use thiserror::Error;

/// Validation failures raised while computing the next execution of a
/// schedule.
///
/// The set of kinds is fixed: callers and the locale layer dispatch on the
/// variant, so a failing check always maps to exactly one of these. The
/// `Display` messages are the canonical English texts;
/// [`ResourceProvider::error_text`](crate::resources::ResourceProvider::error_text)
/// localizes them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    /// The calculator was built without a configuration.
    #[error("You should define a configuration for the schedule")]
    MissingConfiguration,

    #[error("Current date should be a correct date")]
    InvalidCurrentDate,

    #[error("Start date should be a correct date")]
    InvalidStartDate,

    #[error("End date should be a correct date")]
    InvalidEndDate,

    /// Both window bounds are set and the start is after the end.
    #[error("End date should be greater than start date")]
    EndBeforeStart,

    /// A one-shot schedule without a usable execution instant.
    #[error("If type is Once, you should enter a valid date and time")]
    MissingOnceDate,

    #[error("Weekly periodicity should be a correct number and greater than 0 if configuration occurs weekly")]
    InvalidWeeklyInterval,

    #[error("You should select some day of the week if configuration occurs weekly")]
    EmptyWeeklyDays,

    #[error("You should indicate a correct periodicity")]
    InvalidDailyInterval,

    #[error("Start daily frequency should be a correct time")]
    InvalidDailyStart,

    #[error("End daily frequency should be a correct time distinct of zero")]
    InvalidDailyEnd,

    /// The once-per-day time does not fit within a day.
    #[error("The interval time in daily frequency should be lower than 24 hours")]
    DailyOnceOutOfRange,

    /// The computed occurrence precedes the reference "now".
    #[error("Next execution time could not be lower than current date")]
    BeforeCurrentDate,

    /// The computed occurrence falls outside the validity window.
    #[error("The date is out of the limits")]
    OutOfLimits,

    #[error("You should enter a valid monthly periodicity")]
    InvalidMonthlyInterval,

    #[error("You should enter a valid day")]
    InvalidMonthlyDay,
}

/// Convenience alias used throughout cadence-engine.
pub type Result<T> = std::result::Result<T, ScheduleError>;
