//! Recurrence configuration -- the declarative description of when a
//! schedule fires.
//!
//! The configuration is a value object, immutable for the duration of one
//! calculation. Axis-specific settings live inside the variant that uses
//! them (a weekly rule has no monthly fields to leave unset), while
//! constraints that depend on runtime values -- intervals, day sets, time
//! windows -- stay representable and are checked lazily by the
//! [`Validator`](crate::validator::Validator) at the point each axis is
//! exercised.

use chrono::{Duration, NaiveDateTime, Weekday};

/// One recurrence rule plus the reference instant it is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// A disabled schedule short-circuits to a fixed "disabled" output
    /// without any validation.
    pub enabled: bool,
    /// The reference "now". Must be a real date, not a range sentinel.
    pub current_date: NaiveDateTime,
    /// Inclusive lower bound of the validity window, if any.
    pub start_date: Option<NaiveDateTime>,
    /// Inclusive upper bound of the validity window, if any.
    pub end_date: Option<NaiveDateTime>,
    /// One-shot or recurring, with the axis settings for each.
    pub kind: ScheduleKind,
}

impl ScheduleConfig {
    /// A one-shot schedule firing at `execution_time`.
    pub fn once(current_date: NaiveDateTime, execution_time: NaiveDateTime) -> Self {
        Self {
            enabled: true,
            current_date,
            start_date: None,
            end_date: None,
            kind: ScheduleKind::Once {
                execution_time: Some(execution_time),
            },
        }
    }

    /// A recurring schedule driven by `periodicity` and `daily`.
    pub fn recurring(
        current_date: NaiveDateTime,
        periodicity: Periodicity,
        daily: DailyRule,
    ) -> Self {
        Self {
            enabled: true,
            current_date,
            start_date: None,
            end_date: None,
            kind: ScheduleKind::Recurring { periodicity, daily },
        }
    }
}

/// Top-level mode of a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleKind {
    /// Fires exactly once, at a fixed instant.
    ///
    /// The instant is optional so that an incomplete configuration is
    /// representable; the validator rejects it when the rule is evaluated.
    Once {
        execution_time: Option<NaiveDateTime>,
    },
    /// Fires repeatedly: a day-level periodicity picks the calendar days,
    /// a [`DailyRule`] picks the instants within each day.
    Recurring {
        periodicity: Periodicity,
        daily: DailyRule,
    },
}

/// Day-level periodicity of a recurring schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Periodicity {
    /// Every calendar day.
    Daily,
    /// The listed weekdays of every `interval`-th week.
    Weekly {
        interval: i32,
        active_days: Vec<Weekday>,
    },
    /// One day of every `interval`-th month, chosen by `rule`.
    Monthly { interval: i32, rule: MonthlyRule },
}

/// How the day within a month is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthlyRule {
    /// A fixed day of the month (1..=31). Months shorter than `day` use
    /// their last day instead.
    OnDay { day: u32 },
    /// An ordinal pick such as "the second Tuesday" or "the last weekend
    /// day".
    OnOrdinalWeekday {
        ordinal: Ordinal,
        selector: DaySelector,
    },
}

/// Ordinal position within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordinal {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl Ordinal {
    /// Zero-based occurrence index for the counted ordinals; `None` for
    /// [`Ordinal::Last`].
    pub(crate) fn index(self) -> Option<u32> {
        match self {
            Ordinal::First => Some(0),
            Ordinal::Second => Some(1),
            Ordinal::Third => Some(2),
            Ordinal::Fourth => Some(3),
            Ordinal::Last => None,
        }
    }
}

/// Which days qualify for an ordinal monthly pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelector {
    /// A concrete weekday.
    On(Weekday),
    /// Any calendar day.
    AnyDay,
    /// Monday through Friday.
    AnyWeekday,
    /// Saturday or Sunday.
    AnyWeekendDay,
}

/// Time-of-day sub-schedule applied within each active day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyRule {
    /// One instant per day.
    Once { time: Duration },
    /// Every `interval` units between `start` and `end`, both bounds
    /// inclusive.
    Recurring {
        interval: i32,
        unit: TimeUnit,
        start: Duration,
        end: Duration,
    },
}

impl DailyRule {
    /// Recurring rule over the whole day: 00:00:00 through 23:59:59.
    pub fn every(interval: i32, unit: TimeUnit) -> Self {
        DailyRule::Recurring {
            interval,
            unit,
            start: Duration::zero(),
            end: Duration::hours(24) - Duration::seconds(1),
        }
    }

    /// The stride between two instants of a recurring rule.
    pub(crate) fn step(&self) -> Duration {
        match *self {
            DailyRule::Once { .. } => Duration::zero(),
            DailyRule::Recurring { interval, unit, .. } => unit.duration(interval),
        }
    }
}

impl Default for DailyRule {
    /// Once per day, at midnight.
    fn default() -> Self {
        DailyRule::Once {
            time: Duration::zero(),
        }
    }
}

/// Unit of the recurring time-of-day stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    /// `count` of this unit as a duration.
    pub fn duration(self, count: i32) -> Duration {
        match self {
            TimeUnit::Hours => Duration::hours(i64::from(count)),
            TimeUnit::Minutes => Duration::minutes(i64::from(count)),
            TimeUnit::Seconds => Duration::seconds(i64::from(count)),
        }
    }
}
