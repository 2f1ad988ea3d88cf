//! # cadence-engine
//!
//! Deterministic next-occurrence calculation for recurring schedules.
//!
//! Given a declarative recurrence configuration ("every 2 weeks on Monday
//! and Thursday, every 30 minutes between 08:00 and 17:00"), the engine
//! derives the next valid execution instant -- and arbitrary-length series
//! of future instants -- together with the human-readable sentence
//! describing the rule. All computation is pure, synchronous calendar
//! arithmetic: no clocks, no timezones, no I/O.
//!
//! ## Quick start
//!
//! ```rust
//! use cadence_engine::{DailyRule, Periodicity, Schedule, ScheduleConfig, TimeUnit};
//! use chrono::NaiveDate;
//!
//! let current = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let config = ScheduleConfig::recurring(
//!     current,
//!     Periodicity::Daily,
//!     DailyRule::every(12, TimeUnit::Hours),
//! );
//!
//! let mut schedule = Schedule::new(Some(config)).unwrap();
//! let output = schedule.next_execution().unwrap();
//! assert_eq!(output.next_execution_date, Some(current));
//! ```
//!
//! ## Modules
//!
//! - [`schedule`] — the calculator: next instant, series, explicit cursor
//! - [`config`] — the recurrence configuration value types
//! - [`validator`] — lazily applied precondition checks
//! - [`description`] — configuration → human-readable sentence
//! - [`resources`] — locale text provider behind a trait seam
//! - [`calendar`] — pure date/time helpers
//! - [`error`] — the fixed validation-error taxonomy

pub mod calendar;
pub mod config;
pub mod description;
pub mod error;
pub mod resources;
pub mod schedule;
pub mod validator;

pub use config::{
    DailyRule, DaySelector, MonthlyRule, Ordinal, Periodicity, ScheduleConfig, ScheduleKind,
    TimeUnit,
};
pub use description::describe;
pub use error::{Result, ScheduleError};
pub use resources::{Culture, ResourceProvider, Resources, Text};
pub use schedule::{Occurrences, Output, Schedule, SeriesState};
pub use validator::Validator;
