//! Precondition checks over a schedule configuration.
//!
//! The checks are deliberately scattered rather than gathered into one
//! upfront schema pass: each runs at the point the calculator first touches
//! the corresponding axis, so a misconfigured monthly rule does not fail a
//! weekly schedule that never reads it. The ordering of checks inside each
//! method decides which error wins when several axes are invalid at once,
//! and callers rely on it.
//!
//! Every method is re-entrant and side-effect-free; each failure maps to
//! exactly one [`ScheduleError`] kind.

use chrono::{Duration, NaiveDateTime};

use crate::calendar;
use crate::config::{DailyRule, Periodicity, ScheduleConfig, ScheduleKind};
use crate::error::{Result, ScheduleError};

/// Validation entry points over one configuration.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    config: &'a ScheduleConfig,
}

impl<'a> Validator<'a> {
    pub fn new(config: &'a ScheduleConfig) -> Self {
        Self { config }
    }

    /// Baseline gate run before any computation: date sentinels, then the
    /// window bounds.
    pub fn configuration(&self) -> Result<()> {
        self.dates()?;
        self.limits()
    }

    /// Reference and window dates must be real dates. Checked in order:
    /// current, start, end -- the first failure wins.
    pub fn dates(&self) -> Result<()> {
        if !calendar::is_valid_date(self.config.current_date) {
            return Err(ScheduleError::InvalidCurrentDate);
        }
        if let Some(start) = self.config.start_date {
            if !calendar::is_valid_date(start) {
                return Err(ScheduleError::InvalidStartDate);
            }
        }
        if let Some(end) = self.config.end_date {
            if !calendar::is_valid_date(end) {
                return Err(ScheduleError::InvalidEndDate);
            }
        }
        Ok(())
    }

    /// When both window bounds are present the start may not follow the end.
    pub fn limits(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.config.start_date, self.config.end_date) {
            if start > end {
                return Err(ScheduleError::EndBeforeStart);
            }
        }
        Ok(())
    }

    /// A one-shot schedule needs a present, valid execution instant.
    /// Returns it so the caller does not re-match the variant.
    pub fn once_execution_time(&self) -> Result<NaiveDateTime> {
        match self.config.kind {
            ScheduleKind::Once {
                execution_time: Some(time),
            } if calendar::is_valid_date(time) => Ok(time),
            _ => Err(ScheduleError::MissingOnceDate),
        }
    }

    /// Top-level periodicity gate. Weekly is the only periodicity with a
    /// precondition here; daily and monthly check their settings where the
    /// axis is first used.
    pub fn periodicity(&self, periodicity: &Periodicity) -> Result<()> {
        match periodicity {
            Periodicity::Weekly {
                interval,
                active_days,
            } => {
                if *interval <= 0 {
                    return Err(ScheduleError::InvalidWeeklyInterval);
                }
                if active_days.is_empty() {
                    return Err(ScheduleError::EmptyWeeklyDays);
                }
                Ok(())
            }
            Periodicity::Daily | Periodicity::Monthly { .. } => Ok(()),
        }
    }

    /// Recurring time-of-day settings: positive stride, valid start time,
    /// valid non-zero end time. No-op for a once-per-day rule.
    pub fn daily_frequency(&self, rule: &DailyRule) -> Result<()> {
        if let DailyRule::Recurring {
            interval,
            start,
            end,
            ..
        } = rule
        {
            if *interval <= 0 {
                return Err(ScheduleError::InvalidDailyInterval);
            }
            if !calendar::is_valid_time(*start) {
                return Err(ScheduleError::InvalidDailyStart);
            }
            if !calendar::is_valid_time(*end) || *end == Duration::zero() {
                return Err(ScheduleError::InvalidDailyEnd);
            }
        }
        Ok(())
    }

    /// The once-per-day instant must fit within a day. No-op for a
    /// recurring rule.
    pub fn daily_once_frequency(&self, rule: &DailyRule) -> Result<()> {
        if let DailyRule::Once { time } = rule {
            if !calendar::is_valid_time(*time) {
                return Err(ScheduleError::DailyOnceOutOfRange);
            }
        }
        Ok(())
    }

    /// Fixed-day monthly settings: positive interval, then a day within
    /// 1..=31.
    pub fn monthly_on_day(&self, interval: i32, day: u32) -> Result<()> {
        if interval <= 0 {
            return Err(ScheduleError::InvalidMonthlyInterval);
        }
        if !(1..=31).contains(&day) {
            return Err(ScheduleError::InvalidMonthlyDay);
        }
        Ok(())
    }

    /// Ordinal monthly settings: positive interval.
    pub fn monthly_ordinal(&self, interval: i32) -> Result<()> {
        if interval <= 0 {
            return Err(ScheduleError::InvalidMonthlyInterval);
        }
        Ok(())
    }

    /// The produced instant may not precede the reference "now".
    pub fn not_before_current(&self, date: NaiveDateTime) -> Result<()> {
        if self.config.current_date > date {
            return Err(ScheduleError::BeforeCurrentDate);
        }
        Ok(())
    }

    /// The produced instant must fall inside the validity window; a missing
    /// bound leaves that side open.
    pub fn within_limits(&self, date: NaiveDateTime) -> Result<()> {
        if self.config.start_date.is_some_and(|start| start > date)
            || self.config.end_date.is_some_and(|end| end < date)
        {
            return Err(ScheduleError::OutOfLimits);
        }
        Ok(())
    }
}
