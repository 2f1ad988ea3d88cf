//! Small pure date/time helpers shared by the validator and the
//! calculator.
//!
//! All arithmetic here is naive local calendar math: no timezones, no DST.
//! Helpers saturate at the `chrono` range endpoints instead of panicking;
//! the endpoints double as the "invalid date" sentinels rejected by
//! [`is_valid_date`].

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// A usable date: anything but the range sentinels that mark "not set".
pub fn is_valid_date(date: NaiveDateTime) -> bool {
    date != NaiveDateTime::MIN && date != NaiveDateTime::MAX
}

/// A usable time of day: non-negative and below 24 hours.
pub fn is_valid_time(time: Duration) -> bool {
    time >= Duration::zero() && time < Duration::hours(24)
}

/// The Monday-through-Sunday calendar week containing `date`.
pub fn week_of(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = add_days(date, -i64::from(date.weekday().num_days_from_monday()));
    std::array::from_fn(|offset| add_days(monday, offset as i64))
}

/// Combine a calendar day with a valid time of day.
pub fn at_time(day: NaiveDate, time: Duration) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
        .checked_add_signed(time)
        .unwrap_or(NaiveDateTime::MAX)
}

/// Time elapsed since midnight.
pub fn time_of_day(date: NaiveDateTime) -> Duration {
    date - date.date().and_time(NaiveTime::MIN)
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// `date` moved by `count` months, day-of-month clamped to the length of
/// the target month.
pub fn add_months(date: NaiveDate, count: i32) -> NaiveDate {
    let moved = if count >= 0 {
        date.checked_add_months(Months::new(count.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(count.unsigned_abs()))
    };
    moved.unwrap_or(if count >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

/// `date` moved by `days`, saturating at the calendar range.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(if days >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

/// The given day of the month, or the month's last day when it is shorter.
pub fn clamp_to_day(year: i32, month: u32, day: u32) -> NaiveDate {
    ymd(year, month, day.min(days_in_month(year, month)))
}

/// Build a date from components already known to be in range.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
