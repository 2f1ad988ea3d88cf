//! Human-readable rendering of a recurrence configuration.
//!
//! The sentence is assembled from the same configuration fields the
//! calculator reads, so the text and the produced dates cannot drift apart
//! independently. Tests assert on the literal sentences; any change to the
//! calculation policy needs a matching change here.

use chrono::{NaiveDateTime, Weekday};

use crate::calendar;
use crate::config::{DailyRule, MonthlyRule, Periodicity, ScheduleConfig, ScheduleKind};
use crate::resources::{ResourceProvider, Text};

/// Describe `config` in the provider's locale.
///
/// `next` is the resolved occurrence; it only appears in the sentence for
/// one-shot schedules ("Schedule will be used on ...").
pub fn describe<R: ResourceProvider>(
    config: &ScheduleConfig,
    next: NaiveDateTime,
    resources: &R,
) -> String {
    let mut text = String::from(resources.text(Text::Occurs));
    match &config.kind {
        ScheduleKind::Once { .. } => {
            text.push_str(resources.text(Text::Once));
            text.push_str(resources.text(Text::UsedOn));
            text.push_str(&format!(
                " {} {} {}",
                resources.format_date(next.date()),
                resources.text(Text::At),
                resources.format_time(calendar::time_of_day(next)),
            ));
        }
        ScheduleKind::Recurring { periodicity, daily } => {
            frequency_clause(&mut text, periodicity, resources);
            daily_clause(&mut text, daily, resources);
        }
    }
    limits_clause(&mut text, config, resources);
    text
}

/// "every day" | "every N week(s) on A, B and C" | "the days D every N
/// months" | "the Ordinal Weekday of every N months".
fn frequency_clause<R: ResourceProvider>(
    text: &mut String,
    periodicity: &Periodicity,
    resources: &R,
) {
    match periodicity {
        Periodicity::Daily => text.push_str(resources.text(Text::EveryDay)),
        Periodicity::Weekly {
            interval,
            active_days,
        } => {
            let week = if *interval == 1 {
                Text::Week
            } else {
                Text::Weeks
            };
            text.push_str(&format!(
                "{} {} {} {} {}",
                resources.text(Text::Every),
                interval,
                resources.text(week),
                resources.text(Text::On),
                weekday_list(active_days, resources),
            ));
        }
        Periodicity::Monthly {
            interval,
            rule: MonthlyRule::OnDay { day },
        } => {
            text.push_str(&format!(
                "{} {} {} {} {}",
                resources.text(Text::TheDays),
                day,
                resources.text(Text::Every),
                interval,
                resources.text(Text::Months),
            ));
        }
        Periodicity::Monthly {
            interval,
            rule: MonthlyRule::OnOrdinalWeekday { ordinal, selector },
        } => {
            text.push_str(&format!(
                "{} {} {} {} {} {}",
                resources.text(Text::The),
                resources.ordinal_name(*ordinal),
                resources.selector_name(*selector),
                resources.text(Text::OfEvery),
                interval,
                resources.text(Text::Months),
            ));
        }
    }
}

/// " at T" for a once-per-day rule, " every N Unit between S and E" for a
/// recurring one.
fn daily_clause<R: ResourceProvider>(text: &mut String, daily: &DailyRule, resources: &R) {
    match *daily {
        DailyRule::Once { time } => {
            text.push_str(&format!(
                " {} {}",
                resources.text(Text::At),
                resources.format_time(time),
            ));
        }
        DailyRule::Recurring {
            interval,
            unit,
            start,
            end,
        } => {
            text.push_str(&format!(
                " {} {} {} {} {} {} {}",
                resources.text(Text::Every),
                interval,
                resources.unit_name(unit),
                resources.text(Text::Between),
                resources.format_time(start),
                resources.text(Text::And),
                resources.format_time(end),
            ));
        }
    }
}

/// Nothing without bounds; otherwise " starting on D", " ending on D", or
/// both joined with "and".
fn limits_clause<R: ResourceProvider>(text: &mut String, config: &ScheduleConfig, resources: &R) {
    if config.start_date.is_none() && config.end_date.is_none() {
        return;
    }
    text.push(' ');
    if let Some(start) = config.start_date {
        text.push_str(&format!(
            "{} {}",
            resources.text(Text::StartingOn),
            resources.format_date(start.date()),
        ));
        if config.end_date.is_some() {
            text.push_str(&format!(" {} ", resources.text(Text::And)));
        }
    }
    if let Some(end) = config.end_date {
        text.push_str(&format!(
            "{} {}",
            resources.text(Text::EndingOn),
            resources.format_date(end.date()),
        ));
    }
}

/// Join weekday names as "A, B and C"; a single day has no conjunction.
fn weekday_list<R: ResourceProvider>(days: &[Weekday], resources: &R) -> String {
    match days {
        [] => String::new(),
        [only] => resources.weekday_name(*only).to_string(),
        [init @ .., last] => {
            let mut list = String::new();
            for (position, day) in init.iter().enumerate() {
                if position > 0 {
                    list.push_str(resources.text(Text::ListSeparator));
                }
                list.push_str(resources.weekday_name(*day));
            }
            list.push_str(&format!(
                " {} {}",
                resources.text(Text::And),
                resources.weekday_name(*last),
            ));
            list
        }
    }
}
