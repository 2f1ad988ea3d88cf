//! Next-occurrence calculation for a recurrence configuration.
//!
//! [`Schedule`] owns one series of occurrences: the immutable
//! configuration, the locale resources used for rendering, and an explicit
//! [`SeriesState`] cursor recording the last produced instant. Each call to
//! [`Schedule::next_execution`] derives the next instant from the cursor
//! and advances it; the cursor can be read back and re-injected to resume a
//! series elsewhere.
//!
//! The recurring computation composes two state machines: the day-level
//! periodicity picks the active calendar day, and the time-of-day rule
//! picks the instant within it. When a day has no further instants the day
//! machine advances exactly once -- a freshly advanced day always has its
//! first slot free.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::config::{
    DailyRule, DaySelector, MonthlyRule, Ordinal, Periodicity, ScheduleConfig, ScheduleKind,
};
use crate::description;
use crate::error::{Result, ScheduleError};
use crate::resources::{Culture, ResourceProvider, Resources, Text};
use crate::validator::Validator;

const WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];
const WEEKEND_DAYS: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// One resolved execution: the instant and the sentence describing the
/// rule that produced it.
///
/// `next_execution_date` is `None` only for the disabled short-circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub next_execution_date: Option<NaiveDateTime>,
    pub description: String,
}

/// Cursor of one occurrence series: the last produced instant, if any.
///
/// The cursor is a plain value so a series can be suspended, stored and
/// resumed deterministically; two schedules resumed from equal states over
/// the same configuration produce identical series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesState {
    last_output: Option<NaiveDateTime>,
}

impl SeriesState {
    /// Cursor positioned after an already-produced occurrence.
    pub fn after(last_output: NaiveDateTime) -> Self {
        Self {
            last_output: Some(last_output),
        }
    }

    pub fn last_output(&self) -> Option<NaiveDateTime> {
        self.last_output
    }
}

/// Calculator for one recurrence rule.
pub struct Schedule<R: ResourceProvider = Resources> {
    config: ScheduleConfig,
    state: SeriesState,
    resources: R,
}

impl Schedule {
    /// Build a calculator with the bundled English resources.
    ///
    /// # Errors
    /// `MissingConfiguration` when no configuration is supplied.
    pub fn new(config: Option<ScheduleConfig>) -> Result<Self> {
        Self::with_resources(config, Resources::new(Culture::English))
    }
}

impl<R: ResourceProvider> Schedule<R> {
    /// Build a calculator rendering through the given resources.
    ///
    /// # Errors
    /// `MissingConfiguration` when no configuration is supplied.
    pub fn with_resources(config: Option<ScheduleConfig>, resources: R) -> Result<Self> {
        let config = config.ok_or(ScheduleError::MissingConfiguration)?;
        Ok(Self {
            config,
            state: SeriesState::default(),
            resources,
        })
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Current series cursor.
    pub fn state(&self) -> SeriesState {
        self.state
    }

    /// Reposition the series at an explicit cursor.
    pub fn resume(&mut self, state: SeriesState) {
        self.state = state;
    }

    /// Compute the next execution and advance the series cursor.
    ///
    /// A disabled configuration returns the fixed "disabled" output without
    /// running any validation. Otherwise the baseline configuration gate
    /// runs first, then the next instant is derived and recorded.
    ///
    /// # Errors
    /// Any of the validation kinds in [`ScheduleError`]; the cursor is left
    /// untouched on failure.
    pub fn next_execution(&mut self) -> Result<Output> {
        if !self.config.enabled {
            return Ok(Output {
                next_execution_date: None,
                description: self.resources.text(Text::Disabled).to_string(),
            });
        }

        self.validator().configuration()?;
        let next = self.next_after(self.state)?;
        self.state = SeriesState::after(next);

        Ok(Output {
            next_execution_date: Some(next),
            description: self.description(next),
        })
    }

    /// Next occurrence for the current cursor, without advancing it.
    pub fn next_date(&self) -> Result<NaiveDateTime> {
        self.next_after(self.state)
    }

    /// Next occurrence strictly following the position recorded in `state`.
    ///
    /// One-shot rules always resolve to their execution instant; recurring
    /// rules run the day/time state machines. Either way the result must
    /// not precede the reference "now" and must fall inside the validity
    /// window -- a violation aborts the call rather than advancing past it.
    pub fn next_after(&self, state: SeriesState) -> Result<NaiveDateTime> {
        let validator = self.validator();
        let next = match &self.config.kind {
            ScheduleKind::Once { .. } => validator.once_execution_time()?,
            ScheduleKind::Recurring { periodicity, daily } => {
                self.next_recurring(state.last_output, periodicity, daily)?
            }
        };
        validator.not_before_current(next)?;
        validator.within_limits(next)?;
        Ok(next)
    }

    /// Produce `count` successive executions, threading the cursor between
    /// calls.
    ///
    /// # Errors
    /// The first failing element aborts the series; no partial result is
    /// returned.
    pub fn calculate_series(&mut self, count: usize) -> Result<Vec<Output>> {
        let mut series = Vec::with_capacity(count);
        for _ in 0..count {
            series.push(self.next_execution()?);
        }
        Ok(series)
    }

    /// Iterator over successive executions.
    pub fn occurrences(&mut self) -> Occurrences<'_, R> {
        Occurrences {
            schedule: self,
            failed: false,
        }
    }

    /// Render the description for an already-resolved occurrence.
    pub fn description(&self, next: NaiveDateTime) -> String {
        description::describe(&self.config, next, &self.resources)
    }

    fn validator(&self) -> Validator<'_> {
        Validator::new(&self.config)
    }

    fn next_recurring(
        &self,
        last: Option<NaiveDateTime>,
        periodicity: &Periodicity,
        daily: &DailyRule,
    ) -> Result<NaiveDateTime> {
        self.validator().periodicity(periodicity)?;

        let search_day = match last {
            Some(day) => day,
            None => self.first_active_day(periodicity)?,
        };

        match self.time_on(search_day, last, daily)? {
            Some(next) => Ok(next),
            None => {
                // The search day is exhausted; a freshly advanced day
                // always has its first slot free.
                let next_day = self.next_active_day(search_day, periodicity);
                Ok(first_slot(next_day, daily))
            }
        }
    }

    /// The first calendar day a fresh series may fire on, per periodicity.
    /// Monthly rules validate their settings here, at first use.
    fn first_active_day(&self, periodicity: &Periodicity) -> Result<NaiveDateTime> {
        match periodicity {
            Periodicity::Daily => Ok(self.anchor()),
            Periodicity::Weekly { active_days, .. } => {
                Ok(first_matching_day(self.anchor(), active_days))
            }
            Periodicity::Monthly {
                interval,
                rule: MonthlyRule::OnDay { day },
            } => {
                self.validator().monthly_on_day(*interval, *day)?;
                Ok(self.first_monthly_on_day(*day))
            }
            Periodicity::Monthly {
                interval,
                rule: MonthlyRule::OnOrdinalWeekday { ordinal, selector },
            } => {
                self.validator().monthly_ordinal(*interval)?;
                Ok(self
                    .ordinal_day_in_month(self.anchor().date(), *ordinal, *selector)
                    .and_time(NaiveTime::MIN))
            }
        }
    }

    /// The daily rule's reference day: the explicit start if configured,
    /// else "now".
    fn anchor(&self) -> NaiveDateTime {
        self.config.start_date.unwrap_or(self.config.current_date)
    }

    /// First month at or after the anchor that can host the configured day,
    /// clamped to the month length.
    fn first_monthly_on_day(&self, day: u32) -> NaiveDateTime {
        let anchor = self.anchor().date();
        let mut month = anchor;
        if anchor.day() > day {
            loop {
                month = calendar::add_months(month, 1);
                if calendar::days_in_month(month.year(), month.month()) >= day {
                    break;
                }
            }
        }
        calendar::clamp_to_day(month.year(), month.month(), day).and_time(NaiveTime::MIN)
    }

    /// The next active calendar day after `search`, per periodicity. Always
    /// a strictly later date, at midnight.
    fn next_active_day(&self, search: NaiveDateTime, periodicity: &Periodicity) -> NaiveDate {
        match periodicity {
            Periodicity::Daily => calendar::add_days(search.date(), 1),
            Periodicity::Weekly {
                interval,
                active_days,
            } => next_weekly_day(search, *interval, active_days),
            Periodicity::Monthly { interval, rule } => {
                let target = calendar::add_months(search.date(), *interval);
                match rule {
                    MonthlyRule::OnDay { day } => {
                        calendar::clamp_to_day(target.year(), target.month(), *day)
                    }
                    MonthlyRule::OnOrdinalWeekday { ordinal, selector } => {
                        self.ordinal_day_in_month(target, *ordinal, *selector)
                    }
                }
            }
        }
    }

    /// Resolve the ordinal pick for the month containing `month_day`,
    /// never producing a day before the daily anchor. A resolution that
    /// lands before the anchor recomputes on the following month.
    fn ordinal_day_in_month(
        &self,
        month_day: NaiveDate,
        ordinal: Ordinal,
        selector: DaySelector,
    ) -> NaiveDate {
        let floor = self.anchor().date();
        match selector {
            // Degenerate case: the pick is the candidate day itself, held
            // up to the anchor. The ordinal does not shift it.
            DaySelector::AnyDay => month_day.max(floor),
            DaySelector::On(weekday) => ordinal_weekday_day(month_day, weekday, ordinal, floor),
            DaySelector::AnyWeekday => ordinal_class_day(month_day, &WEEKDAYS, ordinal, floor),
            DaySelector::AnyWeekendDay => {
                ordinal_class_day(month_day, &WEEKEND_DAYS, ordinal, floor)
            }
        }
    }

    /// Resolve the time-of-day component for `day`, or `None` when that day
    /// has no instants left. Daily-axis validation runs here, at first use.
    fn time_on(
        &self,
        day: NaiveDateTime,
        last: Option<NaiveDateTime>,
        daily: &DailyRule,
    ) -> Result<Option<NaiveDateTime>> {
        match *daily {
            DailyRule::Once { time } => {
                self.validator().daily_once_frequency(daily)?;
                // Same calendar day as the previous output: already fired.
                if last.map(|previous| previous.date()) == Some(day.date()) {
                    return Ok(None);
                }
                Ok(Some(calendar::at_time(day.date(), time)))
            }
            DailyRule::Recurring { start, end, .. } => {
                self.validator().daily_frequency(daily)?;

                let fresh_day = last.is_none_or(|previous| previous.date() < day.date());
                if fresh_day {
                    return Ok(Some(calendar::at_time(day.date(), start)));
                }

                let mut next = calendar::time_of_day(day) + daily.step();
                if next < start {
                    next = start;
                }
                if !calendar::is_valid_time(next) || next > end {
                    return Ok(None);
                }
                Ok(Some(calendar::at_time(day.date(), next)))
            }
        }
    }
}

/// First instant of a freshly advanced day. Callers have already run the
/// daily-axis validation, so the time values are known-valid.
fn first_slot(day: NaiveDate, daily: &DailyRule) -> NaiveDateTime {
    match *daily {
        DailyRule::Once { time } => calendar::at_time(day, time),
        DailyRule::Recurring { start, .. } => calendar::at_time(day, start),
    }
}

/// Scan forward at most a week for the first day whose weekday is active.
fn first_matching_day(anchor: NaiveDateTime, active_days: &[Weekday]) -> NaiveDateTime {
    let mut day = anchor;
    for _ in 0..7 {
        if active_days.contains(&day.weekday()) {
            return day;
        }
        day = day
            .checked_add_signed(Duration::days(1))
            .unwrap_or(NaiveDateTime::MAX);
    }
    day
}

/// Next active day under a weekly rule: the following active weekday of the
/// week containing `search`, or -- when `search` is that week's final
/// active day -- the week's first active weekday moved `interval` weeks
/// forward.
fn next_weekly_day(search: NaiveDateTime, interval: i32, active_days: &[Weekday]) -> NaiveDate {
    let week: Vec<NaiveDate> = calendar::week_of(search.date())
        .into_iter()
        .filter(|day| active_days.contains(&day.weekday()))
        .collect();

    if let Some(position) = week.iter().position(|day| *day == search.date()) {
        if let Some(next) = week.get(position + 1) {
            return *next;
        }
    }
    let first = week.first().copied().unwrap_or(search.date());
    calendar::add_days(first, 7 * i64::from(interval))
}

/// The ordinal-th occurrence of `weekday` in the month containing
/// `month_day` (for `Last`, walking back at most six days from the month's
/// final day), recomputed on following months until it reaches `floor`.
fn ordinal_weekday_day(
    month_day: NaiveDate,
    weekday: Weekday,
    ordinal: Ordinal,
    floor: NaiveDate,
) -> NaiveDate {
    let mut month = month_day;
    loop {
        let (year, month_number) = (month.year(), month.month());
        let day = match ordinal.index() {
            Some(occurrence) => {
                let first = calendar::ymd(year, month_number, 1);
                let offset = i64::from(weekday.num_days_from_monday())
                    - i64::from(first.weekday().num_days_from_monday());
                calendar::ymd(
                    year,
                    month_number,
                    1 + offset.rem_euclid(7) as u32 + 7 * occurrence,
                )
            }
            None => {
                let last =
                    calendar::ymd(year, month_number, calendar::days_in_month(year, month_number));
                let walk_back = i64::from(last.weekday().num_days_from_monday())
                    - i64::from(weekday.num_days_from_monday());
                calendar::add_days(last, -walk_back.rem_euclid(7))
            }
        };
        if day >= floor {
            return day;
        }
        let next_month = calendar::add_months(calendar::ymd(year, month_number, 1), 1);
        if next_month.year() == year && next_month.month() == month_number {
            // Saturated at the calendar's end; nothing later exists.
            return day;
        }
        month = next_month;
    }
}

/// The ordinal-th day of the month whose weekday belongs to `class`,
/// scanning the month's days in order (for `Last`, the final qualifying
/// day). A pick before `floor` carries into the following month's scan.
fn ordinal_class_day(
    month_day: NaiveDate,
    class: &[Weekday],
    ordinal: Ordinal,
    floor: NaiveDate,
) -> NaiveDate {
    let mut month = month_day;
    loop {
        let (year, month_number) = (month.year(), month.month());
        let mut qualifying = (1..=calendar::days_in_month(year, month_number))
            .map(|day| calendar::ymd(year, month_number, day))
            .filter(|day| class.contains(&day.weekday()));

        // Every month holds at least four qualifying days of either class,
        // so the counted ordinals always resolve in-month.
        let day = match ordinal.index() {
            Some(occurrence) => qualifying.nth(occurrence as usize),
            None => qualifying.last(),
        }
        .unwrap_or(month);

        if day >= floor {
            return day;
        }
        let next_month = calendar::add_months(calendar::ymd(year, month_number, 1), 1);
        if next_month.year() == year && next_month.month() == month_number {
            // Saturated at the calendar's end; nothing later exists.
            return day;
        }
        month = next_month;
    }
}

/// Iterator over successive executions of a schedule.
///
/// Each step advances the series cursor. Because the computation is
/// deterministic a failure would repeat forever, so the iterator fuses:
/// it yields the first error once and ends.
pub struct Occurrences<'a, R: ResourceProvider = Resources> {
    schedule: &'a mut Schedule<R>,
    failed: bool,
}

impl<R: ResourceProvider> Iterator for Occurrences<'_, R> {
    type Item = Result<Output>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.schedule.next_execution();
        self.failed = result.is_err();
        Some(result)
    }
}
