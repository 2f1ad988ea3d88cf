//! Tests for the validation battery: each check maps to exactly one error
//! kind, and check ordering decides which error wins.

use cadence_engine::{
    DailyRule, Periodicity, ScheduleConfig, ScheduleError, ScheduleKind, TimeUnit, Validator,
};
use chrono::{Duration, NaiveDateTime, Weekday};

fn dt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Enabled daily base configuration the individual tests mutate.
fn base() -> ScheduleConfig {
    ScheduleConfig::recurring(dt(2020, 1, 1), Periodicity::Daily, DailyRule::default())
}

// ---------------------------------------------------------------------------
// Date sentinels and window bounds
// ---------------------------------------------------------------------------

#[test]
fn current_date_sentinel_is_rejected() {
    let config = ScheduleConfig {
        current_date: NaiveDateTime::MIN,
        ..base()
    };
    let validator = Validator::new(&config);
    assert_eq!(validator.dates(), Err(ScheduleError::InvalidCurrentDate));
    assert_eq!(
        validator.configuration(),
        Err(ScheduleError::InvalidCurrentDate)
    );
}

#[test]
fn start_date_sentinel_is_rejected() {
    let config = ScheduleConfig {
        start_date: Some(NaiveDateTime::MAX),
        ..base()
    };
    let validator = Validator::new(&config);
    assert_eq!(validator.dates(), Err(ScheduleError::InvalidStartDate));
    assert_eq!(
        validator.configuration(),
        Err(ScheduleError::InvalidStartDate)
    );
}

#[test]
fn end_date_sentinel_is_rejected() {
    let config = ScheduleConfig {
        end_date: Some(NaiveDateTime::MIN),
        ..base()
    };
    let validator = Validator::new(&config);
    assert_eq!(validator.dates(), Err(ScheduleError::InvalidEndDate));
    assert_eq!(validator.configuration(), Err(ScheduleError::InvalidEndDate));
}

#[test]
fn current_date_check_wins_over_later_checks() {
    // Several axes invalid at once: the current-date check runs first.
    let config = ScheduleConfig {
        current_date: NaiveDateTime::MIN,
        start_date: Some(NaiveDateTime::MAX),
        ..base()
    };
    assert_eq!(
        Validator::new(&config).configuration(),
        Err(ScheduleError::InvalidCurrentDate)
    );
}

#[test]
fn start_after_end_is_rejected() {
    let config = ScheduleConfig {
        start_date: Some(dt(2020, 1, 10)),
        end_date: Some(dt(2020, 1, 2)),
        ..base()
    };
    let validator = Validator::new(&config);
    assert_eq!(validator.limits(), Err(ScheduleError::EndBeforeStart));
    assert_eq!(
        validator.configuration(),
        Err(ScheduleError::EndBeforeStart)
    );
}

#[test]
fn single_bound_passes_the_limits_check() {
    let config = ScheduleConfig {
        end_date: Some(dt(2019, 1, 1)),
        ..base()
    };
    assert_eq!(Validator::new(&config).limits(), Ok(()));
}

#[test]
fn well_formed_configuration_passes() {
    let config = ScheduleConfig {
        start_date: Some(dt(2020, 1, 1)),
        end_date: Some(dt(2021, 1, 31)),
        ..base()
    };
    assert_eq!(Validator::new(&config).configuration(), Ok(()));
}

// ---------------------------------------------------------------------------
// One-shot execution instant
// ---------------------------------------------------------------------------

#[test]
fn once_requires_an_execution_time() {
    let config = ScheduleConfig {
        kind: ScheduleKind::Once {
            execution_time: None,
        },
        ..base()
    };
    assert_eq!(
        Validator::new(&config).once_execution_time(),
        Err(ScheduleError::MissingOnceDate)
    );
}

#[test]
fn once_rejects_a_sentinel_execution_time() {
    let config = ScheduleConfig {
        kind: ScheduleKind::Once {
            execution_time: Some(NaiveDateTime::MAX),
        },
        ..base()
    };
    assert_eq!(
        Validator::new(&config).once_execution_time(),
        Err(ScheduleError::MissingOnceDate)
    );
}

#[test]
fn once_returns_the_validated_instant() {
    let config = ScheduleConfig::once(dt(2020, 1, 1), dt(2020, 1, 1));
    assert_eq!(
        Validator::new(&config).once_execution_time(),
        Ok(dt(2020, 1, 1))
    );
}

// ---------------------------------------------------------------------------
// Weekly periodicity
// ---------------------------------------------------------------------------

#[test]
fn weekly_interval_must_be_positive() {
    let periodicity = Periodicity::Weekly {
        interval: i32::MIN,
        active_days: vec![],
    };
    assert_eq!(
        Validator::new(&base()).periodicity(&periodicity),
        Err(ScheduleError::InvalidWeeklyInterval)
    );
}

#[test]
fn weekly_needs_at_least_one_active_day() {
    let periodicity = Periodicity::Weekly {
        interval: 25,
        active_days: vec![],
    };
    assert_eq!(
        Validator::new(&base()).periodicity(&periodicity),
        Err(ScheduleError::EmptyWeeklyDays)
    );
}

#[test]
fn weekly_with_days_and_positive_interval_passes() {
    let periodicity = Periodicity::Weekly {
        interval: 25,
        active_days: vec![Weekday::Mon, Weekday::Wed],
    };
    assert_eq!(Validator::new(&base()).periodicity(&periodicity), Ok(()));
}

#[test]
fn daily_and_monthly_have_no_top_level_periodicity_check() {
    let config = base();
    let validator = Validator::new(&config);
    assert_eq!(validator.periodicity(&Periodicity::Daily), Ok(()));
    // Monthly checks run at point of use, not here, so even a broken
    // monthly interval passes this gate.
    let monthly = Periodicity::Monthly {
        interval: 0,
        rule: cadence_engine::MonthlyRule::OnDay { day: 0 },
    };
    assert_eq!(validator.periodicity(&monthly), Ok(()));
}

// ---------------------------------------------------------------------------
// Daily frequency
// ---------------------------------------------------------------------------

#[test]
fn recurring_daily_interval_must_be_positive() {
    let rule = DailyRule::every(0, TimeUnit::Hours);
    assert_eq!(
        Validator::new(&base()).daily_frequency(&rule),
        Err(ScheduleError::InvalidDailyInterval)
    );
}

#[test]
fn recurring_daily_start_must_be_a_time_of_day() {
    let rule = DailyRule::Recurring {
        interval: 1,
        unit: TimeUnit::Hours,
        start: Duration::hours(65),
        end: Duration::hours(8),
    };
    assert_eq!(
        Validator::new(&base()).daily_frequency(&rule),
        Err(ScheduleError::InvalidDailyStart)
    );
}

#[test]
fn recurring_daily_end_must_be_nonzero() {
    let rule = DailyRule::Recurring {
        interval: 1,
        unit: TimeUnit::Hours,
        start: Duration::zero(),
        end: Duration::zero(),
    };
    assert_eq!(
        Validator::new(&base()).daily_frequency(&rule),
        Err(ScheduleError::InvalidDailyEnd)
    );
}

#[test]
fn recurring_daily_with_defaults_passes() {
    let rule = DailyRule::every(10, TimeUnit::Hours);
    assert_eq!(Validator::new(&base()).daily_frequency(&rule), Ok(()));
}

#[test]
fn once_rule_skips_the_recurring_frequency_check() {
    let rule = DailyRule::Once {
        time: Duration::hours(26),
    };
    assert_eq!(Validator::new(&base()).daily_frequency(&rule), Ok(()));
}

#[test]
fn once_per_day_time_must_fit_in_a_day() {
    let rule = DailyRule::Once {
        time: Duration::hours(26),
    };
    assert_eq!(
        Validator::new(&base()).daily_once_frequency(&rule),
        Err(ScheduleError::DailyOnceOutOfRange)
    );
}

#[test]
fn negative_once_per_day_time_is_rejected() {
    let rule = DailyRule::Once {
        time: Duration::hours(-1),
    };
    assert_eq!(
        Validator::new(&base()).daily_once_frequency(&rule),
        Err(ScheduleError::DailyOnceOutOfRange)
    );
}

#[test]
fn valid_once_per_day_time_passes() {
    let rule = DailyRule::Once {
        time: Duration::hours(2),
    };
    assert_eq!(Validator::new(&base()).daily_once_frequency(&rule), Ok(()));
}

// ---------------------------------------------------------------------------
// Monthly settings
// ---------------------------------------------------------------------------

#[test]
fn monthly_day_interval_must_be_positive() {
    assert_eq!(
        Validator::new(&base()).monthly_on_day(0, 15),
        Err(ScheduleError::InvalidMonthlyInterval)
    );
}

#[test]
fn monthly_day_must_be_in_range() {
    let config = base();
    let validator = Validator::new(&config);
    assert_eq!(
        validator.monthly_on_day(1, 0),
        Err(ScheduleError::InvalidMonthlyDay)
    );
    assert_eq!(
        validator.monthly_on_day(1, 32),
        Err(ScheduleError::InvalidMonthlyDay)
    );
    assert_eq!(validator.monthly_on_day(1, 31), Ok(()));
}

#[test]
fn monthly_ordinal_interval_must_be_positive() {
    let config = base();
    let validator = Validator::new(&config);
    assert_eq!(
        validator.monthly_ordinal(-3),
        Err(ScheduleError::InvalidMonthlyInterval)
    );
    assert_eq!(validator.monthly_ordinal(1), Ok(()));
}

// ---------------------------------------------------------------------------
// Post-computation gates
// ---------------------------------------------------------------------------

#[test]
fn computed_date_may_not_precede_current() {
    let config = base();
    let validator = Validator::new(&config);
    assert_eq!(
        validator.not_before_current(dt(1993, 1, 15)),
        Err(ScheduleError::BeforeCurrentDate)
    );
    assert_eq!(validator.not_before_current(dt(2021, 1, 15)), Ok(()));
    assert_eq!(validator.not_before_current(dt(2020, 1, 1)), Ok(()));
}

#[test]
fn computed_date_must_stay_inside_the_window() {
    let config = ScheduleConfig {
        start_date: Some(dt(2020, 1, 1)),
        end_date: Some(dt(2020, 12, 31)),
        ..base()
    };
    let validator = Validator::new(&config);
    assert_eq!(
        validator.within_limits(dt(1993, 1, 15)),
        Err(ScheduleError::OutOfLimits)
    );
    assert_eq!(
        validator.within_limits(dt(2023, 1, 15)),
        Err(ScheduleError::OutOfLimits)
    );
    assert_eq!(validator.within_limits(dt(2020, 1, 15)), Ok(()));
}

#[test]
fn missing_bounds_leave_the_window_open() {
    let config = base();
    let validator = Validator::new(&config);
    assert_eq!(validator.within_limits(dt(1900, 1, 1)), Ok(()));
    assert_eq!(validator.within_limits(dt(2100, 1, 1)), Ok(()));
}
