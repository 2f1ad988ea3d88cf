//! Locale text provider consumed by the description renderer.
//!
//! The calculator never reads any of this; only the rendered sentence and
//! the localized error texts depend on it. Lookups are keyed by enums, not
//! strings, so a missing translation is a compile error rather than a
//! runtime fallback.

use chrono::{Duration, NaiveDate, Weekday};

use crate::config::{DaySelector, Ordinal, TimeUnit};
use crate::error::ScheduleError;

/// Keys for the fixed sentence fragments used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    Disabled,
    Occurs,
    Once,
    EveryDay,
    UsedOn,
    At,
    Every,
    Between,
    And,
    Week,
    Weeks,
    On,
    ListSeparator,
    TheDays,
    Months,
    The,
    OfEvery,
    StartingOn,
    EndingOn,
}

/// Source of localized text and date/time formatting.
///
/// Implementations must keep [`format_date`](Self::format_date) and
/// [`format_time`](Self::format_time) consistent with whatever their
/// sentence fragments promise; the renderer concatenates both verbatim.
pub trait ResourceProvider {
    fn text(&self, key: Text) -> &str;

    fn weekday_name(&self, day: Weekday) -> &str;

    fn ordinal_name(&self, ordinal: Ordinal) -> &str;

    fn selector_name(&self, selector: DaySelector) -> &str;

    fn unit_name(&self, unit: TimeUnit) -> &str;

    fn format_date(&self, date: NaiveDate) -> String;

    /// Render a time of day. `time` is always a validated value below 24h
    /// when called from the renderer.
    fn format_time(&self, time: Duration) -> String;

    /// Localized message for a validation failure. Defaults to the
    /// canonical English `Display` text.
    fn error_text(&self, error: ScheduleError) -> String {
        error.to_string()
    }
}

/// Supported cultures of the bundled [`Resources`] provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Culture {
    #[default]
    English,
    Spanish,
}

/// Bundled lookup tables for the supported cultures.
///
/// Dates render as `dd/MM/yyyy` and times as `HH:mm` in both cultures.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resources {
    culture: Culture,
}

impl Resources {
    pub fn new(culture: Culture) -> Self {
        Self { culture }
    }

    pub fn culture(&self) -> Culture {
        self.culture
    }
}

impl ResourceProvider for Resources {
    fn text(&self, key: Text) -> &str {
        match self.culture {
            Culture::English => match key {
                Text::Disabled => "The process is disabled",
                Text::Occurs => "Occurs ",
                Text::Once => "once",
                Text::EveryDay => "every day",
                Text::UsedOn => ". Schedule will be used on",
                Text::At => "at",
                Text::Every => "every",
                Text::Between => "between",
                Text::And => "and",
                Text::Week => "week",
                Text::Weeks => "weeks",
                Text::On => "on",
                Text::ListSeparator => ", ",
                Text::TheDays => "the days",
                Text::Months => "months",
                Text::The => "the",
                Text::OfEvery => "of every",
                Text::StartingOn => "starting on",
                Text::EndingOn => "ending on",
            },
            Culture::Spanish => match key {
                Text::Disabled => "El proceso está desactivado",
                Text::Occurs => "Se produce ",
                Text::Once => "una vez",
                Text::EveryDay => "todos los días",
                Text::UsedOn => ". El calendario se utilizará el",
                Text::At => "a las",
                Text::Every => "cada",
                Text::Between => "entre",
                Text::And => "y",
                Text::Week => "semana",
                Text::Weeks => "semanas",
                Text::On => "los",
                Text::ListSeparator => ", ",
                Text::TheDays => "los días",
                Text::Months => "meses",
                Text::The => "el",
                Text::OfEvery => "de cada",
                Text::StartingOn => "empezando el",
                Text::EndingOn => "terminando el",
            },
        }
    }

    fn weekday_name(&self, day: Weekday) -> &str {
        match self.culture {
            Culture::English => match day {
                Weekday::Mon => "Monday",
                Weekday::Tue => "Tuesday",
                Weekday::Wed => "Wednesday",
                Weekday::Thu => "Thursday",
                Weekday::Fri => "Friday",
                Weekday::Sat => "Saturday",
                Weekday::Sun => "Sunday",
            },
            Culture::Spanish => match day {
                Weekday::Mon => "lunes",
                Weekday::Tue => "martes",
                Weekday::Wed => "miércoles",
                Weekday::Thu => "jueves",
                Weekday::Fri => "viernes",
                Weekday::Sat => "sábado",
                Weekday::Sun => "domingo",
            },
        }
    }

    fn ordinal_name(&self, ordinal: Ordinal) -> &str {
        match self.culture {
            Culture::English => match ordinal {
                Ordinal::First => "First",
                Ordinal::Second => "Second",
                Ordinal::Third => "Third",
                Ordinal::Fourth => "Fourth",
                Ordinal::Last => "Last",
            },
            Culture::Spanish => match ordinal {
                Ordinal::First => "primer",
                Ordinal::Second => "segundo",
                Ordinal::Third => "tercer",
                Ordinal::Fourth => "cuarto",
                Ordinal::Last => "último",
            },
        }
    }

    fn selector_name(&self, selector: DaySelector) -> &str {
        match selector {
            DaySelector::On(day) => self.weekday_name(day),
            DaySelector::AnyDay => match self.culture {
                Culture::English => "Day",
                Culture::Spanish => "día",
            },
            DaySelector::AnyWeekday => match self.culture {
                Culture::English => "WeekDay",
                Culture::Spanish => "día de la semana",
            },
            DaySelector::AnyWeekendDay => match self.culture {
                Culture::English => "WeekendDay",
                Culture::Spanish => "fin de semana",
            },
        }
    }

    fn unit_name(&self, unit: TimeUnit) -> &str {
        match self.culture {
            Culture::English => match unit {
                TimeUnit::Hours => "Hours",
                TimeUnit::Minutes => "Minutes",
                TimeUnit::Seconds => "Seconds",
            },
            Culture::Spanish => match unit {
                TimeUnit::Hours => "horas",
                TimeUnit::Minutes => "minutos",
                TimeUnit::Seconds => "segundos",
            },
        }
    }

    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%d/%m/%Y").to_string()
    }

    fn format_time(&self, time: Duration) -> String {
        let total_seconds = time.num_seconds().rem_euclid(86_400);
        format!("{:02}:{:02}", total_seconds / 3_600, total_seconds % 3_600 / 60)
    }

    fn error_text(&self, error: ScheduleError) -> String {
        match self.culture {
            Culture::English => error.to_string(),
            Culture::Spanish => match error {
                ScheduleError::MissingConfiguration => {
                    "Debe definir una configuración para el horario"
                }
                ScheduleError::InvalidCurrentDate => {
                    "La fecha actual debe ser una fecha correcta"
                }
                ScheduleError::InvalidStartDate => {
                    "La fecha de inicio debe ser una fecha correcta"
                }
                ScheduleError::InvalidEndDate => "La fecha de fin debe ser una fecha correcta",
                ScheduleError::EndBeforeStart => {
                    "La fecha de fin debe ser mayor que la de inicio"
                }
                ScheduleError::MissingOnceDate => {
                    "Si el tipo es 'una vez', debe introducir una fecha válida"
                }
                ScheduleError::InvalidWeeklyInterval => {
                    "La periodicidad semanal debe ser un número correcto y mayor que 0 si la configuración es semanal"
                }
                ScheduleError::EmptyWeeklyDays => {
                    "Debe seleccionar algún día de la semana si la configuración es semanal"
                }
                ScheduleError::InvalidDailyInterval => "Debe indicar una periodicidad correcta",
                ScheduleError::InvalidDailyStart => {
                    "La frecuencia diaria de inicio debe ser una hora correcta"
                }
                ScheduleError::InvalidDailyEnd => {
                    "La frecuencia diaria final debe ser una hora correcta distinta de cero"
                }
                ScheduleError::DailyOnceOutOfRange => {
                    "El tiempo de intervalo en la frecuencia diaria debe ser inferior a 24 horas"
                }
                ScheduleError::BeforeCurrentDate => {
                    "La siguiente hora de ejecución no puede ser inferior a la fecha actual"
                }
                ScheduleError::OutOfLimits => "La fecha está fuera de los límites",
                ScheduleError::InvalidMonthlyInterval => {
                    "Debe introducir una periodicidad mensual válida"
                }
                ScheduleError::InvalidMonthlyDay => "Debe introducir un día válido",
            }
            .to_string(),
        }
    }
}
