//! Canonical ranges and containment for calendar periods

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::model::CalendarPeriod;

/// The start/end instants a period denotes, both inclusive
///
/// Endpoints are civil local time: a day runs 00:00:00.000 through
/// 23:59:59.999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl PeriodRange {
    /// Whether an instant falls inside the range
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

impl CalendarPeriod {
    /// The deterministic start/end instants this period denotes
    ///
    /// A week runs Monday 00:00:00.000 through the following Sunday
    /// 23:59:59.999; the anchor normalizes to the most recent Monday on or
    /// before it, so a Sunday anchor maps to the Monday six days earlier.
    pub fn canonical_range(&self) -> PeriodRange {
        match *self {
            Self::Month { year, month } => {
                let start = first_of_month(year, month);
                let end = start + Duration::days(days_in_month(month, year) as i64 - 1);
                day_span(start, end)
            }
            Self::Week { anchor } => {
                let monday = week_start(anchor);
                day_span(monday, monday + Duration::days(6))
            }
            Self::Day { date } => day_span(date, date),
        }
    }

    /// Whether this period's canonical range contains "now"
    ///
    /// Week periods anchored on any day of the current week are current,
    /// since containment is tested against the canonical range rather than
    /// the anchor.
    pub fn is_current(&self) -> bool {
        self.is_current_at(Local::now().naive_local())
    }

    /// `is_current` against an injected clock
    pub fn is_current_at(&self, now: NaiveDateTime) -> bool {
        self.canonical_range().contains(now)
    }
}

/// Most recent Monday on or before the given date
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Get the number of days in a given month and year
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 => if is_leap_year(year) { 29 } else { 28 },
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // Months are constructor-validated to 1..=12; MIN covers hand-built
    // values outside chrono's representable years
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

fn day_span(first: NaiveDate, last: NaiveDate) -> PeriodRange {
    PeriodRange {
        start: first.and_hms_opt(0, 0, 0).unwrap_or_default(),
        end: last.and_hms_milli_opt(23, 59, 59, 999).unwrap_or_default(),
    }
}
