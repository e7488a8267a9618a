//! Calendar period variants and transitions
//!
//! A period is a plain value over civil time. Transitions return new values;
//! nothing here mutates or touches a clock (only `is_current` in the range
//! module reads "now").

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Granularity of a calendar period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodUnit {
    Month,
    Week,
    Day,
}

/// A logical window over time
///
/// `Week` stores only its anchor date; the Monday-to-Sunday range is derived,
/// so two weeks anchored anywhere inside the same Monday-to-Sunday span
/// compare equal. Equality for every variant is by canonical range, never by
/// the instant used to construct the value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum CalendarPeriod {
    Month { year: i32, month: u32 },
    Week { anchor: NaiveDate },
    Day { date: NaiveDate },
}

/// A `{month, year}` record as exchanged with month pickers and summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthYear {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl CalendarPeriod {
    /// Build a month period, rejecting out-of-range month numbers
    pub fn month(year: i32, month: u32) -> Result<Self, EngineError> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidParameters(format!(
                "invalid month: {}. Must be between 1 and 12",
                month
            )));
        }
        Ok(Self::Month { year, month })
    }

    /// Build a week period anchored on any day inside the week
    pub fn week(anchor: NaiveDate) -> Self {
        Self::Week { anchor }
    }

    /// Build a single-day period
    pub fn day(date: NaiveDate) -> Self {
        Self::Day { date }
    }

    /// The period of the given unit containing `date`
    pub fn containing(date: NaiveDate, unit: PeriodUnit) -> Self {
        match unit {
            PeriodUnit::Month => Self::Month {
                year: date.year(),
                month: date.month(),
            },
            PeriodUnit::Week => Self::Week { anchor: date },
            PeriodUnit::Day => Self::Day { date },
        }
    }

    /// Granularity of this period
    pub fn unit(&self) -> PeriodUnit {
        match self {
            Self::Month { .. } => PeriodUnit::Month,
            Self::Week { .. } => PeriodUnit::Week,
            Self::Day { .. } => PeriodUnit::Day,
        }
    }

    /// The following period: one calendar month, 7 days, or 1 day ahead
    pub fn next(&self) -> Self {
        match *self {
            Self::Month { year, month } => {
                if month == 12 {
                    Self::Month { year: year + 1, month: 1 }
                } else {
                    Self::Month { year, month: month + 1 }
                }
            }
            Self::Week { anchor } => Self::Week { anchor: anchor + Duration::days(7) },
            Self::Day { date } => Self::Day { date: date + Duration::days(1) },
        }
    }

    /// The preceding period: one calendar month, 7 days, or 1 day back
    pub fn previous(&self) -> Self {
        match *self {
            Self::Month { year, month } => {
                if month == 1 {
                    Self::Month { year: year - 1, month: 12 }
                } else {
                    Self::Month { year, month: month - 1 }
                }
            }
            Self::Week { anchor } => Self::Week { anchor: anchor - Duration::days(7) },
            Self::Day { date } => Self::Day { date: date - Duration::days(1) },
        }
    }

    /// The `{month, year}` record for a month period
    pub fn as_month_year(&self) -> Option<MonthYear> {
        match *self {
            Self::Month { year, month } => Some(MonthYear { year, month }),
            _ => None,
        }
    }
}

impl TryFrom<MonthYear> for CalendarPeriod {
    type Error = EngineError;

    fn try_from(record: MonthYear) -> Result<Self, Self::Error> {
        Self::month(record.year, record.month)
    }
}

/// Periods compare by the window they denote, not by how they were built
impl PartialEq for CalendarPeriod {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_range() == other.canonical_range()
    }
}

impl Eq for CalendarPeriod {}
