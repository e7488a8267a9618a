//! Display labels for calendar periods
//!
//! Presentation only: label shapes can be swapped per locale without touching
//! navigation, ranges, or equality.

use chrono::Datelike;

use super::model::CalendarPeriod;

/// Get the human-readable name for a month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

impl CalendarPeriod {
    /// Label for navigators and headers: full month name + year for months,
    /// "dd/mm – dd/mm" for weeks, the full date for days
    pub fn format(&self) -> String {
        match *self {
            Self::Month { year, month } => format!("{} {}", month_name(month), year),
            Self::Week { .. } => {
                let range = self.canonical_range();
                format!(
                    "{} – {}",
                    range.start.date().format("%d/%m"),
                    range.end.date().format("%d/%m")
                )
            }
            Self::Day { date } => {
                format!("{} {}, {}", month_name(date.month()), date.day(), date.year())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(6), "June");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Invalid Month");
    }

    #[test]
    fn test_month_label() {
        let period = CalendarPeriod::month(2025, 6).unwrap();
        assert_eq!(period.format(), "June 2025");
    }

    #[test]
    fn test_week_label_uses_canonical_range() {
        // Anchored mid-week; the label still runs Monday through Sunday
        let period = CalendarPeriod::week(date(2025, 6, 11));
        assert_eq!(period.format(), "09/06 – 15/06");
    }

    #[test]
    fn test_week_label_crossing_month_boundary() {
        let period = CalendarPeriod::week(date(2025, 7, 1));
        assert_eq!(period.format(), "30/06 – 06/07");
    }

    #[test]
    fn test_day_label() {
        let period = CalendarPeriod::day(date(2025, 6, 13));
        assert_eq!(period.format(), "June 13, 2025");
    }
}
