// Weekly opening hours of a mess

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week as named in catalog schedules ("Monday" .. "Sunday")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Day::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opening hours for one day of the week
///
/// Times are kept as the "HH:MM" strings supplied by the catalog and parsed at
/// evaluation time, so a malformed value closes the day instead of rejecting
/// the whole entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    pub day: Day,
    pub open_time: String,
    pub close_time: String,
    pub is_open: bool,
}

pub const TIME_FORMAT: &str = "%H:%M";

impl Timing {
    pub fn open<S: Into<String>>(day: Day, open_time: S, close_time: S) -> Self {
        Self {
            day,
            open_time: open_time.into(),
            close_time: close_time.into(),
            is_open: true,
        }
    }

    pub fn closed(day: Day) -> Self {
        Self {
            day,
            open_time: String::from("00:00"),
            close_time: String::from("00:00"),
            is_open: false,
        }
    }

    /// Parsed (open, close) pair, `None` if either time is malformed
    pub fn hours(&self) -> Option<(NaiveTime, NaiveTime)> {
        let open = NaiveTime::parse_from_str(&self.open_time, TIME_FORMAT).ok()?;
        let close = NaiveTime::parse_from_str(&self.close_time, TIME_FORMAT).ok()?;
        Some((open, close))
    }

    /// True when the close time is earlier than the open time (past midnight)
    pub fn spans_midnight(&self) -> bool {
        matches!(self.hours(), Some((open, close)) if close < open)
    }
}

/// Builds a seven-day schedule with identical hours on every day
pub fn uniform_week(open_time: &str, close_time: &str) -> Vec<Timing> {
    Day::ALL
        .iter()
        .map(|day| Timing::open(*day, open_time, close_time))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_from_weekday() {
        assert_eq!(Day::from(Weekday::Mon), Day::Monday);
        assert_eq!(Day::from(Weekday::Sun), Day::Sunday);
        assert_eq!(Day::Wednesday.to_string(), "Wednesday");
    }

    #[test]
    fn test_timing_serializes_with_app_field_names() {
        let timing = Timing::open(Day::Friday, "08:00", "21:00");
        let json = serde_json::to_string(&timing).unwrap();
        assert_eq!(
            json,
            r#"{"day":"Friday","openTime":"08:00","closeTime":"21:00","isOpen":true}"#
        );
    }

    #[test]
    fn test_hours_parsing() {
        let timing = Timing::open(Day::Monday, "07:30", "22:15");
        let (open, close) = timing.hours().unwrap();
        assert_eq!(open, NaiveTime::from_hms_opt(7, 30, 0).unwrap());
        assert_eq!(close, NaiveTime::from_hms_opt(22, 15, 0).unwrap());

        assert!(Timing::open(Day::Monday, "7am", "22:15").hours().is_none());
        assert!(Timing::open(Day::Monday, "07:00", "25:00").hours().is_none());
    }

    #[test]
    fn test_spans_midnight() {
        assert!(Timing::open(Day::Saturday, "18:00", "01:00").spans_midnight());
        assert!(!Timing::open(Day::Saturday, "08:00", "21:00").spans_midnight());
    }

    #[test]
    fn test_uniform_week() {
        let week = uniform_week("08:00", "21:00");
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].day, Day::Monday);
        assert_eq!(week[6].day, Day::Sunday);
        assert!(week.iter().all(|t| t.is_open));
    }
}
