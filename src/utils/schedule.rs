// Opening-hours evaluation against a weekly schedule

use crate::models::{Day, Timing};
use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};

/// Finds the schedule entry for the weekday of `instant`
pub fn today_timing(schedule: &[Timing], instant: NaiveDateTime) -> Option<&Timing> {
    let day = Day::from(instant.weekday());
    schedule.iter().find(|timing| timing.day == day)
}

/// Checks whether a schedule is open at `instant`, to the minute
///
/// Missing days, closed days and malformed times all evaluate closed. Open and
/// close times are both inclusive. Hours crossing midnight (close earlier than
/// open) are not supported and evaluate closed for the whole day.
pub fn is_open_at(schedule: &[Timing], instant: NaiveDateTime) -> bool {
    let Some(timing) = today_timing(schedule, instant) else {
        return false;
    };
    if !timing.is_open {
        return false;
    }
    let Some((open, close)) = timing.hours() else {
        return false;
    };

    let time = instant.time();
    match NaiveTime::from_hms_opt(time.hour(), time.minute(), 0) {
        Some(minute) => open <= minute && minute <= close,
        None => false,
    }
}

/// Meal service windows used for delivery slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snacks,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snacks,
        MealSlot::Dinner,
    ];

    /// Start and end hour of the slot
    pub fn window(&self) -> (u32, u32) {
        match self {
            MealSlot::Breakfast => (7, 10),
            MealSlot::Lunch => (12, 15),
            MealSlot::Snacks => (16, 18),
            MealSlot::Dinner => (19, 22),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snacks => "Snacks",
            MealSlot::Dinner => "Dinner",
        }
    }

    /// The slot covering `time`, bounds inclusive
    pub fn at(time: NaiveTime) -> Option<MealSlot> {
        let minutes = time.hour() * 60 + time.minute();
        MealSlot::ALL.into_iter().find(|slot| {
            let (start, end) = slot.window();
            start * 60 <= minutes && minutes <= end * 60
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // 2024-01-01 was a Monday
    fn monday_at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn monday_schedule() -> Vec<Timing> {
        vec![Timing::open(Day::Monday, "08:00", "21:00")]
    }

    #[test]
    fn test_open_within_hours() {
        assert!(is_open_at(&monday_schedule(), monday_at(20, 59)));
        assert!(is_open_at(&monday_schedule(), monday_at(12, 0)));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(is_open_at(&monday_schedule(), monday_at(8, 0)));
        assert!(is_open_at(&monday_schedule(), monday_at(21, 0)));
        // seconds are ignored
        let late = monday_at(21, 0) + chrono::Duration::seconds(45);
        assert!(is_open_at(&monday_schedule(), late));
    }

    #[test]
    fn test_closed_outside_hours() {
        assert!(!is_open_at(&monday_schedule(), monday_at(21, 1)));
        assert!(!is_open_at(&monday_schedule(), monday_at(7, 59)));
    }

    #[test]
    fn test_closed_day_ignores_times() {
        let schedule = vec![Timing {
            is_open: false,
            ..Timing::open(Day::Monday, "00:00", "23:59")
        }];
        assert!(!is_open_at(&schedule, monday_at(12, 0)));
    }

    #[test]
    fn test_missing_day_is_closed() {
        let tuesday_noon = monday_at(12, 0) + chrono::Duration::days(1);
        assert!(!is_open_at(&monday_schedule(), tuesday_noon));
        assert!(!is_open_at(&[], monday_at(12, 0)));
    }

    #[test]
    fn test_malformed_time_is_closed() {
        let schedule = vec![Timing::open(Day::Monday, "8 AM", "21:00")];
        assert!(!is_open_at(&schedule, monday_at(12, 0)));
    }

    #[test]
    fn test_overnight_span_not_supported() {
        let schedule = vec![Timing::open(Day::Monday, "18:00", "02:00")];
        assert!(!is_open_at(&schedule, monday_at(23, 0)));
        assert!(!is_open_at(&schedule, monday_at(1, 0)));
        assert!(!is_open_at(&schedule, monday_at(18, 0)));
    }

    #[test]
    fn test_today_timing() {
        let schedule = crate::models::uniform_week("09:00", "17:00");
        let timing = today_timing(&schedule, monday_at(10, 0)).unwrap();
        assert_eq!(timing.day, Day::Monday);
    }

    #[test]
    fn test_meal_slot_at() {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(MealSlot::at(t(7, 0)), Some(MealSlot::Breakfast));
        assert_eq!(MealSlot::at(t(13, 30)), Some(MealSlot::Lunch));
        assert_eq!(MealSlot::at(t(18, 0)), Some(MealSlot::Snacks));
        assert_eq!(MealSlot::at(t(22, 0)), Some(MealSlot::Dinner));
        assert_eq!(MealSlot::at(t(11, 0)), None);
        assert_eq!(MealSlot::at(t(22, 1)), None);
    }
}
