//! Clinic policy rules deciding whether a (date, slot) cell is bookable at
//! all, independent of any existing appointment.
use chrono::{Datelike, NaiveDate, Weekday};

use crate::schedule::slots;

/// Buffer slots reserved every day of the week.
const ALWAYS_BLOCKED: [&str; 2] = ["11:30", "11:50"];

/// Morning band reserved for internal use on Mondays and Thursdays,
/// inclusive on both ends, compared by minute value.
const MORNING_BAND_START: u32 = 9 * 60 + 15;
const MORNING_BAND_END: u32 = 11 * 60 + 30;

/// Whether clinic policy blocks the given cell. Total: malformed dates are
/// treated as blocked, since a cell we cannot place on the calendar must
/// not present itself as bookable.
pub fn is_blocked(date_iso: &str, slot: &str) -> bool {
    let Ok(date) = NaiveDate::parse_from_str(date_iso, "%Y-%m-%d") else {
        return true;
    };
    if date.weekday() == Weekday::Fri {
        return true;
    }
    let slot = slots::normalize(slot);
    if ALWAYS_BLOCKED.contains(&slot.as_str()) {
        return true;
    }
    if matches!(date.weekday(), Weekday::Mon | Weekday::Thu) {
        if let Some(minutes) = slots::minutes_of(&slot) {
            if (MORNING_BAND_START..=MORNING_BAND_END).contains(&minutes) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::slots::TIME_SLOTS;

    // 2025-11-10 is a Monday; the rest of that week follows.
    const MONDAY: &str = "2025-11-10";
    const TUESDAY: &str = "2025-11-11";
    const THURSDAY: &str = "2025-11-13";
    const FRIDAY: &str = "2025-11-14";

    #[test]
    fn fridays_are_fully_blocked() {
        for slot in TIME_SLOTS {
            assert!(is_blocked(FRIDAY, slot), "expected {slot} blocked on Friday");
        }
    }

    #[test]
    fn buffer_slots_are_blocked_every_day() {
        for day in [MONDAY, TUESDAY, THURSDAY] {
            assert!(is_blocked(day, "11:30"));
            assert!(is_blocked(day, "11:50"));
        }
    }

    #[test]
    fn monday_and_thursday_mornings_are_reserved() {
        assert!(is_blocked(MONDAY, "10:00"));
        assert!(is_blocked(THURSDAY, "10:00"));
        assert!(is_blocked(MONDAY, "9:15"));
        assert!(is_blocked(MONDAY, "11:30"));
        // Afternoons stay open
        assert!(!is_blocked(MONDAY, "16:15"));
        assert!(!is_blocked(THURSDAY, "19:15"));
    }

    #[test]
    fn other_weekday_mornings_are_open() {
        assert!(!is_blocked(TUESDAY, "10:00"));
        assert!(!is_blocked(TUESDAY, "9:15"));
        assert!(!is_blocked("2025-11-12", "10:00"));
    }

    #[test]
    fn it_accepts_a_leading_zero_in_the_slot() {
        assert!(is_blocked(MONDAY, "09:15"));
        assert!(!is_blocked(TUESDAY, "09:15"));
    }

    #[test]
    fn malformed_dates_fail_closed() {
        assert!(is_blocked("not-a-date", "10:00"));
        assert!(is_blocked("", "16:15"));
        assert!(is_blocked("2025-13-40", "10:00"));
    }
}
