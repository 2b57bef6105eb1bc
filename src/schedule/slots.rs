//! The fixed catalog of bookable time slots.
//!
//! Catalog order defines adjacency. The morning band runs 9:15 to 11:50 and
//! the afternoon band 16:15 to 19:15; there is no slot in between, so a
//! booking can never span the midday break.

/// All bookable slots for a day, in order. `H:MM`, no leading zero.
pub const TIME_SLOTS: [&str; 17] = [
    "9:15", "9:30", "9:45", "10:00", "10:20", "10:40", "11:00", "11:15", "11:30", "11:50",
    "16:15", "16:45", "17:15", "17:45", "18:15", "18:45", "19:15",
];

/// Index of the first afternoon slot.
const AFTERNOON_START: usize = 10;

/// Strips a single leading zero for display: `"09:30"` becomes `"9:30"`.
/// This is a display normalization rule, not general time parsing.
pub fn normalize(time: &str) -> String {
    match time.strip_prefix('0') {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => time.to_string(),
    }
}

/// Position of `time` in the catalog, accepting a leading zero.
pub fn index_of(time: &str) -> Option<usize> {
    let time = normalize(time);
    TIME_SLOTS.iter().position(|s| *s == time)
}

/// The catalog entry immediately following `time`, or `""` when `time` is
/// the last entry or unknown.
pub fn next_slot(time: &str) -> &'static str {
    match index_of(time) {
        Some(i) if i + 1 < TIME_SLOTS.len() => TIME_SLOTS[i + 1],
        _ => "",
    }
}

/// Lenient `h:mm` / `hh:mm` parse to minutes since midnight.
pub fn minutes_of(time: &str) -> Option<u32> {
    let (hours, minutes) = time.split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// True when `end` is reachable from `start` by repeated next-slot steps
/// without crossing the midday break.
pub fn is_valid_span(start: &str, end: &str) -> bool {
    match (index_of(start), index_of(end)) {
        (Some(s), Some(e)) => {
            s < e && (e < AFTERNOON_START || s >= AFTERNOON_START)
        }
        _ => false,
    }
}
