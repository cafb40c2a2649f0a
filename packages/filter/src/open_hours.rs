//! Wall-clock evaluation of a weekly schedule.

use cafe_map_cafe_models::WeeklySchedule;
use cafe_map_cafe_models::schedule::WEEKDAY_KEYS;
use chrono::{Datelike as _, NaiveDateTime};

/// Whether the schedule says the cafe is open at `now` (evaluation-local
/// wall-clock time).
///
/// Looks up the weekday's `[open, close]` pair and compares the current
/// "HH:MM" string lexically, inclusive on both ends. The lexical
/// comparison is valid only because times are zero-padded 24-hour
/// strings; a malformed bound fails the shape check and the day counts as
/// closed. Overnight ranges (open > close) never evaluate true — a known
/// limitation carried over from the dataset's conventions.
#[must_use]
pub fn is_open_at(schedule: &WeeklySchedule, now: NaiveDateTime) -> bool {
    let key = WEEKDAY_KEYS[now.weekday().num_days_from_sunday() as usize];
    let Some((open, close)) = schedule.hours_for(key) else {
        return false;
    };
    if !is_hhmm(open) || !is_hhmm(close) {
        return false;
    }
    let current = now.format("%H:%M").to_string();
    open <= current.as_str() && current.as_str() <= close
}

/// Shape check for zero-padded 24-hour "HH:MM" strings.
fn is_hhmm(time: &str) -> bool {
    let bytes = time.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit())
}
