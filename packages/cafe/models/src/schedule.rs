//! Weekly opening-hours payload.
//!
//! The spreadsheet stores opening hours as a JSON object keyed by
//! three-letter lowercase weekday abbreviations:
//!
//! ```json
//! { "openHour": { "mon": ["09:00", "18:00"] }, "lastOrder": "17:30" }
//! ```
//!
//! Times are zero-padded 24-hour "HH:MM" strings. Days without an entry
//! (or with a partial pair) are treated as closed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Weekday keys in the payload, indexed `0 = Sunday .. 6 = Saturday`.
pub const WEEKDAY_KEYS: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// Per-weekday open/close pairs plus an optional last-order time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    /// Weekday key -> `[open, close]` "HH:MM" pair. Entries may be absent
    /// or partial; both are treated as closed for that day.
    #[serde(default)]
    pub open_hour: BTreeMap<String, Vec<String>>,
    /// Kitchen last-order time, when the cafe publishes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_order: Option<String>,
}

impl WeeklySchedule {
    /// Returns the `(open, close)` pair for a weekday key, or `None` when
    /// the day has no entry or either bound is missing/empty.
    #[must_use]
    pub fn hours_for(&self, weekday_key: &str) -> Option<(&str, &str)> {
        let pair = self.open_hour.get(weekday_key)?;
        let open = pair.first().map(String::as_str).filter(|s| !s.is_empty())?;
        let close = pair.get(1).map(String::as_str).filter(|s| !s.is_empty())?;
        Some((open, close))
    }
}
