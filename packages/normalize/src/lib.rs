#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Normalizes raw sheet rows into canonical [`CafeRecord`] values.
//!
//! Raw rows are alias-laden and loosely typed; every canonical field is
//! resolved through an ordered alias table (see [`aliases`]) and coerced
//! defensively. Coercion failures yield `None` — never an error, never a
//! default of zero — so one malformed cell or row can never abort the load.
//! After normalization no dynamic key lookup happens anywhere downstream.

pub mod aliases;

use std::str::FromStr as _;

use cafe_map_cafe_models::{CafeRecord, SizeTag, WeeklySchedule};
use cafe_map_sheet::RawRecord;
use chrono::{NaiveDate, NaiveDateTime};

/// Which source axis column carries latitude.
///
/// Some dataset revisions transpose the semantic meaning of the `x`/`y`
/// columns relative to lat/lng, so the mapping is configuration, not an
/// assumption baked into the alias tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisMapping {
    /// `y` is latitude, `x` is longitude (the working dataset).
    #[default]
    YIsLatitude,
    /// `x` is latitude, `y` is longitude (transposed sources).
    XIsLatitude,
}

impl AxisMapping {
    const fn lat_aliases(self) -> &'static [&'static str] {
        match self {
            Self::YIsLatitude => aliases::LAT_FROM_Y,
            Self::XIsLatitude => aliases::LAT_FROM_X,
        }
    }

    const fn lng_aliases(self) -> &'static [&'static str] {
        match self {
            Self::YIsLatitude => aliases::LNG_FROM_X,
            Self::XIsLatitude => aliases::LNG_FROM_Y,
        }
    }
}

/// Converts raw sheet rows into canonical cafe records.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    axes: AxisMapping,
}

impl Normalizer {
    /// Creates a normalizer with the given axis mapping.
    #[must_use]
    pub const fn new(axes: AxisMapping) -> Self {
        Self { axes }
    }

    /// Normalizes every row. Rows are independent; a malformed row yields
    /// a sparse record rather than affecting its neighbors.
    #[must_use]
    pub fn normalize_all(&self, rows: &[RawRecord]) -> Vec<CafeRecord> {
        let records: Vec<CafeRecord> = rows.iter().map(|row| self.normalize(row)).collect();
        let with_geo = records.iter().filter(|r| r.coords().is_some()).count();
        log::info!(
            "Normalized {} cafe records ({} with coordinates)",
            records.len(),
            with_geo
        );
        records
    }

    /// Normalizes a single raw row into a [`CafeRecord`].
    ///
    /// Enforces the geo invariant here: if either coordinate is missing or
    /// non-finite, both come out as `None`.
    #[must_use]
    pub fn normalize(&self, raw: &RawRecord) -> CafeRecord {
        let mut lat = first_value(raw, self.axes.lat_aliases()).and_then(parse_number);
        let mut lng = first_value(raw, self.axes.lng_aliases()).and_then(parse_number);
        if lat.is_none() || lng.is_none() {
            if lat.is_some() != lng.is_some() {
                log::debug!(
                    "Dropping lone coordinate for '{}'",
                    first_value(raw, aliases::NAME).unwrap_or("<unnamed>")
                );
            }
            lat = None;
            lng = None;
        }

        CafeRecord {
            id: owned(raw, aliases::ID),
            name: owned(raw, aliases::NAME).unwrap_or_default(),
            address: owned(raw, aliases::ADDRESS).unwrap_or_default(),
            lat,
            lng,
            pyeong_size: first_value(raw, aliases::PYEONG_SIZE).and_then(parse_number),
            size_tag: first_value(raw, aliases::SIZE_TAG)
                .and_then(|s| SizeTag::from_str(s).ok()),
            parking_type: owned(raw, aliases::PARKING_TYPE),
            parking_fee: owned(raw, aliases::PARKING_FEE),
            wheelchair_access: owned(raw, aliases::WHEELCHAIR_ACCESS),
            elevator: owned(raw, aliases::ELEVATOR),
            pet_allowed: owned(raw, aliases::PET_ALLOWED),
            kids_allowed: owned(raw, aliases::KIDS_ALLOWED),
            wifi: owned(raw, aliases::WIFI),
            outlet: owned(raw, aliases::OUTLET),
            dessert: owned(raw, aliases::DESSERT),
            table_shape: owned(raw, aliases::TABLE_SHAPE),
            table_height: owned(raw, aliases::TABLE_HEIGHT),
            price: first_value(raw, aliases::PRICE).and_then(parse_number),
            toilet_cleaning: owned(raw, aliases::TOILET_CLEANING),
            toilet_location: owned(raw, aliases::TOILET_LOCATION),
            schedule: first_value(raw, aliases::SCHEDULE).and_then(parse_schedule),
            last_visited: first_value(raw, aliases::LAST_VISITED).and_then(parse_date),
        }
    }
}

/// Resolves the first non-empty value among the aliases, trimmed.
fn first_value<'a>(raw: &'a RawRecord, aliases: &[&str]) -> Option<&'a str> {
    aliases.iter().find_map(|key| {
        raw.get(*key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    })
}

fn owned(raw: &RawRecord, aliases: &[&str]) -> Option<String> {
    first_value(raw, aliases).map(str::to_owned)
}

/// Coerces loosely formatted numeric text ("1,234원", " 37.5 ") to a finite
/// number by stripping everything except digits, `.` and `-`. Returns
/// `None` on failure — never zero.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses the opening-hours cell, a JSON-encoded [`WeeklySchedule`].
/// Returns `None` on any parse failure.
#[must_use]
pub fn parse_schedule(text: &str) -> Option<WeeklySchedule> {
    serde_json::from_str(text).ok()
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d"];

/// Parses a freshness date cell against the formats the sheet has used
/// over time. Returns `None` when nothing matches.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    // Some rows carry a full ISO timestamp.
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}
