#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Canonical cafe record types and the filter tag taxonomy.
//!
//! This crate defines the fixed-shape [`CafeRecord`] that every spreadsheet
//! row is normalized into, plus the tag enums (size, parking, table shape
//! and height) that the filter panel selects from. The tag labels match the
//! working dataset's Korean vocabulary; parsing and display both go through
//! those labels.

pub mod schedule;
pub mod tags;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use schedule::WeeklySchedule;
pub use tags::{ParkingTag, SizeTag, TableHeight, TableShape};

/// A cafe normalized to the canonical schema.
///
/// Constructed once per raw row at load time and never mutated afterwards.
/// Free-text amenity fields keep their source text — whether a value counts
/// as affirmative is a filtering concern, not a data-model one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CafeRecord {
    /// Opaque identifier from the source row, if it carried one.
    pub id: Option<String>,
    /// Display name of the cafe.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Latitude (WGS84). Always paired with `lng`: either both are finite
    /// numbers or both are `None`.
    pub lat: Option<f64>,
    /// Longitude (WGS84). See `lat` for the pairing invariant.
    pub lng: Option<f64>,
    /// Floor area in pyeong, when the source row had a parseable number.
    pub pyeong_size: Option<f64>,
    /// Explicit size tag from the source, if present. When absent the
    /// effective tag is derived from `pyeong_size`.
    pub size_tag: Option<SizeTag>,
    /// Free-text parking category (e.g. "자체주차장 지하").
    pub parking_type: Option<String>,
    /// Free-text parking fee description, used to infer free/paid.
    pub parking_fee: Option<String>,
    /// Wheelchair/stroller accessibility, free text.
    pub wheelchair_access: Option<String>,
    /// Elevator availability, free text.
    pub elevator: Option<String>,
    /// Whether pets are allowed, free text.
    pub pet_allowed: Option<String>,
    /// Whether kids are allowed, free text.
    pub kids_allowed: Option<String>,
    /// Wifi availability, free text.
    pub wifi: Option<String>,
    /// Power outlet availability, free text.
    pub outlet: Option<String>,
    /// Dessert availability, free text.
    pub dessert: Option<String>,
    /// Table shape description, matched by substring against [`TableShape`]
    /// labels.
    pub table_shape: Option<String>,
    /// Table height description, bucketed via [`TableHeight::from_text`].
    pub table_height: Option<String>,
    /// Base (americano) price in won.
    pub price: Option<f64>,
    /// Restroom cleanliness category, matched by exact string equality.
    pub toilet_cleaning: Option<String>,
    /// Restroom location category (indoor/outdoor), exact match.
    pub toilet_location: Option<String>,
    /// Weekly opening hours. `None` when the source cell was missing or
    /// failed to parse; such records never match "open now".
    pub schedule: Option<WeeklySchedule>,
    /// Date of the last visit/update. `None` when missing or unparseable;
    /// such records never match "updated this year".
    pub last_visited: Option<NaiveDate>,
}

impl CafeRecord {
    /// Returns `(lat, lng)` when both coordinates are present and finite.
    ///
    /// Records without coordinates are excluded from every spatial
    /// operation and are never handed to the marker renderer.
    #[must_use]
    pub fn coords(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some((lat, lng)),
            _ => None,
        }
    }

    /// The size tag used for filtering: the explicit tag when present,
    /// otherwise derived from `pyeong_size` via the fixed thresholds.
    #[must_use]
    pub fn effective_size_tag(&self) -> Option<SizeTag> {
        self.size_tag
            .or_else(|| self.pyeong_size.map(SizeTag::from_pyeong))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CafeRecord {
        CafeRecord {
            id: None,
            name: "테스트카페".to_string(),
            address: String::new(),
            lat: Some(37.5665),
            lng: Some(126.978),
            pyeong_size: None,
            size_tag: None,
            parking_type: None,
            parking_fee: None,
            wheelchair_access: None,
            elevator: None,
            pet_allowed: None,
            kids_allowed: None,
            wifi: None,
            outlet: None,
            dessert: None,
            table_shape: None,
            table_height: None,
            price: None,
            toilet_cleaning: None,
            toilet_location: None,
            schedule: None,
            last_visited: None,
        }
    }

    #[test]
    fn coords_requires_both_axes() {
        let mut r = record();
        assert_eq!(r.coords(), Some((37.5665, 126.978)));

        r.lng = None;
        assert_eq!(r.coords(), None);

        r.lng = Some(f64::NAN);
        assert_eq!(r.coords(), None);
    }

    #[test]
    fn explicit_size_tag_wins_over_pyeong() {
        let mut r = record();
        r.size_tag = Some(SizeTag::ExtraLarge);
        r.pyeong_size = Some(5.0);
        assert_eq!(r.effective_size_tag(), Some(SizeTag::ExtraLarge));
    }

    #[test]
    fn size_tag_derived_when_absent() {
        let mut r = record();
        r.pyeong_size = Some(25.0);
        assert_eq!(r.effective_size_tag(), Some(SizeTag::Medium));

        r.pyeong_size = None;
        assert_eq!(r.effective_size_tag(), None);
    }
}
