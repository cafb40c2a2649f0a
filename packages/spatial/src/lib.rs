#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Viewport geometry for the cafe map.
//!
//! Provides the axis-aligned [`ViewportBounds`] rectangle used for spatial
//! filtering, the haversine great-circle distance, and the
//! [`ViewportTracker`] that reconciles the live map viewport against the
//! last committed search area to drive the "search this area" affordance.

pub mod tracker;

use geo::{Coord, Rect, coord};

pub use tracker::ViewportTracker;

/// Mean earth radius in meters for the spherical-earth approximation.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// An axis-aligned lat/lng rectangle.
///
/// Stored as a [`geo::Rect`] with `x = lng`, `y = lat` following the geo
/// crate's coordinate convention. Represents either the currently rendered
/// map region or the last region a search was committed against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    rect: Rect<f64>,
}

impl ViewportBounds {
    /// Creates bounds from southwest and northeast corners.
    ///
    /// Corners are normalized, so a swapped pair still yields a valid
    /// rectangle.
    #[must_use]
    pub fn new(sw_lat: f64, sw_lng: f64, ne_lat: f64, ne_lng: f64) -> Self {
        Self {
            rect: Rect::new(
                coord! { x: sw_lng, y: sw_lat },
                coord! { x: ne_lng, y: ne_lat },
            ),
        }
    }

    /// Whether the point lies within the rectangle, inclusive of edges.
    #[must_use]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        let min = self.rect.min();
        let max = self.rect.max();
        lat >= min.y && lat <= max.y && lng >= min.x && lng <= max.x
    }

    /// Center of the rectangle as `(lat, lng)`.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        let c: Coord<f64> = self.rect.center();
        (c.y, c.x)
    }

    /// Whether all four edges match `other` within `tolerance` degrees.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        let (a_min, a_max) = (self.rect.min(), self.rect.max());
        let (b_min, b_max) = (other.rect.min(), other.rect.max());
        (a_min.x - b_min.x).abs() <= tolerance
            && (a_min.y - b_min.y).abs() <= tolerance
            && (a_max.x - b_max.x).abs() <= tolerance
            && (a_max.y - b_max.y).abs() <= tolerance
    }

    /// Southwest corner as `(lat, lng)`.
    #[must_use]
    pub fn southwest(&self) -> (f64, f64) {
        let min = self.rect.min();
        (min.y, min.x)
    }

    /// Northeast corner as `(lat, lng)`.
    #[must_use]
    pub fn northeast(&self) -> (f64, f64) {
        let max = self.rect.max();
        (max.y, max.x)
    }
}

/// Great-circle distance in meters between two `(lat, lng)` points in
/// degrees, via the haversine formula on a spherical earth.
#[must_use]
pub fn haversine_distance_m(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    EARTH_RADIUS_M * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}
