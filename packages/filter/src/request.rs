//! The immutable filter request snapshot.

use std::collections::BTreeSet;

use cafe_map_cafe_models::{ParkingTag, SizeTag, TableHeight, TableShape};

/// Default lower bound of the price slider, in won.
pub const PRICE_MIN_DEFAULT: f64 = 0.0;
/// Default upper bound of the price slider, in won.
pub const PRICE_MAX_DEFAULT: f64 = 15_000.0;

/// A snapshot of every filter control, taken at apply time.
///
/// Criteria with an empty selection (or an untouched toggle) are vacuously
/// true and do not constrain the result. The snapshot is never stored
/// beyond the evaluation it was taken for.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRequest {
    /// Only cafes within 2 km of the base position.
    pub near_me: bool,
    /// Wheelchair/stroller access required.
    pub wheelchair: bool,
    /// Elevator required.
    pub elevator: bool,
    /// Pets allowed required.
    pub pet_allowed: bool,
    /// Kids allowed required.
    pub kids_allowed: bool,
    /// Wifi required.
    pub wifi: bool,
    /// Power outlets required.
    pub outlet: bool,
    /// Dessert menu required.
    pub dessert: bool,
    /// Only cafes open at evaluation time.
    pub open_now: bool,
    /// Only cafes visited/updated in the current calendar year.
    pub updated_this_year: bool,
    /// Only cafes with free parking; suppresses tag-based parking matching.
    pub free_parking_only: bool,
    /// Selected size tiers.
    pub size_tags: BTreeSet<SizeTag>,
    /// Selected parking tags (any-of).
    pub parking_tags: BTreeSet<ParkingTag>,
    /// Selected table shapes (any-of).
    pub table_shapes: BTreeSet<TableShape>,
    /// Selected table height buckets (any-of).
    pub table_heights: BTreeSet<TableHeight>,
    /// Inclusive lower price bound in won.
    pub price_min: f64,
    /// Inclusive upper price bound in won.
    pub price_max: f64,
    /// Exact-match restroom cleanliness selection.
    pub toilet_cleaning: Option<String>,
    /// Exact-match restroom location selection.
    pub toilet_location: Option<String>,
}

impl Default for FilterRequest {
    fn default() -> Self {
        Self {
            near_me: false,
            wheelchair: false,
            elevator: false,
            pet_allowed: false,
            kids_allowed: false,
            wifi: false,
            outlet: false,
            dessert: false,
            open_now: false,
            updated_this_year: false,
            free_parking_only: false,
            size_tags: BTreeSet::new(),
            parking_tags: BTreeSet::new(),
            table_shapes: BTreeSet::new(),
            table_heights: BTreeSet::new(),
            price_min: PRICE_MIN_DEFAULT,
            price_max: PRICE_MAX_DEFAULT,
            toilet_cleaning: None,
            toilet_location: None,
        }
    }
}
