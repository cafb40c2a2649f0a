//! Filter state reading.
//!
//! The real control surface is external (DOM checkboxes, chip groups, a
//! dual-handle price slider). [`FilterControls`] is the explicit seam
//! standing in for it, so the reader and everything downstream are
//! constructible and testable without a rendering surface. [`PanelState`]
//! is the in-memory implementation the session uses.

use std::collections::BTreeSet;

use cafe_map_cafe_models::{ParkingTag, SizeTag, TableHeight, TableShape};
use strum_macros::{AsRefStr, Display};

use crate::request::{FilterRequest, PRICE_MAX_DEFAULT, PRICE_MIN_DEFAULT};

/// The boolean filter toggles (checkboxes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, AsRefStr)]
pub enum Toggle {
    /// Within 2 km of the base position.
    NearMe,
    /// Wheelchair/stroller access.
    Wheelchair,
    /// Elevator available.
    Elevator,
    /// Pets allowed.
    PetAllowed,
    /// Kids allowed.
    KidsAllowed,
    /// Wifi available.
    Wifi,
    /// Power outlets available.
    Outlet,
    /// Dessert menu available.
    Dessert,
    /// Open at evaluation time.
    OpenNow,
    /// Visited/updated this calendar year.
    UpdatedThisYear,
    /// Free parking only.
    FreeParkingOnly,
}

/// Read-only view over the filter panel's controls.
///
/// Implementations must not mutate any control state as a side effect of
/// reading it.
pub trait FilterControls {
    /// Whether a toggle is checked.
    fn toggle(&self, toggle: Toggle) -> bool;
    /// Active size chips.
    fn size_tags(&self) -> BTreeSet<SizeTag>;
    /// Active parking chips.
    fn parking_tags(&self) -> BTreeSet<ParkingTag>;
    /// Active table shape chips.
    fn table_shapes(&self) -> BTreeSet<TableShape>;
    /// Active table height chips.
    fn table_heights(&self) -> BTreeSet<TableHeight>;
    /// Current `(min, max)` of the price slider.
    fn price_range(&self) -> (f64, f64);
    /// Selected restroom cleanliness category, if any.
    fn toilet_cleaning(&self) -> Option<String>;
    /// Selected restroom location category, if any.
    fn toilet_location(&self) -> Option<String>;
}

/// Snapshots the full control set into an immutable [`FilterRequest`].
///
/// Re-reads every control on every call; nothing is cached beyond the
/// returned snapshot.
#[must_use]
pub fn snapshot(controls: &impl FilterControls) -> FilterRequest {
    let (price_min, price_max) = controls.price_range();
    FilterRequest {
        near_me: controls.toggle(Toggle::NearMe),
        wheelchair: controls.toggle(Toggle::Wheelchair),
        elevator: controls.toggle(Toggle::Elevator),
        pet_allowed: controls.toggle(Toggle::PetAllowed),
        kids_allowed: controls.toggle(Toggle::KidsAllowed),
        wifi: controls.toggle(Toggle::Wifi),
        outlet: controls.toggle(Toggle::Outlet),
        dessert: controls.toggle(Toggle::Dessert),
        open_now: controls.toggle(Toggle::OpenNow),
        updated_this_year: controls.toggle(Toggle::UpdatedThisYear),
        free_parking_only: controls.toggle(Toggle::FreeParkingOnly),
        size_tags: controls.size_tags(),
        parking_tags: controls.parking_tags(),
        table_shapes: controls.table_shapes(),
        table_heights: controls.table_heights(),
        price_min,
        price_max,
        toilet_cleaning: controls.toilet_cleaning(),
        toilet_location: controls.toilet_location(),
    }
}

/// In-memory filter panel state.
#[derive(Debug, Clone)]
pub struct PanelState {
    toggles: BTreeSet<Toggle>,
    size_tags: BTreeSet<SizeTag>,
    parking_tags: BTreeSet<ParkingTag>,
    table_shapes: BTreeSet<TableShape>,
    table_heights: BTreeSet<TableHeight>,
    price_min: f64,
    price_max: f64,
    toilet_cleaning: Option<String>,
    toilet_location: Option<String>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            toggles: BTreeSet::new(),
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

impl PanelState {
    /// Creates a panel with everything unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks or unchecks a toggle.
    pub fn set_toggle(&mut self, toggle: Toggle, checked: bool) {
        if checked {
            self.toggles.insert(toggle);
        } else {
            self.toggles.remove(&toggle);
        }
    }

    /// Activates or deactivates a size chip.
    pub fn set_size_tag(&mut self, tag: SizeTag, active: bool) {
        toggle_chip(&mut self.size_tags, tag, active);
    }

    /// Activates or deactivates a parking chip.
    pub fn set_parking_tag(&mut self, tag: ParkingTag, active: bool) {
        toggle_chip(&mut self.parking_tags, tag, active);
    }

    /// Activates or deactivates a table shape chip.
    pub fn set_table_shape(&mut self, shape: TableShape, active: bool) {
        toggle_chip(&mut self.table_shapes, shape, active);
    }

    /// Activates or deactivates a table height chip.
    pub fn set_table_height(&mut self, height: TableHeight, active: bool) {
        toggle_chip(&mut self.table_heights, height, active);
    }

    /// Sets the price slider. When the handles cross, the upper handle is
    /// dragged along with the lower one.
    pub fn set_price_range(&mut self, min: f64, max: f64) {
        self.price_min = min;
        self.price_max = max.max(min);
    }

    /// Sets the restroom cleanliness selection (`None` clears it).
    pub fn set_toilet_cleaning(&mut self, selection: Option<&str>) {
        self.toilet_cleaning = selection.map(str::to_owned);
    }

    /// Sets the restroom location selection (`None` clears it).
    pub fn set_toilet_location(&mut self, selection: Option<&str>) {
        self.toilet_location = selection.map(str::to_owned);
    }

    /// Restores every control to its default: toggles off, chips cleared,
    /// price range widened to the full span, selects cleared.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn toggle_chip<T: Ord>(set: &mut BTreeSet<T>, value: T, active: bool) {
    if active {
        set.insert(value);
    } else {
        set.remove(&value);
    }
}

impl FilterControls for PanelState {
    fn toggle(&self, toggle: Toggle) -> bool {
        self.toggles.contains(&toggle)
    }

    fn size_tags(&self) -> BTreeSet<SizeTag> {
        self.size_tags.clone()
    }

    fn parking_tags(&self) -> BTreeSet<ParkingTag> {
        self.parking_tags.clone()
    }

    fn table_shapes(&self) -> BTreeSet<TableShape> {
        self.table_shapes.clone()
    }

    fn table_heights(&self) -> BTreeSet<TableHeight> {
        self.table_heights.clone()
    }

    fn price_range(&self) -> (f64, f64) {
        (self.price_min, self.price_max)
    }

    fn toilet_cleaning(&self) -> Option<String> {
        self.toilet_cleaning.clone()
    }

    fn toilet_location(&self) -> Option<String> {
        self.toilet_location.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reads_panel_state() {
        let mut panel = PanelState::new();
        panel.set_toggle(Toggle::OpenNow, true);
        panel.set_size_tag(SizeTag::Small, true);
        panel.set_price_range(3000.0, 8000.0);
        panel.set_toilet_cleaning(Some("최상"));

        let request = snapshot(&panel);
        assert!(request.open_now);
        assert!(!request.wifi);
        assert!(request.size_tags.contains(&SizeTag::Small));
        assert!((request.price_min - 3000.0).abs() < f64::EPSILON);
        assert_eq!(request.toilet_cleaning.as_deref(), Some("최상"));

        // Reading is side-effect free: a second snapshot is identical.
        assert_eq!(snapshot(&panel), request);
    }

    #[test]
    fn crossed_price_handles_drag_the_upper_one() {
        let mut panel = PanelState::new();
        panel.set_price_range(9000.0, 5000.0);
        assert_eq!(panel.price_range(), (9000.0, 9000.0));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut panel = PanelState::new();
        panel.set_toggle(Toggle::Wifi, true);
        panel.set_parking_tag(ParkingTag::Free, true);
        panel.set_price_range(1000.0, 2000.0);
        panel.set_toilet_location(Some("실내"));

        panel.reset();
        assert_eq!(snapshot(&panel), FilterRequest::default());
    }

    #[test]
    fn chips_toggle_on_and_off() {
        let mut panel = PanelState::new();
        panel.set_table_shape(TableShape::Round, true);
        assert!(panel.table_shapes().contains(&TableShape::Round));
        panel.set_table_shape(TableShape::Round, false);
        assert!(panel.table_shapes().is_empty());
    }
}
