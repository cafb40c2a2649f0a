//! The in-memory map session.
//!
//! Owns the working record set (read-only after load), the filter panel
//! state, the viewport tracker, and the currently filtered subset. The
//! filtered collection is fully replaced on each evaluation, never patched
//! in place.

use cafe_map_cafe_models::CafeRecord;
use cafe_map_filter::{EvalContext, PanelState, all_in_bounds, filter_records, snapshot};
use cafe_map_spatial::{ViewportBounds, ViewportTracker};
use chrono::Local;

use crate::markers::{MarkerPayload, to_markers};

/// One user's session against the cafe map.
#[derive(Debug)]
pub struct MapSession {
    cafes: Vec<CafeRecord>,
    filtered: Vec<CafeRecord>,
    panel: PanelState,
    tracker: ViewportTracker,
    base_position: Option<(f64, f64)>,
}

impl MapSession {
    /// Creates a session over a loaded record set. `base_position` is the
    /// geolocated user position (or `None` when geolocation failed), used
    /// by the near-me filter.
    #[must_use]
    pub fn new(cafes: Vec<CafeRecord>, base_position: Option<(f64, f64)>) -> Self {
        Self {
            cafes,
            filtered: Vec::new(),
            panel: PanelState::new(),
            tracker: ViewportTracker::new(),
            base_position,
        }
    }

    /// Mutable access to the filter panel controls.
    pub const fn panel_mut(&mut self) -> &mut PanelState {
        &mut self.panel
    }

    /// Opens the filter panel, suppressing the re-search affordance.
    pub const fn open_panel(&mut self) {
        self.tracker.set_panel_open(true);
    }

    /// Closes the filter panel.
    pub const fn close_panel(&mut self) {
        self.tracker.set_panel_open(false);
    }

    /// Map started panning or zooming.
    pub const fn on_move_start(&mut self) {
        self.tracker.note_movement();
    }

    /// Map settled on a new viewport.
    pub const fn on_map_idle(&mut self, bounds: ViewportBounds) {
        self.tracker.set_live(bounds);
    }

    /// Whether the "search this area" affordance should be shown.
    #[must_use]
    pub fn should_offer_research(&self) -> bool {
        self.tracker.should_offer_research()
    }

    /// The apply action: snapshots the panel, evaluates against the active
    /// search area, replaces the filtered set, and closes the panel.
    pub fn apply_filters(&mut self) {
        let request = snapshot(&self.panel);
        let ctx = EvalContext {
            now: Local::now().naive_local(),
            base_position: self.base_position,
        };
        self.filtered = filter_records(&self.cafes, &request, self.tracker.committed(), &ctx)
            .into_iter()
            .cloned()
            .collect();
        self.close_panel();

        let (matched, total) = self.stats();
        log::info!("Filter applied: {matched}/{total} cafes match");
    }

    /// The reset action: restores every control to its default and
    /// re-evaluates.
    pub fn reset_filters(&mut self) {
        self.panel.reset();
        self.apply_filters();
    }

    /// The "search this area" action: commits the live viewport as the
    /// active search area and re-evaluates against it.
    pub fn search_this_area(&mut self) {
        if self.tracker.commit().is_some() {
            self.apply_filters();
        } else {
            log::warn!("Search requested before the map reported a viewport");
        }
    }

    /// The "show all in this area" action: bypasses every non-spatial
    /// criterion and shows everything within the active search area.
    pub fn show_all_in_area(&mut self) {
        self.filtered = all_in_bounds(&self.cafes, self.tracker.committed())
            .into_iter()
            .cloned()
            .collect();
        let (matched, total) = self.stats();
        log::info!("Showing all in area: {matched}/{total}");
    }

    /// `(matched, total)` counts for the stats readout.
    #[must_use]
    pub const fn stats(&self) -> (usize, usize) {
        (self.filtered.len(), self.cafes.len())
    }

    /// The currently filtered records.
    #[must_use]
    pub fn filtered(&self) -> &[CafeRecord] {
        &self.filtered
    }

    /// Marker payloads for the external renderer. Geo-less records are
    /// never included.
    #[must_use]
    pub fn markers(&self) -> Vec<MarkerPayload> {
        to_markers(&self.filtered)
    }
}
