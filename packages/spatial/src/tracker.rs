//! Reconciles the live map viewport against the committed search area.
//!
//! The map fires movement events continuously, but a search is only
//! executed when the user commits one. The tracker keeps both rectangles
//! plus a moved-since-commit flag and decides when the visible region has
//! drifted far enough from the committed one to offer a "search this area"
//! action.

use crate::{ViewportBounds, haversine_distance_m};

/// Center drift beyond this distance always warrants a re-search offer.
pub const RESEARCH_DISTANCE_M: f64 = 150.0;

/// Tolerance in degrees when comparing the four rectangle edges.
pub const EDGE_TOLERANCE_DEG: f64 = 1e-9;

/// Tracks the live viewport and the active (committed) search area.
#[derive(Debug, Clone, Default)]
pub struct ViewportTracker {
    live: Option<ViewportBounds>,
    committed: Option<ViewportBounds>,
    moved_since_commit: bool,
    panel_open: bool,
}

impl ViewportTracker {
    /// Creates a tracker with no viewport and no committed search area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that the map started panning or zooming. Cleared only by
    /// [`ViewportTracker::commit`].
    pub const fn note_movement(&mut self) {
        self.moved_since_commit = true;
    }

    /// Updates the live viewport (map idle after pan/zoom).
    pub const fn set_live(&mut self, bounds: ViewportBounds) {
        self.live = Some(bounds);
    }

    /// Records whether the filter panel is open. An open panel suppresses
    /// the re-search affordance.
    pub const fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
    }

    /// The active search area, if one has been committed.
    #[must_use]
    pub const fn committed(&self) -> Option<&ViewportBounds> {
        self.committed.as_ref()
    }

    /// The live viewport, if the map has reported one.
    #[must_use]
    pub const fn live(&self) -> Option<&ViewportBounds> {
        self.live.as_ref()
    }

    /// Commits the live viewport as the active search area and clears the
    /// moved flag. Returns the newly committed bounds, or `None` when the
    /// map has not reported a viewport yet.
    pub fn commit(&mut self) -> Option<ViewportBounds> {
        self.committed = self.live;
        self.moved_since_commit = false;
        if let Some(bounds) = self.committed {
            let (lat, lng) = bounds.center();
            log::debug!("Committed search area centered at ({lat:.4}, {lng:.4})");
        }
        self.committed
    }

    /// Whether to surface the "search this area" affordance.
    ///
    /// True iff the panel is closed, the map has moved since the last
    /// commit, and the live region is stale relative to the committed one:
    /// center drift beyond [`RESEARCH_DISTANCE_M`], or any edge differing
    /// beyond [`EDGE_TOLERANCE_DEG`].
    #[must_use]
    pub fn should_offer_research(&self) -> bool {
        if self.panel_open || !self.moved_since_commit {
            return false;
        }
        match (&self.live, &self.committed) {
            (Some(live), Some(committed)) => {
                let (live_lat, live_lng) = live.center();
                let (com_lat, com_lng) = committed.center();
                let drift = haversine_distance_m(live_lat, live_lng, com_lat, com_lng);
                drift > RESEARCH_DISTANCE_M || !live.approx_eq(committed, EDGE_TOLERANCE_DEG)
            }
            // Moved but never searched: any viewport is stale.
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}
