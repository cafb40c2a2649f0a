//! Bridges bursty UI events into session actions.
//!
//! Map idle events and price-slider drags fire far faster than we want to
//! re-evaluate, so both go through a [`Debouncer`]; the trailing event of a
//! burst always lands. Everything else forwards synchronously.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use cafe_map_debounce::Debouncer;
use cafe_map_spatial::ViewportBounds;

use crate::session::MapSession;

/// Quiet period before a settled viewport is recorded.
pub const IDLE_DEBOUNCE_MS: u64 = 200;

/// Quiet period before a price-slider drag triggers re-evaluation.
pub const PRICE_DEBOUNCE_MS: u64 = 80;

/// Shared-session event dispatcher.
pub struct EventBridge {
    session: Arc<Mutex<MapSession>>,
    idle: Debouncer,
    price: Debouncer,
}

impl EventBridge {
    /// Wraps a session for concurrent event dispatch.
    #[must_use]
    pub fn new(session: MapSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            idle: Debouncer::new(Duration::from_millis(IDLE_DEBOUNCE_MS)),
            price: Debouncer::new(Duration::from_millis(PRICE_DEBOUNCE_MS)),
        }
    }

    /// Locks the session for direct access (apply, reset, panel edits).
    ///
    /// # Panics
    ///
    /// Panics if the session mutex is poisoned.
    pub fn session(&self) -> MutexGuard<'_, MapSession> {
        self.session.lock().expect("session mutex poisoned")
    }

    /// Map started panning or zooming. Forwarded immediately so the moved
    /// flag is never missed, even if the idle event is still in flight.
    pub fn map_move_started(&self) {
        self.session().on_move_start();
    }

    /// Map idle with a new viewport. Debounced; only the viewport the map
    /// finally settles on is recorded.
    pub fn map_idle(&self, bounds: ViewportBounds) {
        let session = Arc::clone(&self.session);
        self.idle.call(move || {
            if let Ok(mut session) = session.lock() {
                session.on_map_idle(bounds);
            }
        });
    }

    /// Price-slider drag. The range lands on the panel immediately so the
    /// controls never lag the handle; the re-evaluation is debounced.
    pub fn price_changed(&self, min: f64, max: f64) {
        self.session().panel_mut().set_price_range(min, max);
        let session = Arc::clone(&self.session);
        self.price.call(move || {
            if let Ok(mut session) = session.lock() {
                session.apply_filters();
            }
        });
    }
}
