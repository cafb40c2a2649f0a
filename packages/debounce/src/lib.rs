#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Coalescing trailing-edge timer.
//!
//! Rapid-fire triggers (price-slider drags, map idle events) must collapse
//! into a single evaluation without ever dropping the final event of a
//! burst. [`Debouncer::call`] schedules the action after a quiet period and
//! reschedules on every repeat call; only the last scheduled action runs.

use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Trailing-edge debouncer.
///
/// Each [`Debouncer::call`] cancels the previously pending action and
/// schedules the new one `delay` in the future, so a burst of calls runs
/// exactly one action — the last — once the burst quiesces.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedules `action` to run after the quiet period, superseding any
    /// previously pending action.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn call<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        });

        let mut pending = self.pending.lock().expect("debouncer mutex poisoned");
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
            log::trace!("Superseded pending action, rescheduled {delay:?} out");
        }
    }

    /// Cancels the pending action, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn cancel(&self) {
        if let Some(pending) = self.pending.lock().expect("debouncer mutex poisoned").take() {
            pending.abort();
            log::trace!("Cancelled pending action");
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
