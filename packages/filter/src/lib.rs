#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Filter evaluation engine for the cafe map.
//!
//! The filter panel's control state is snapshotted into an immutable
//! [`FilterRequest`] ([`state`]), which the conjunctive predicate
//! evaluator ([`evaluate`]) applies to the canonical record set together
//! with the active search-area bounds. Free-text matching rules live in
//! [`matching`] and the wall-clock "open now" check in [`open_hours`].

pub mod evaluate;
pub mod matching;
pub mod open_hours;
pub mod request;
pub mod state;

pub use evaluate::{EvalContext, all_in_bounds, filter_records};
pub use request::FilterRequest;
pub use state::{FilterControls, PanelState, Toggle, snapshot};
