#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Cafe map application: session orchestration over the filter engine.
//!
//! Loads the cafe sheet once at startup, holds the normalized record set
//! read-only for the rest of the session, and exposes the user-facing
//! actions (apply, reset, search-this-area, show-all) plus the map and
//! control events that feed them. Rendering is external; the app's egress
//! is the marker payload in [`markers`].

pub mod events;
pub mod geolocate;
pub mod markers;
pub mod session;

use cafe_map_cafe_models::CafeRecord;
use cafe_map_normalize::Normalizer;
use cafe_map_sheet::{SheetConfig, SheetError};

pub use session::MapSession;

/// Errors that can occur during application startup.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Fetching or parsing the sheet failed. Fatal; there is no retry.
    #[error("Sheet load failed: {0}")]
    Sheet(#[from] SheetError),

    /// Writing the marker output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the marker output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fetches the sheet and normalizes every row into the session's working
/// set. Runs once per page load; the result is read-only afterwards.
///
/// # Errors
///
/// Returns [`AppError::Sheet`] when the fetch or CSV parse fails.
pub async fn load_cafes(
    client: &reqwest::Client,
    config: &SheetConfig,
    normalizer: &Normalizer,
) -> Result<Vec<CafeRecord>, AppError> {
    let rows = cafe_map_sheet::fetch_rows(client, config).await?;
    Ok(normalizer.normalize_all(&rows))
}
