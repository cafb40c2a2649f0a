//! Marker payloads for the external map renderer.

use cafe_map_cafe_models::CafeRecord;
use serde::Serialize;

/// One map marker. `lat`/`lng` place the pin; `detail` carries the full
/// record for the info panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerPayload {
    /// Latitude of the pin (always present, unlike the record's).
    pub lat: f64,
    /// Longitude of the pin.
    pub lng: f64,
    /// Display name for the marker label.
    pub name: String,
    /// Street address shown in the marker tooltip.
    pub address: String,
    /// Full record backing the detail view.
    pub detail: CafeRecord,
}

/// Converts filtered records into marker payloads. Records without usable
/// coordinates produce no marker.
#[must_use]
pub fn to_markers(records: &[CafeRecord]) -> Vec<MarkerPayload> {
    records
        .iter()
        .filter_map(|record| {
            let (lat, lng) = record.coords()?;
            Some(MarkerPayload {
                lat,
                lng,
                name: record.name.clone(),
                address: record.address.clone(),
                detail: record.clone(),
            })
        })
        .collect()
}
