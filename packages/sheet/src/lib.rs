#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Read-only spreadsheet ingress.
//!
//! Downloads a published Google Sheets tab as CSV and parses it into raw,
//! header-keyed rows. Cells are untyped text at this boundary: absent cells
//! come back as empty strings, headers are trimmed, and no coercion happens
//! here. The sheet is fetched once per session; a fetch failure is a fatal
//! startup error with no retry.

use std::collections::BTreeMap;

/// A raw spreadsheet row keyed by trimmed column header.
pub type RawRecord = BTreeMap<String, String>;

/// Errors that can occur while fetching or parsing the sheet.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The response body was not a usable CSV document.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Identifies the published sheet and tab to load.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Google Sheets document ID.
    pub sheet_id: String,
    /// Tab name within the document.
    pub tab: String,
}

impl SheetConfig {
    /// Default tab name when none is configured.
    pub const DEFAULT_TAB: &str = "cafe_db";

    /// Creates a config for the given document ID and tab.
    #[must_use]
    pub fn new(sheet_id: &str, tab: &str) -> Self {
        Self {
            sheet_id: sheet_id.to_owned(),
            tab: tab.to_owned(),
        }
    }

    /// Builds the gviz CSV export URL for this sheet tab.
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded base URL fails to parse, which cannot happen.
    #[must_use]
    pub fn csv_url(&self) -> reqwest::Url {
        let base = format!(
            "https://docs.google.com/spreadsheets/d/{}/gviz/tq",
            self.sheet_id
        );
        reqwest::Url::parse_with_params(&base, [("tqx", "out:csv"), ("sheet", self.tab.as_str())])
            .expect("static sheet URL must parse")
    }
}

/// Downloads the configured sheet tab and parses every row.
///
/// # Errors
///
/// Returns [`SheetError`] if the download fails, the response is not valid
/// CSV, or the file has no header row.
pub async fn fetch_rows(
    client: &reqwest::Client,
    config: &SheetConfig,
) -> Result<Vec<RawRecord>, SheetError> {
    let url = config.csv_url();
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let body = response.bytes().await?;

    log::debug!("Downloaded {} bytes from sheet tab '{}'", body.len(), config.tab);

    let rows = parse_csv(&body)?;
    log::info!("Parsed {} rows from sheet tab '{}'", rows.len(), config.tab);
    Ok(rows)
}

/// Parses CSV bytes into header-keyed rows.
///
/// The first row is the header. Header cells are trimmed; rows shorter than
/// the header are padded with empty strings (`flexible` parsing), so every
/// record exposes every column.
///
/// # Errors
///
/// Returns [`SheetError`] if the CSV is malformed or has no header row.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<RawRecord>, SheetError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect();

    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(SheetError::Parse(
            "sheet CSV contains no header row".to_owned(),
        ));
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;

        let mut row = RawRecord::new();
        for (i, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = record.get(i).unwrap_or("").trim().to_owned();
            row.insert(header.clone(), value);
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_gviz_csv_url() {
        let config = SheetConfig::new("abc123", "cafe db");
        let url = config.csv_url();
        assert_eq!(
            url.as_str(),
            "https://docs.google.com/spreadsheets/d/abc123/gviz/tq?tqx=out%3Acsv&sheet=cafe+db"
        );
    }

    #[test]
    fn parses_rows_keyed_by_trimmed_headers() {
        let csv = " 카페명 ,주소\n어반플랜트,서울 마포구\n";
        let rows = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("카페명").map(String::as_str), Some("어반플랜트"));
        assert_eq!(rows[0].get("주소").map(String::as_str), Some("서울 마포구"));
    }

    #[test]
    fn short_rows_pad_missing_cells_with_empty_strings() {
        let csv = "카페명,주소,위도\n카페온리,\n";
        let rows = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].get("주소").map(String::as_str), Some(""));
        assert_eq!(rows[0].get("위도").map(String::as_str), Some(""));
    }

    #[test]
    fn rejects_empty_document() {
        assert!(parse_csv(b"").is_err());
    }
}
