#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI for the cafe map pipeline: fetch the sheet, normalize it, run one
//! filter evaluation, and emit the marker payload as JSON.
//!
//! ```text
//! cafe_map --sheet-id <id> [--bounds swLat,swLng,neLat,neLng] \
//!     [--open-now] [--wifi] [--size 소형] [--price-max 8000] [...]
//! ```
//!
//! The sheet id can also come from `CAFE_SHEET_ID` (and the tab from
//! `CAFE_SHEET_TAB`).

use std::io::Write as _;
use std::path::PathBuf;

use async_trait::async_trait;
use cafe_map_app::geolocate::{Locator, resolve_start_position};
use cafe_map_app::{AppError, MapSession, load_cafes};
use cafe_map_cafe_models::{ParkingTag, SizeTag, TableHeight, TableShape};
use cafe_map_filter::Toggle;
use cafe_map_filter::request::{PRICE_MAX_DEFAULT, PRICE_MIN_DEFAULT};
use cafe_map_normalize::{AxisMapping, Normalizer};
use cafe_map_sheet::SheetConfig;
use cafe_map_spatial::ViewportBounds;
use clap::Parser;

#[derive(Parser)]
#[command(name = "cafe_map", about = "Filter the cafe sheet and emit map markers")]
struct Cli {
    /// Google Sheet document id (falls back to CAFE_SHEET_ID)
    #[arg(long)]
    sheet_id: Option<String>,

    /// Sheet tab name (falls back to CAFE_SHEET_TAB)
    #[arg(long)]
    tab: Option<String>,

    /// Treat the source x column as latitude and y as longitude
    #[arg(long)]
    transposed_axes: bool,

    /// Search area as "swLat,swLng,neLat,neLng"; omit for no spatial scope
    #[arg(long, value_parser = parse_bounds)]
    bounds: Option<ViewportBounds>,

    /// Base position as "lat,lng" for the near-me filter
    #[arg(long, value_parser = parse_center)]
    center: Option<(f64, f64)>,

    /// Only cafes within 2 km of the base position
    #[arg(long)]
    near_me: bool,

    /// Only cafes with wheelchair/stroller access
    #[arg(long)]
    wheelchair: bool,

    /// Only cafes with an elevator
    #[arg(long)]
    elevator: bool,

    /// Only cafes that allow pets
    #[arg(long)]
    pet_allowed: bool,

    /// Only cafes that allow kids
    #[arg(long)]
    kids_allowed: bool,

    /// Only cafes with wifi
    #[arg(long)]
    wifi: bool,

    /// Only cafes with power outlets
    #[arg(long)]
    outlet: bool,

    /// Only cafes with a dessert menu
    #[arg(long)]
    dessert: bool,

    /// Only cafes open right now
    #[arg(long)]
    open_now: bool,

    /// Only cafes visited this calendar year
    #[arg(long)]
    updated_this_year: bool,

    /// Only cafes with free parking
    #[arg(long)]
    free_parking: bool,

    /// Size chip (repeatable), e.g. 초소형, 소형, 중형, 대형, 초대형
    #[arg(long = "size")]
    sizes: Vec<SizeTag>,

    /// Parking chip (repeatable), e.g. 무료, 자체주차장
    #[arg(long = "parking")]
    parking: Vec<ParkingTag>,

    /// Table shape chip (repeatable)
    #[arg(long = "table-shape")]
    table_shapes: Vec<TableShape>,

    /// Table height chip (repeatable)
    #[arg(long = "table-height")]
    table_heights: Vec<TableHeight>,

    /// Lower bound of the americano price slider
    #[arg(long)]
    price_min: Option<f64>,

    /// Upper bound of the americano price slider
    #[arg(long)]
    price_max: Option<f64>,

    /// Restroom cleanliness category
    #[arg(long)]
    toilet_cleaning: Option<String>,

    /// Restroom location category
    #[arg(long)]
    toilet_location: Option<String>,

    /// Ignore every non-spatial filter and show everything in the area
    #[arg(long)]
    show_all: bool,

    /// Write the marker JSON here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_bounds(text: &str) -> Result<ViewportBounds, String> {
    let parts = parse_floats(text)?;
    match parts[..] {
        [sw_lat, sw_lng, ne_lat, ne_lng] => Ok(ViewportBounds::new(sw_lat, sw_lng, ne_lat, ne_lng)),
        _ => Err("expected swLat,swLng,neLat,neLng".to_owned()),
    }
}

fn parse_center(text: &str) -> Result<(f64, f64), String> {
    let parts = parse_floats(text)?;
    match parts[..] {
        [lat, lng] => Ok((lat, lng)),
        _ => Err("expected lat,lng".to_owned()),
    }
}

fn parse_floats(text: &str) -> Result<Vec<f64>, String> {
    text.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid coordinate {part:?}: {e}"))
        })
        .collect()
}

/// Stands in for platform geolocation: the position comes from `--center`
/// when given, otherwise the lookup "fails" and the default center is used.
struct ArgLocator(Option<(f64, f64)>);

#[async_trait]
impl Locator for ArgLocator {
    async fn locate(&self) -> Result<(f64, f64), String> {
        self.0.ok_or_else(|| "no --center given".to_owned())
    }
}

fn configure_panel(session: &mut MapSession, cli: &Cli) {
    let toggles = [
        (Toggle::NearMe, cli.near_me),
        (Toggle::Wheelchair, cli.wheelchair),
        (Toggle::Elevator, cli.elevator),
        (Toggle::PetAllowed, cli.pet_allowed),
        (Toggle::KidsAllowed, cli.kids_allowed),
        (Toggle::Wifi, cli.wifi),
        (Toggle::Outlet, cli.outlet),
        (Toggle::Dessert, cli.dessert),
        (Toggle::OpenNow, cli.open_now),
        (Toggle::UpdatedThisYear, cli.updated_this_year),
        (Toggle::FreeParkingOnly, cli.free_parking),
    ];

    let panel = session.panel_mut();
    for (toggle, checked) in toggles {
        panel.set_toggle(toggle, checked);
    }
    for &tag in &cli.sizes {
        panel.set_size_tag(tag, true);
    }
    for &tag in &cli.parking {
        panel.set_parking_tag(tag, true);
    }
    for &shape in &cli.table_shapes {
        panel.set_table_shape(shape, true);
    }
    for &height in &cli.table_heights {
        panel.set_table_height(height, true);
    }
    if cli.price_min.is_some() || cli.price_max.is_some() {
        panel.set_price_range(
            cli.price_min.unwrap_or(PRICE_MIN_DEFAULT),
            cli.price_max.unwrap_or(PRICE_MAX_DEFAULT),
        );
    }
    panel.set_toilet_cleaning(cli.toilet_cleaning.as_deref());
    panel.set_toilet_location(cli.toilet_location.as_deref());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let sheet_id = cli
        .sheet_id
        .clone()
        .or_else(|| std::env::var("CAFE_SHEET_ID").ok())
        .ok_or("no sheet id: pass --sheet-id or set CAFE_SHEET_ID")?;
    let tab = cli
        .tab
        .clone()
        .or_else(|| std::env::var("CAFE_SHEET_TAB").ok())
        .unwrap_or_else(|| SheetConfig::DEFAULT_TAB.to_owned());

    let axes = if cli.transposed_axes {
        AxisMapping::XIsLatitude
    } else {
        AxisMapping::YIsLatitude
    };

    let client = reqwest::Client::new();
    let config = SheetConfig::new(&sheet_id, &tab);
    let cafes = load_cafes(&client, &config, &Normalizer::new(axes)).await?;
    log::info!("Loaded {} cafes from tab {tab:?}", cafes.len());

    let base_position = resolve_start_position(&ArgLocator(cli.center)).await;
    let mut session = MapSession::new(cafes, Some(base_position));
    configure_panel(&mut session, &cli);

    if let Some(bounds) = cli.bounds {
        session.on_map_idle(bounds);
        session.search_this_area();
    } else {
        session.apply_filters();
    }
    if cli.show_all {
        session.show_all_in_area();
    }

    let (matched, total) = session.stats();
    log::info!("{matched}/{total} cafes in result");

    let json = serde_json::to_string_pretty(&session.markers()).map_err(AppError::Json)?;
    match cli.output {
        Some(path) => std::fs::write(&path, json).map_err(AppError::Io)?,
        None => writeln!(std::io::stdout(), "{json}").map_err(AppError::Io)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_parse_four_floats() {
        let bounds = parse_bounds("37.0, 126.0, 38.0, 128.0").unwrap();
        assert!(bounds.contains(37.5, 127.0));
        assert!(parse_bounds("37.0,126.0").is_err());
        assert!(parse_bounds("a,b,c,d").is_err());
    }

    #[test]
    fn center_parses_pair() {
        assert_eq!(parse_center("37.5665,126.978").unwrap(), (37.5665, 126.978));
        assert!(parse_center("37.5665").is_err());
    }

    #[test]
    fn chip_labels_parse_via_strum() {
        use std::str::FromStr;
        assert_eq!(SizeTag::from_str("소형").unwrap(), SizeTag::Small);
        assert_eq!(ParkingTag::from_str("무료").unwrap(), ParkingTag::Free);
    }
}
