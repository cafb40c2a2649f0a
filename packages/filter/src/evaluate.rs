//! The conjunctive predicate evaluator.
//!
//! A record survives only if it passes every active criterion; criteria
//! with an empty selection are vacuously true. All predicates are pure, so
//! evaluation order only matters for short-circuiting — the cheap,
//! most-exclusionary checks (missing geo, bounds) run first. Records
//! without coordinates are excluded from every result: they can never be
//! rendered, so there is nothing to match them against.

use cafe_map_cafe_models::CafeRecord;
use cafe_map_spatial::{ViewportBounds, haversine_distance_m};
use chrono::{Datelike as _, NaiveDateTime};

use crate::matching;
use crate::open_hours;
use crate::request::FilterRequest;

/// Radius for the near-me toggle, in meters.
pub const NEAR_ME_RADIUS_M: f64 = 2_000.0;

/// Evaluation-time context: the wall clock and the user's base position.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext {
    /// Local wall-clock time used by the open-now and updated-this-year
    /// criteria.
    pub now: NaiveDateTime,
    /// Geolocated position (or map center) the near-me toggle measures
    /// from. When `None`, near-me does not constrain.
    pub base_position: Option<(f64, f64)>,
}

/// Filters the record set against the request and the active search area.
///
/// Returns a fresh sequence of the surviving records; the input is never
/// mutated and an empty result is valid. Applying the same request twice
/// yields the same result.
#[must_use]
pub fn filter_records<'a>(
    records: &'a [CafeRecord],
    request: &FilterRequest,
    bounds: Option<&ViewportBounds>,
    ctx: &EvalContext,
) -> Vec<&'a CafeRecord> {
    records
        .iter()
        .filter(|record| matches(record, request, bounds, ctx))
        .collect()
}

/// The "show all in this area" mode: bypasses every non-spatial predicate
/// and returns all records with coordinates inside the bounds.
#[must_use]
pub fn all_in_bounds<'a>(
    records: &'a [CafeRecord],
    bounds: Option<&ViewportBounds>,
) -> Vec<&'a CafeRecord> {
    records
        .iter()
        .filter(|record| in_bounds(record, bounds))
        .collect()
}

fn in_bounds(record: &CafeRecord, bounds: Option<&ViewportBounds>) -> bool {
    let Some((lat, lng)) = record.coords() else {
        return false;
    };
    bounds.is_none_or(|b| b.contains(lat, lng))
}

#[allow(clippy::too_many_lines)]
fn matches(
    record: &CafeRecord,
    request: &FilterRequest,
    bounds: Option<&ViewportBounds>,
    ctx: &EvalContext,
) -> bool {
    // Geo-less records never render, so they never match.
    let Some((lat, lng)) = record.coords() else {
        return false;
    };

    if let Some(bounds) = bounds
        && !bounds.contains(lat, lng)
    {
        return false;
    }

    if request.near_me
        && let Some((base_lat, base_lng)) = ctx.base_position
        && haversine_distance_m(base_lat, base_lng, lat, lng) > NEAR_ME_RADIUS_M
    {
        return false;
    }

    if !request.size_tags.is_empty() {
        match record.effective_size_tag() {
            Some(tag) if request.size_tags.contains(&tag) => {}
            _ => return false,
        }
    }

    if request.free_parking_only {
        // Free-only takes priority over and suppresses tag matching.
        if !matching::is_free_parking(
            record.parking_type.as_deref(),
            record.parking_fee.as_deref(),
        ) {
            return false;
        }
    } else if !request.parking_tags.is_empty()
        && !request.parking_tags.iter().any(|tag| {
            matching::parking_tag_matches(
                *tag,
                record.parking_type.as_deref(),
                record.parking_fee.as_deref(),
            )
        })
    {
        return false;
    }

    if request.wheelchair && !matching::is_affirmative(record.wheelchair_access.as_deref()) {
        return false;
    }
    if request.elevator && !matching::is_affirmative(record.elevator.as_deref()) {
        return false;
    }
    if request.pet_allowed && !matching::is_affirmative(record.pet_allowed.as_deref()) {
        return false;
    }
    if request.kids_allowed && !matching::is_affirmative(record.kids_allowed.as_deref()) {
        return false;
    }
    if request.wifi && !matching::is_affirmative(record.wifi.as_deref()) {
        return false;
    }
    if request.outlet && !matching::is_affirmative(record.outlet.as_deref()) {
        return false;
    }
    if request.dessert && !matching::is_dessert_affirmative(record.dessert.as_deref()) {
        return false;
    }

    if !request.table_shapes.is_empty() {
        let shape_text = record.table_shape.as_deref().unwrap_or("");
        if !request
            .table_shapes
            .iter()
            .any(|shape| shape_text.contains(shape.as_ref()))
        {
            return false;
        }
    }

    if !request.table_heights.is_empty() {
        let bucket = record
            .table_height
            .as_deref()
            .and_then(cafe_map_cafe_models::TableHeight::from_text);
        match bucket {
            Some(height) if request.table_heights.contains(&height) => {}
            _ => return false,
        }
    }

    // Records with no parsed price are never excluded by the price filter.
    if let Some(price) = record.price
        && (price < request.price_min || price > request.price_max)
    {
        return false;
    }

    if let Some(selection) = &request.toilet_cleaning
        && record.toilet_cleaning.as_deref().map(str::trim) != Some(selection.as_str())
    {
        return false;
    }
    if let Some(selection) = &request.toilet_location
        && record.toilet_location.as_deref().map(str::trim) != Some(selection.as_str())
    {
        return false;
    }

    if request.open_now
        && !record
            .schedule
            .as_ref()
            .is_some_and(|s| open_hours::is_open_at(s, ctx.now))
    {
        return false;
    }

    if request.updated_this_year
        && record.last_visited.map(|d| d.year()) != Some(ctx.now.year())
    {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use cafe_map_cafe_models::{ParkingTag, SizeTag, TableHeight, TableShape};
    use chrono::NaiveDate;

    use super::*;

    fn noon() -> NaiveDateTime {
        // A Monday.
        NaiveDate::from_ymd_opt(2026, 8, 24)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn ctx() -> EvalContext {
        EvalContext {
            now: noon(),
            base_position: None,
        }
    }

    fn cafe(name: &str, lat: f64, lng: f64) -> CafeRecord {
        CafeRecord {
            id: None,
            name: name.to_owned(),
            address: String::new(),
            lat: Some(lat),
            lng: Some(lng),
            pyeong_size: None,
            size_tag: None,
            parking_type: None,
            parking_fee: None,
            wheelchair_access: None,
            elevator: None,
            pet_allowed: None,
            kids_allowed: None,
            wifi: None,
            outlet: None,
            dessert: None,
            table_shape: None,
            table_height: None,
            price: None,
            toilet_cleaning: None,
            toilet_location: None,
            schedule: None,
            last_visited: None,
        }
    }

    fn geoless(name: &str) -> CafeRecord {
        let mut c = cafe(name, 0.0, 0.0);
        c.lat = None;
        c.lng = None;
        c
    }

    #[test]
    fn empty_request_keeps_all_geo_records_in_order() {
        let records = vec![
            cafe("a", 37.50, 127.00),
            geoless("b"),
            cafe("c", 37.51, 127.01),
        ];
        let result = filter_records(&records, &FilterRequest::default(), None, &ctx());
        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn geoless_records_excluded_from_bounded_results() {
        let records = vec![cafe("a", 37.50, 127.00), geoless("b")];
        let bounds = ViewportBounds::new(37.0, 126.0, 38.0, 128.0);
        let result = filter_records(&records, &FilterRequest::default(), Some(&bounds), &ctx());
        assert_eq!(result.len(), 1);

        let all = all_in_bounds(&records, Some(&bounds));
        assert_eq!(all.len(), 1);
        let unbounded = all_in_bounds(&records, None);
        assert_eq!(unbounded.len(), 1);
    }

    #[test]
    fn bounds_are_inclusive_and_exclude_outsiders() {
        let records = vec![
            cafe("edge", 37.0, 126.0),
            cafe("inside", 37.5, 127.0),
            cafe("outside", 39.0, 127.0),
        ];
        let bounds = ViewportBounds::new(37.0, 126.0, 38.0, 128.0);
        let result = filter_records(&records, &FilterRequest::default(), Some(&bounds), &ctx());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = vec![cafe("a", 37.50, 127.00), cafe("b", 37.51, 127.01)];
        let request = FilterRequest {
            wifi: true,
            ..FilterRequest::default()
        };
        let first = filter_records(&records, &request, None, &ctx());
        let second = filter_records(&records, &request, None, &ctx());
        assert_eq!(first, second);
    }

    #[test]
    fn size_filter_uses_effective_tag() {
        let mut explicit = cafe("explicit", 37.5, 127.0);
        explicit.size_tag = Some(SizeTag::Small);
        let mut derived = cafe("derived", 37.5, 127.0);
        derived.pyeong_size = Some(15.0);
        let mut untagged = cafe("untagged", 37.5, 127.0);
        untagged.pyeong_size = None;
        let records = vec![explicit, derived, untagged];

        let request = FilterRequest {
            size_tags: BTreeSet::from([SizeTag::Small]),
            ..FilterRequest::default()
        };
        let result = filter_records(&records, &request, None, &ctx());
        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["explicit", "derived"]);
    }

    #[test]
    fn free_only_matches_fee_text_and_suppresses_tags() {
        let mut paid_lot_free_hours = cafe("free-hours", 37.5, 127.0);
        paid_lot_free_hours.parking_type = Some("유료주차장".to_owned());
        paid_lot_free_hours.parking_fee = Some("1시간 무료".to_owned());

        let mut paid = cafe("paid", 37.5, 127.0);
        paid.parking_type = Some("자체주차장".to_owned());
        paid.parking_fee = Some("시간당 2000원".to_owned());

        let records = vec![paid_lot_free_hours, paid];
        // Selected tags are ignored while free-only is active.
        let request = FilterRequest {
            free_parking_only: true,
            parking_tags: BTreeSet::from([ParkingTag::OwnLot]),
            ..FilterRequest::default()
        };

        let result = filter_records(&records, &request, None, &ctx());
        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["free-hours"]);
    }

    #[test]
    fn parking_tags_match_any_selected() {
        let mut own = cafe("own", 37.5, 127.0);
        own.parking_type = Some("자체 주차장".to_owned());
        let mut none = cafe("none", 37.5, 127.0);
        none.parking_type = Some("주차불가".to_owned());
        let records = vec![own, none];

        let request = FilterRequest {
            parking_tags: BTreeSet::from([ParkingTag::OwnLot, ParkingTag::ExternalLot]),
            ..FilterRequest::default()
        };
        let result = filter_records(&records, &request, None, &ctx());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "own");
    }

    #[test]
    fn amenity_toggles_require_affirmative_text() {
        let mut yes = cafe("yes", 37.5, 127.0);
        yes.wifi = Some("가능".to_owned());
        yes.dessert = Some("있음".to_owned());
        let mut no = cafe("no", 37.5, 127.0);
        no.wifi = Some("없음".to_owned());
        let records = vec![yes, no];

        let request = FilterRequest {
            wifi: true,
            dessert: true,
            ..FilterRequest::default()
        };
        let result = filter_records(&records, &request, None, &ctx());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "yes");
    }

    #[test]
    fn table_shape_and_height_matching() {
        let mut round_low = cafe("round-low", 37.5, 127.0);
        round_low.table_shape = Some("원형 테이블 위주".to_owned());
        round_low.table_height = Some("소파석".to_owned());
        let mut square = cafe("square", 37.5, 127.0);
        square.table_shape = Some("네모".to_owned());
        square.table_height = Some("작업하기 좋은 높이".to_owned());
        let records = vec![round_low, square];

        let request = FilterRequest {
            table_shapes: BTreeSet::from([TableShape::Round]),
            table_heights: BTreeSet::from([TableHeight::Low]),
            ..FilterRequest::default()
        };
        let result = filter_records(&records, &request, None, &ctx());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "round-low");
    }

    #[test]
    fn unparseable_price_never_excluded() {
        let mut priced = cafe("priced", 37.5, 127.0);
        priced.price = Some(9000.0);
        let unpriced = cafe("unpriced", 37.5, 127.0);
        let records = vec![priced, unpriced];

        let request = FilterRequest {
            price_min: 4000.0,
            price_max: 5000.0,
            ..FilterRequest::default()
        };
        let result = filter_records(&records, &request, None, &ctx());
        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["unpriced"]);
    }

    #[test]
    fn price_range_is_inclusive() {
        let mut edge = cafe("edge", 37.5, 127.0);
        edge.price = Some(5000.0);
        let records = vec![edge];

        let request = FilterRequest {
            price_min: 5000.0,
            price_max: 5000.0,
            ..FilterRequest::default()
        };
        assert_eq!(filter_records(&records, &request, None, &ctx()).len(), 1);
    }

    #[test]
    fn restroom_selections_are_exact_match() {
        let mut clean = cafe("clean", 37.5, 127.0);
        clean.toilet_cleaning = Some(" 최상 ".to_owned());
        let mut average = cafe("average", 37.5, 127.0);
        average.toilet_cleaning = Some("보통".to_owned());
        let records = vec![clean, average];

        let request = FilterRequest {
            toilet_cleaning: Some("최상".to_owned()),
            ..FilterRequest::default()
        };
        let result = filter_records(&records, &request, None, &ctx());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "clean");
    }

    #[test]
    fn open_now_requires_a_parsed_schedule() {
        let mut open = cafe("open", 37.5, 127.0);
        open.schedule =
            serde_json::from_str(r#"{"openHour":{"mon":["09:00","18:00"]}}"#).ok();
        let unknown = cafe("unknown", 37.5, 127.0);
        let records = vec![open, unknown];

        let request = FilterRequest {
            open_now: true,
            ..FilterRequest::default()
        };
        let result = filter_records(&records, &request, None, &ctx());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "open");
    }

    #[test]
    fn updated_this_year_compares_calendar_years() {
        let mut fresh = cafe("fresh", 37.5, 127.0);
        fresh.last_visited = NaiveDate::from_ymd_opt(2026, 1, 5);
        let mut stale = cafe("stale", 37.5, 127.0);
        stale.last_visited = NaiveDate::from_ymd_opt(2025, 12, 28);
        let undated = cafe("undated", 37.5, 127.0);
        let records = vec![fresh, stale, undated];

        let request = FilterRequest {
            updated_this_year: true,
            ..FilterRequest::default()
        };
        let result = filter_records(&records, &request, None, &ctx());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "fresh");
    }

    #[test]
    fn near_me_limits_to_radius_when_base_known() {
        let near = cafe("near", 37.5665, 126.978);
        let far = cafe("far", 37.60, 126.978); // ~3.7 km north
        let records = vec![near, far];

        let request = FilterRequest {
            near_me: true,
            ..FilterRequest::default()
        };
        let with_base = EvalContext {
            now: noon(),
            base_position: Some((37.5665, 126.978)),
        };
        let result = filter_records(&records, &request, None, &with_base);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "near");

        // Without a base position the toggle does not constrain.
        let result = filter_records(&records, &request, None, &ctx());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn show_all_mode_ignores_every_non_spatial_criterion() {
        let mut closed = cafe("closed", 37.5, 127.0);
        closed.wifi = Some("없음".to_owned());
        let records = vec![closed, geoless("nowhere")];
        let bounds = ViewportBounds::new(37.0, 126.0, 38.0, 128.0);
        let result = all_in_bounds(&records, Some(&bounds));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "closed");
    }
}
