//! Free-text matching rules for the loosely filled spreadsheet columns.
//!
//! Amenity cells hold whatever the surveyor typed: "가능", "있음 (2층)",
//! "TRUE", "O" and friends all mean yes. Parking cells mix the lot type
//! and fee into prose. The rules here mirror the dataset's vocabulary and
//! treat anything that doesn't match as negative.

use std::sync::LazyLock;

use cafe_map_cafe_models::ParkingTag;
use regex::Regex;

/// Affirmative spellings for the boolean amenity columns.
static AFFIRMATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)가능|있음|true|o").expect("affirmative pattern must compile"));

/// The dessert column uses "있음"/"y" style answers rather than "가능".
static DESSERT_AFFIRMATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)있음|y|true|o").expect("dessert pattern must compile"));

/// Free-cost markers in parking fee/type text.
static FREE_COST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)무료|free|공짜").expect("free-cost pattern must compile"));

/// Whether an amenity cell counts as affirmative. `None`/empty is negative.
#[must_use]
pub fn is_affirmative(text: Option<&str>) -> bool {
    text.is_some_and(|t| AFFIRMATIVE.is_match(t))
}

/// Whether the dessert cell counts as affirmative.
#[must_use]
pub fn is_dessert_affirmative(text: Option<&str>) -> bool {
    text.is_some_and(|t| DESSERT_AFFIRMATIVE.is_match(t))
}

/// Whether a cafe's parking is free.
///
/// The fee text is authoritative: a free-cost marker (or a literal zero
/// amount) there matches regardless of the parking-type text. The type
/// text is consulted as a fallback since older rows folded the fee into it.
#[must_use]
pub fn is_free_parking(parking_type: Option<&str>, parking_fee: Option<&str>) -> bool {
    if let Some(fee) = parking_fee {
        let fee = collapse(fee);
        if FREE_COST.is_match(&fee) || fee == "0" || fee == "0원" {
            return true;
        }
    }
    parking_type.is_some_and(|t| FREE_COST.is_match(&collapse(t)))
}

/// Whether a record's parking text satisfies a selected tag.
///
/// Most tags match by space-stripped substring containment against the
/// type text; the cost-oriented tags have bespoke rules that also consult
/// the fee text.
#[must_use]
pub fn parking_tag_matches(
    tag: ParkingTag,
    parking_type: Option<&str>,
    parking_fee: Option<&str>,
) -> bool {
    match tag {
        ParkingTag::Free => is_free_parking(parking_type, parking_fee),
        ParkingTag::PaidAvailable => {
            contains_collapsed(parking_fee, "유료") || contains_collapsed(parking_type, "유료")
        }
        _ => contains_collapsed(parking_type, tag.as_ref()),
    }
}

/// Space-stripped substring containment.
fn contains_collapsed(text: Option<&str>, needle: &str) -> bool {
    text.is_some_and(|t| collapse(t).contains(needle))
}

/// Removes all spaces so "자체 주차장" matches "자체주차장".
fn collapse(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmative_spellings() {
        assert!(is_affirmative(Some("가능")));
        assert!(is_affirmative(Some("있음 (2층)")));
        assert!(is_affirmative(Some("TRUE")));
        assert!(is_affirmative(Some("O")));
        assert!(!is_affirmative(Some("불가")));
        assert!(!is_affirmative(Some("x")));
        assert!(!is_affirmative(None));
    }

    #[test]
    fn dessert_spellings() {
        assert!(is_dessert_affirmative(Some("있음")));
        assert!(is_dessert_affirmative(Some("Y")));
        assert!(!is_dessert_affirmative(Some("없음")));
        assert!(!is_dessert_affirmative(Some("가능")));
    }

    #[test]
    fn free_parking_fee_text_wins() {
        // Free marker in the fee text matches regardless of the type text.
        assert!(is_free_parking(Some("유료주차장"), Some("2시간 무료")));
        assert!(is_free_parking(Some("자체주차장"), Some("0원")));
        assert!(is_free_parking(Some("주차 무료"), None));
        assert!(!is_free_parking(Some("자체주차장"), Some("30분당 1000원")));
        assert!(!is_free_parking(None, None));
    }

    #[test]
    fn parking_tag_substring_ignores_spaces() {
        assert!(parking_tag_matches(
            ParkingTag::OwnLot,
            Some("자체 주차장 (지하)"),
            None
        ));
        assert!(parking_tag_matches(
            ParkingTag::Underground,
            Some("자체 주차장 (지하)"),
            None
        ));
        assert!(!parking_tag_matches(
            ParkingTag::ExternalLot,
            Some("자체주차장"),
            None
        ));
    }

    #[test]
    fn paid_available_consults_fee_text() {
        assert!(parking_tag_matches(
            ParkingTag::PaidAvailable,
            Some("외부주차장"),
            Some("유료 (시간당 2000원)")
        ));
        assert!(!parking_tag_matches(
            ParkingTag::PaidAvailable,
            Some("외부주차장"),
            Some("무료")
        ));
    }
}
