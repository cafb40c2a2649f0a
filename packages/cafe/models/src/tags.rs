//! Filter tag enums for the chip groups in the filter panel.
//!
//! Each enum's variants carry the exact Korean labels the dataset and the
//! UI chips use. `Display`/`FromStr` round-trip through those labels, so a
//! chip's text parses straight into its tag.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Cafe size tier, from the "간단크기비교" column or derived from pyeong.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum SizeTag {
    /// Under 10 pyeong.
    #[serde(rename = "초소형")]
    #[strum(serialize = "초소형")]
    Tiny,
    /// 10 to under 20 pyeong.
    #[serde(rename = "소형")]
    #[strum(serialize = "소형")]
    Small,
    /// 20 to under 40 pyeong.
    #[serde(rename = "중형")]
    #[strum(serialize = "중형")]
    Medium,
    /// 40 to under 70 pyeong.
    #[serde(rename = "대형")]
    #[strum(serialize = "대형")]
    Large,
    /// 70 pyeong and up.
    #[serde(rename = "초대형")]
    #[strum(serialize = "초대형")]
    ExtraLarge,
}

impl SizeTag {
    /// Derives the size tier from a pyeong area via the fixed thresholds.
    #[must_use]
    pub fn from_pyeong(pyeong: f64) -> Self {
        if pyeong < 10.0 {
            Self::Tiny
        } else if pyeong < 20.0 {
            Self::Small
        } else if pyeong < 40.0 {
            Self::Medium
        } else if pyeong < 70.0 {
            Self::Large
        } else {
            Self::ExtraLarge
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Tiny,
            Self::Small,
            Self::Medium,
            Self::Large,
            Self::ExtraLarge,
        ]
    }
}

/// Parking arrangement tags. Matching against a record's parking text is
/// rule-based; see the filter crate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum ParkingTag {
    /// The cafe has its own lot.
    #[serde(rename = "자체주차장")]
    #[strum(serialize = "자체주차장")]
    OwnLot,
    /// Nearby external lot.
    #[serde(rename = "외부주차장")]
    #[strum(serialize = "외부주차장")]
    ExternalLot,
    /// Parking available under conditions (e.g. purchase required).
    #[serde(rename = "조건부주차장")]
    #[strum(serialize = "조건부주차장")]
    Conditional,
    /// No parking at all.
    #[serde(rename = "주차불가")]
    #[strum(serialize = "주차불가")]
    NoParking,
    /// Underground parking.
    #[serde(rename = "지하")]
    #[strum(serialize = "지하")]
    Underground,
    /// Free parking.
    #[serde(rename = "무료")]
    #[strum(serialize = "무료")]
    Free,
    /// Paid parking available.
    #[serde(rename = "유료가능")]
    #[strum(serialize = "유료가능")]
    PaidAvailable,
}

impl ParkingTag {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::OwnLot,
            Self::ExternalLot,
            Self::Conditional,
            Self::NoParking,
            Self::Underground,
            Self::Free,
            Self::PaidAvailable,
        ]
    }
}

/// Table shape tags, matched by substring against the "테이블형태" text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum TableShape {
    /// Rectangular tables.
    #[serde(rename = "네모")]
    #[strum(serialize = "네모")]
    Square,
    /// Round tables.
    #[serde(rename = "원형")]
    #[strum(serialize = "원형")]
    Round,
    /// Irregular shapes.
    #[serde(rename = "비정형")]
    #[strum(serialize = "비정형")]
    Irregular,
}

impl TableShape {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Square, Self::Round, Self::Irregular]
    }
}

/// Table height bucket. Source rows describe heights in free text
/// ("작업하기 좋은 70~85cm", "소파석" ...), normalized into one of three
/// buckets by [`TableHeight::from_text`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum TableHeight {
    /// Low tables (sofa seating).
    #[serde(rename = "낮은")]
    #[strum(serialize = "낮은")]
    Low,
    /// Standard-height tables.
    #[serde(rename = "중간")]
    #[strum(serialize = "중간")]
    Medium,
    /// High tables suited to working.
    #[serde(rename = "높은")]
    #[strum(serialize = "높은")]
    High,
}

impl TableHeight {
    /// Buckets a free-text height description by keyword. Returns `None`
    /// when no keyword matches.
    ///
    /// High is checked first since "작업" descriptions often also mention
    /// a generic height word.
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        if contains_any(&lower, &["작업", "70~85", "높"]) {
            return Some(Self::High);
        }
        if contains_any(&lower, &["중간", "일반"]) {
            return Some(Self::Medium);
        }
        if contains_any(&lower, &["낮", "소파", "로우"]) {
            return Some(Self::Low);
        }
        None
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High]
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}
