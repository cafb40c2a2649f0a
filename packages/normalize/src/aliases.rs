//! Ordered source-key alias tables for each canonical field.
//!
//! Sheet columns are loosely named: Korean labels with and without spaces,
//! occasional English spellings, and renamed columns across dataset
//! revisions. Each canonical field consults its aliases in order and the
//! first non-empty value wins; no merging across aliases.

pub const ID: &[&str] = &["id", "ID"];
pub const NAME: &[&str] = &["카페명", "name", "상호명"];
pub const ADDRESS: &[&str] = &["주소", "address"];
pub const PYEONG_SIZE: &[&str] = &["평수", "pyeong"];
pub const SIZE_TAG: &[&str] = &["간단크기비교", "sizeTag"];
pub const PARKING_TYPE: &[&str] = &["주차타입", "parkingType"];
pub const PARKING_FEE: &[&str] = &["주차비용", "주차 비용", "parkingFee"];
pub const WHEELCHAIR_ACCESS: &[&str] = &["휠체어/유모차 가능", "휠체어유모차가능"];
pub const ELEVATOR: &[&str] = &["엘레베이터유무", "엘리베이터유무"];
pub const PET_ALLOWED: &[&str] = &["애완동물동반 가능", "애완동물동반가능"];
pub const KIDS_ALLOWED: &[&str] = &["키즈 가능", "키즈가능"];
pub const WIFI: &[&str] = &["와이파이", "wifi"];
pub const OUTLET: &[&str] = &["콘센트 유무", "콘센트유무"];
pub const DESSERT: &[&str] = &["디저트유무", "디저트 유무"];
pub const TABLE_SHAPE: &[&str] = &["테이블형태", "테이블 형태"];
pub const TABLE_HEIGHT: &[&str] = &["테이블 높이", "테이블높이"];
pub const PRICE: &[&str] = &["기본커피가격", "기본커피(아메리카노)가격"];
pub const TOILET_CLEANING: &[&str] = &["화장실 청결도", "화장실청결도"];
pub const TOILET_LOCATION: &[&str] = &["화장실 실내/야외", "화장실실내/야외"];
pub const SCHEDULE: &[&str] = &["오픈시간", "opening hour"];
pub const LAST_VISITED: &[&str] = &["최근 방문(업데이트일자)", "updatedAt"];

/// Latitude aliases when the dataset's `y` column is latitude (the working
/// dataset's convention).
pub const LAT_FROM_Y: &[&str] = &["위도", "lat", "latitude", "y"];
/// Longitude aliases paired with [`LAT_FROM_Y`].
pub const LNG_FROM_X: &[&str] = &["경도", "lng", "longitude", "x"];
/// Latitude aliases for sources that transpose the axis columns.
pub const LAT_FROM_X: &[&str] = &["위도", "lat", "latitude", "x"];
/// Longitude aliases paired with [`LAT_FROM_X`].
pub const LNG_FROM_Y: &[&str] = &["경도", "lng", "longitude", "y"];
