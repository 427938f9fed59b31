// crates/rwgeo-core/src/raw.rs

//! Raw record shapes as they appear in the dataset JSON files.
//!
//! One file per level, each a JSON array of objects:
//!
//! ```json
//! { "code": "RW-01-02", "name": "Gasabo", "slug": "gasabo",
//!   "parentCode": "RW-01", "center": { "lat": -1.90, "lng": 30.11 } }
//! ```
//!
//! The level of a record is given by the file it was read from.

use serde::Deserialize;

/// Raw coordinate pair.
#[derive(Debug, Clone, Deserialize)]
pub struct CenterRaw {
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "lon", alias = "longitude")]
    pub lng: f64,
}

/// Raw administrative unit record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRaw {
    pub code: String,
    pub name: String,
    pub slug: String,
    #[serde(default, alias = "parent_code")]
    pub parent_code: Option<String>,
    #[serde(default)]
    pub center: Option<CenterRaw>,
}

/// The five raw collections, in hierarchy order.
///
/// Also the shape of a single-file dataset: one object holding the five
/// arrays under their collection names. Missing arrays are empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStore {
    pub provinces: Vec<RecordRaw>,
    pub districts: Vec<RecordRaw>,
    pub sectors: Vec<RecordRaw>,
    pub cells: Vec<RecordRaw>,
    pub villages: Vec<RecordRaw>,
}
