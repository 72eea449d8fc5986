use serde::{Deserialize, Serialize};

/// Placeholder for elements without a `name` tag.
pub const UNNAMED_STRUCTURE: &str = "Unnamed Structure";

/// Placeholder for missing floor counts and postcodes.
pub const NOT_AVAILABLE: &str = "N/A";

/// One building from an extraction, flattened from an Overpass element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    /// 1-based position in the result set.
    pub index: usize,
    pub name: String,
    pub address: String,
    /// `building:levels` as tagged; OSM allows values like "3;5" or "2.5".
    pub floors: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub usage: String,
    pub postcode: String,
}

impl BuildingRecord {
    /// Center point as (lat, lon), when the element carried one.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}
