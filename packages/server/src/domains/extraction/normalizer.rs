//! Normalizes raw Overpass elements into [`BuildingRecord`] values.
//!
//! Tags are free-form, so every field has a fallback. Elements tagged as
//! fences, walls or bare roofs are mapped as `building=*` in OSM but are not
//! buildings anyone wants in a site report, and are dropped.

use overpass_client::Element;

use crate::domains::extraction::models::{BuildingRecord, NOT_AVAILABLE, UNNAMED_STRUCTURE};

/// Usage categories (after capitalization) that never produce a record.
pub const EXCLUDED_USAGES: [&str; 3] = ["Fence", "Wall", "Roof"];

pub const DEFAULT_CITY: &str = "Boston";

#[derive(Debug, Clone)]
pub struct Normalizer {
    default_city: String,
}

impl Normalizer {
    pub fn new(default_city: impl Into<String>) -> Self {
        Self {
            default_city: default_city.into(),
        }
    }

    /// Map elements to records, preserving input order.
    ///
    /// No deduplication, no sorting. Indices are 1-based over the records
    /// actually emitted.
    pub fn normalize(&self, elements: &[Element]) -> Vec<BuildingRecord> {
        elements
            .iter()
            .filter_map(|element| self.normalize_element(element))
            .enumerate()
            .map(|(i, mut record)| {
                record.index = i + 1;
                record
            })
            .collect()
    }

    /// Normalize one element; `None` when its usage is excluded.
    fn normalize_element(&self, element: &Element) -> Option<BuildingRecord> {
        let usage = capitalize(element.tag("building").unwrap_or("yes"));
        if is_excluded(&usage) {
            tracing::trace!(id = element.id, usage = %usage, "Skipping non-building element");
            return None;
        }

        let postcode = element.tag("addr:postcode").unwrap_or("");

        Some(BuildingRecord {
            index: 0,
            name: element
                .tag("name")
                .unwrap_or(UNNAMED_STRUCTURE)
                .to_string(),
            address: format_address(
                element.tag("addr:housenumber").unwrap_or(""),
                element.tag("addr:street").unwrap_or(""),
                element.tag("addr:city").unwrap_or(&self.default_city),
                postcode,
            ),
            floors: element
                .tag("building:levels")
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            latitude: element.center.map(|c| c.lat),
            longitude: element.center.map(|c| c.lon),
            usage,
            postcode: if postcode.trim().is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                postcode.to_string()
            },
        })
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_CITY)
    }
}

pub fn is_excluded(usage: &str) -> bool {
    EXCLUDED_USAGES.contains(&usage)
}

/// "12 Beach St, Boston 02111". Empty parts leave no stray separators.
pub fn format_address(house_number: &str, street: &str, city: &str, postcode: &str) -> String {
    let street_line = join_non_empty(&[house_number, street], " ");
    let locality = join_non_empty(&[city, postcode], " ");
    join_non_empty(&[&street_line, &locality], ", ")
}

fn join_non_empty(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// First character upper case, the rest lower case: "house" -> "House", "ROOF" -> "Roof".
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
