use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level `[out:json]` response from the interpreter endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub version: Option<f64>,
    #[serde(default)]
    pub generator: Option<String>,
    /// Set by the server when a query ran into its own timeout or memory limit.
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A single OSM element (node, way or relation).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type", default)]
    pub element_type: String,
    #[serde(default)]
    pub id: i64,
    /// Present for ways and relations when the query ends with `out center`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Center>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl Element {
    /// Tag value, or `None` when the element does not carry the key.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

/// Representative point of a way or relation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}
