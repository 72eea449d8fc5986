use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::extraction::models::BuildingRecord;

/// Chinatown / Tufts Medical, where the tool was first used.
pub const DEFAULT_CENTER: LatLon = LatLon {
    lat: 42.349,
    lon: -71.066,
};

/// Map widgets report fractional zoom levels.
pub const DEFAULT_ZOOM: f64 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Map view remembered across refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: LatLon,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(lat: f64, lon: f64, zoom: f64) -> Self {
        Self {
            center: LatLon { lat, lon },
            zoom,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Numbered map marker for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub index: usize,
    pub lat: f64,
    pub lon: f64,
    /// Text drawn on the pin: the record number.
    pub label: String,
    pub popup: String,
}

impl Marker {
    /// `None` for records without a center point; those stay table-only.
    pub fn for_record(record: &BuildingRecord) -> Option<Self> {
        let (lat, lon) = record.position()?;
        Some(Self {
            index: record.index,
            lat,
            lon,
            label: record.index.to_string(),
            popup: format!("#{} {}\n{}", record.index, record.name, record.address),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Empty,
    Populated,
}

/// Result of the last successful extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub records: Vec<BuildingRecord>,
    pub markers: Vec<Marker>,
}

impl ExtractionResult {
    pub fn new(records: Vec<BuildingRecord>) -> Self {
        let markers = records.iter().filter_map(Marker::for_record).collect();
        Self { records, markers }
    }
}

/// Per-session UI state.
///
/// Empty until the first extraction, Populated afterwards. Every transition
/// replaces the whole result; nothing is merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub viewport: Viewport,
    pub extraction: Option<ExtractionResult>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionState {
    pub fn new(viewport: Viewport) -> Self {
        let now = Utc::now();
        Self {
            viewport,
            extraction: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match self.extraction {
            Some(_) => SessionPhase::Populated,
            None => SessionPhase::Empty,
        }
    }

    pub fn records(&self) -> &[BuildingRecord] {
        self.extraction
            .as_ref()
            .map(|e| e.records.as_slice())
            .unwrap_or(&[])
    }

    pub fn markers(&self) -> &[Marker] {
        self.extraction
            .as_ref()
            .map(|e| e.markers.as_slice())
            .unwrap_or(&[])
    }

    /// Extract: Empty/Populated → Populated.
    ///
    /// `view` is the map view at the moment of the button press; when the
    /// caller sends none, the remembered viewport stays.
    pub fn apply_extraction(&mut self, records: Vec<BuildingRecord>, view: Option<Viewport>) {
        self.extraction = Some(ExtractionResult::new(records));
        if let Some(view) = view {
            self.viewport = view;
        }
        self.touch();
    }

    /// Reset: any → Empty, viewport back to `default_viewport`.
    pub fn reset(&mut self, default_viewport: Viewport) {
        self.extraction = None;
        self.viewport = default_viewport;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
