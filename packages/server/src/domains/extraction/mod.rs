//! Extraction domain - polygon in, building records out
//!
//! # Architecture
//!
//! ```text
//! DrawOutput → DrawnPolygon → BaseOverpassService → Normalizer → BuildingRecord list
//! ```
//!
//! This is a **simple, direct path**: one request, one Overpass call, no
//! retries and no partial results. Session bookkeeping lives in
//! `domains::session`; this domain never touches it.
//!
//! # Components
//!
//! | Component | Purpose |
//! |-----------|---------|
//! | `activities` | Run one extraction against the injected Overpass service |
//! | `normalizer` | Flatten tagged elements, drop fences/walls/roofs |
//! | `export` | BOM-prefixed CSV geo-report |
//! | `models` | `BuildingRecord` |

pub mod activities;
pub mod export;
pub mod models;
pub mod normalizer;

pub use activities::{extract_buildings, ExtractionOutcome};
pub use export::{parse_report, to_csv, ExportError, ReportRow, REPORT_FILE_NAME};
pub use models::BuildingRecord;
pub use normalizer::Normalizer;
