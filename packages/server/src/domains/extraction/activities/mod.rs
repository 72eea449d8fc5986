//! Extraction domain activities
//!
//! Pure IO orchestration. Turning an outcome into a user-facing notice is the
//! HTTP layer's job.

use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

use crate::common::DrawOutput;
use crate::domains::extraction::models::BuildingRecord;
use crate::kernel::ServerDeps;

/// What one press of the extract button produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    /// Nothing drawn on the map; no request was made.
    NoPolygon,
    /// The query ran but nothing survived normalization.
    NoBuildings,
    Extracted(Vec<BuildingRecord>),
}

/// Run one extraction for the drawn polygon.
///
/// Errors cover everything between reading the geometry and decoding the
/// Overpass response. Callers surface them as a single generic failure.
#[instrument(skip_all)]
pub async fn extract_buildings(draw: &DrawOutput, deps: &ServerDeps) -> Result<ExtractionOutcome> {
    let Some(polygon) = draw.polygon().context("Failed to read drawn geometry")? else {
        warn!("Extraction requested without a drawn polygon");
        return Ok(ExtractionOutcome::NoPolygon);
    };

    info!(vertices = polygon.vertex_count(), "Extracting buildings in polygon");

    let elements = deps
        .overpass
        .buildings_in_polygon(&polygon.lon_lat())
        .await
        .context("Overpass query failed")?;

    let records = deps.normalizer.normalize(&elements);
    info!(
        elements = elements.len(),
        records = records.len(),
        "Normalized Overpass elements"
    );

    if records.is_empty() {
        return Ok(ExtractionOutcome::NoBuildings);
    }

    Ok(ExtractionOutcome::Extracted(records))
}
