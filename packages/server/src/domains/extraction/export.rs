//! CSV geo-report export.
//!
//! Reports carry a UTF-8 byte order mark so spreadsheet tools pick the right
//! encoding for non-ASCII street and building names.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domains::extraction::models::BuildingRecord;

pub const REPORT_FILE_NAME: &str = "site_gps_report.csv";

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV writer: {0}")]
    Flush(String),
}

/// One CSV row. Column names are the report headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "No.")]
    pub index: usize,
    #[serde(rename = "Building Name")]
    pub name: String,
    #[serde(rename = "Full Mailing Address")]
    pub address: String,
    #[serde(rename = "Floors")]
    pub floors: String,
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
    #[serde(rename = "Usage")]
    pub usage: String,
    #[serde(rename = "Postcode")]
    pub postcode: String,
}

impl From<&BuildingRecord> for ReportRow {
    fn from(record: &BuildingRecord) -> Self {
        Self {
            index: record.index,
            name: record.name.clone(),
            address: record.address.clone(),
            floors: record.floors.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            usage: record.usage.clone(),
            postcode: record.postcode.clone(),
        }
    }
}

/// Encode records as a BOM-prefixed CSV document.
pub fn to_csv(records: &[BuildingRecord]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
    for record in records {
        writer.serialize(ReportRow::from(record))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.error().to_string()))?;

    tracing::debug!(rows = records.len(), bytes = bytes.len(), "Encoded CSV report");
    Ok(bytes)
}

/// Read a report back. A leading BOM is optional.
pub fn parse_report(bytes: &[u8]) -> Result<Vec<ReportRow>, ExportError> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::Reader::from_reader(body);
    reader
        .deserialize()
        .collect::<Result<Vec<ReportRow>, csv::Error>>()
        .map_err(ExportError::from)
}
