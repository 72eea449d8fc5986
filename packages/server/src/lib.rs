// Site Data Extractor - API Core
//
// Draw a polygon on a map, pull every building inside it from the Overpass
// API, keep the result per session and export it as a CSV geo-report.
//
// Architecture: common (geometry capture) → domains (extraction, session)
// → server (axum routes), with external services behind kernel traits.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
