//! Session domain - per-user map state between refreshes
//!
//! One `SessionState` per browser session: the remembered viewport plus the
//! last extraction's records and markers. Held in memory only.

pub mod models;
pub mod store;

pub use models::{
    ExtractionResult, LatLon, Marker, SessionPhase, SessionState, Viewport, DEFAULT_CENTER,
    DEFAULT_ZOOM,
};
pub use store::{SessionId, SessionStore};
