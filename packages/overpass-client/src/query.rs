//! Overpass QL builders.
//!
//! Vertices are taken in (longitude, latitude) order, the way GeoJSON and the
//! map draw plugin hand them out. Overpass wants the reverse inside `poly:`.

use std::fmt::Write;

/// Advisory server-side timeout written into the `[timeout:N]` header.
pub const DEFAULT_QUERY_TIMEOUT_SECS: u32 = 30;

/// Render a ring as the `poly:` filter body: `"lat lon lat lon ..."`.
///
/// One pair per input vertex, in input order. No validation happens here; a
/// degenerate ring is the server's problem.
pub fn poly_filter(ring: &[(f64, f64)]) -> String {
    let mut out = String::with_capacity(ring.len() * 24);
    for (i, (lon, lat)) in ring.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{} {}", lat, lon);
    }
    out
}

/// Query for every building way and relation inside a polygon, with center
/// points for both.
#[derive(Debug, Clone)]
pub struct BuildingQuery {
    ring: Vec<(f64, f64)>,
    timeout_secs: u32,
}

impl BuildingQuery {
    pub fn new(ring: Vec<(f64, f64)>) -> Self {
        Self {
            ring,
            timeout_secs: DEFAULT_QUERY_TIMEOUT_SECS,
        }
    }

    pub fn timeout(mut self, secs: u32) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.ring.len()
    }

    pub fn to_overpass_ql(&self) -> String {
        let poly = poly_filter(&self.ring);
        format!(
            "[out:json][timeout:{timeout}];\n\
             (\n\
             \x20 way[\"building\"](poly:\"{poly}\");\n\
             \x20 relation[\"building\"](poly:\"{poly}\");\n\
             );\n\
             out center;\n",
            timeout = self.timeout_secs,
            poly = poly,
        )
    }
}
