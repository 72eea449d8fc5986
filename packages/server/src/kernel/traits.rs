// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "normalize buildings") lives in domain functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseOverpassService)

use anyhow::Result;
use async_trait::async_trait;
use overpass_client::Element;

// =============================================================================
// Overpass Trait (Infrastructure - spatial data API)
// =============================================================================

#[async_trait]
pub trait BaseOverpassService: Send + Sync {
    /// Fetch building ways and relations inside a ring of (longitude, latitude) vertices.
    ///
    /// Elements come back in server order, with center points where available.
    async fn buildings_in_polygon(&self, ring: &[(f64, f64)]) -> Result<Vec<Element>>;
}
