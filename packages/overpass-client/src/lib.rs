//! Pure Overpass API client.
//!
//! A minimal client for the Overpass interpreter endpoint. Builds polygon
//! building queries and posts them as raw Overpass QL.
//!
//! # Example
//!
//! ```rust,ignore
//! use overpass_client::{BuildingQuery, OverpassClient};
//!
//! let client = OverpassClient::new();
//! let ring = vec![(-71.067, 42.348), (-71.065, 42.348), (-71.065, 42.350), (-71.067, 42.348)];
//!
//! let resp = client.buildings_in_polygon(&BuildingQuery::new(ring)).await?;
//! for element in &resp.elements {
//!     println!("{} {:?}", element.id, element.tag("name"));
//! }
//! ```

pub mod error;
pub mod query;
pub mod types;

pub use error::{OverpassError, Result};
pub use query::{poly_filter, BuildingQuery, DEFAULT_QUERY_TIMEOUT_SECS};
pub use types::{Center, Element, OverpassResponse};

use std::time::Duration;

/// Public instance with generous limits; the main overpass-api.de mirror
/// rate-limits aggressively.
pub const DEFAULT_ENDPOINT: &str = "https://overpass.kumi.systems/api/interpreter";

#[derive(Clone)]
pub struct OverpassClient {
    client: reqwest::Client,
    endpoint: String,
}

impl OverpassClient {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Client with a local HTTP timeout. Without one the request waits as long
    /// as the server keeps the connection open.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OverpassError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post raw Overpass QL and decode the JSON response.
    pub async fn interpret(&self, query: &str) -> Result<OverpassResponse> {
        tracing::debug!(endpoint = %self.endpoint, bytes = query.len(), "Posting Overpass query");

        let resp = self
            .client
            .post(&self.endpoint)
            .body(query.to_string())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(OverpassError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.bytes().await?;
        let parsed: OverpassResponse = serde_json::from_slice(&body)?;

        if let Some(remark) = &parsed.remark {
            tracing::warn!(remark = %remark, "Overpass returned a remark");
        }

        Ok(parsed)
    }

    /// Fetch building ways and relations inside the query's polygon.
    pub async fn buildings_in_polygon(&self, query: &BuildingQuery) -> Result<OverpassResponse> {
        tracing::info!(vertices = query.vertex_count(), "Querying buildings in polygon");

        let resp = self.interpret(&query.to_overpass_ql()).await?;
        tracing::info!(count = resp.elements.len(), "Fetched Overpass elements");

        Ok(resp)
    }
}

impl Default for OverpassClient {
    fn default() -> Self {
        Self::new()
    }
}
