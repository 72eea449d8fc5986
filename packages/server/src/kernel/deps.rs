//! Server dependencies (using traits for testability)
//!
//! This module provides the central dependency container used by the domain
//! activities. The Overpass API sits behind a trait so tests can swap it out.

use anyhow::{Context, Result};
use async_trait::async_trait;
use overpass_client::{BuildingQuery, Element, OverpassClient};
use std::sync::Arc;

use crate::config::Config;
use crate::domains::extraction::Normalizer;
use crate::kernel::BaseOverpassService;

// =============================================================================
// OverpassClient Adapter (implements BaseOverpassService trait)
// =============================================================================

/// Wrapper around OverpassClient that implements BaseOverpassService trait
pub struct OverpassAdapter {
    client: OverpassClient,
    query_timeout_secs: u32,
}

impl OverpassAdapter {
    pub fn new(client: OverpassClient, query_timeout_secs: u32) -> Self {
        Self {
            client,
            query_timeout_secs,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = match config.overpass_http_timeout {
            Some(timeout) => OverpassClient::with_timeout(&config.overpass_url, timeout)
                .context("Failed to create Overpass client")?,
            None => OverpassClient::with_endpoint(&config.overpass_url),
        };

        Ok(Self::new(client, config.overpass_query_timeout_secs))
    }
}

#[async_trait]
impl BaseOverpassService for OverpassAdapter {
    async fn buildings_in_polygon(&self, ring: &[(f64, f64)]) -> Result<Vec<Element>> {
        let query = BuildingQuery::new(ring.to_vec()).timeout(self.query_timeout_secs);
        let response = self.client.buildings_in_polygon(&query).await?;
        Ok(response.elements)
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to activities
#[derive(Clone)]
pub struct ServerDeps {
    pub overpass: Arc<dyn BaseOverpassService>,
    pub normalizer: Normalizer,
}

impl ServerDeps {
    pub fn new(overpass: Arc<dyn BaseOverpassService>, normalizer: Normalizer) -> Self {
        Self {
            overpass,
            normalizer,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let adapter = OverpassAdapter::from_config(config)?;
        tracing::info!(endpoint = %config.overpass_url, "Overpass client configured");

        Ok(Self::new(
            Arc::new(adapter),
            Normalizer::new(config.default_city.clone()),
        ))
    }

    /// Dependencies with the given Overpass stand-in and the default normalizer.
    pub fn for_tests(overpass: Arc<dyn BaseOverpassService>) -> Self {
        Self::new(overpass, Normalizer::default())
    }
}
