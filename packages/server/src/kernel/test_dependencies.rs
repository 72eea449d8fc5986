// Mock implementations for testing
//
// Provides a scripted Overpass service that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use overpass_client::{Center, Element};
use std::sync::{Arc, Mutex};

use super::BaseOverpassService;

// =============================================================================
// Mock Overpass Service
// =============================================================================

pub struct MockOverpassService {
    elements: Arc<Mutex<Vec<Element>>>,
    failure: Option<String>,
    calls: Arc<Mutex<Vec<Vec<(f64, f64)>>>>,
}

impl MockOverpassService {
    pub fn new() -> Self {
        Self {
            elements: Arc::new(Mutex::new(Vec::new())),
            failure: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Elements returned by every call
    pub fn with_elements(self, elements: Vec<Element>) -> Self {
        *self.elements.lock().unwrap() = elements;
        self
    }

    /// Make every call fail with this message
    pub fn with_failure(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// Rings passed to each call, in call order
    pub fn calls(&self) -> Vec<Vec<(f64, f64)>> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockOverpassService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseOverpassService for MockOverpassService {
    async fn buildings_in_polygon(&self, ring: &[(f64, f64)]) -> Result<Vec<Element>> {
        self.calls.lock().unwrap().push(ring.to_vec());

        if let Some(message) = &self.failure {
            anyhow::bail!("{}", message);
        }

        Ok(self.elements.lock().unwrap().clone())
    }
}

/// Build a way element with the given tags and optional (lat, lon) center.
pub fn sample_element(id: i64, tags: &[(&str, &str)], center: Option<(f64, f64)>) -> Element {
    Element {
        element_type: "way".to_string(),
        id,
        center: center.map(|(lat, lon)| Center { lat, lon }),
        tags: tags
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}
