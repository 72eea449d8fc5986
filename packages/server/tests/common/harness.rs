//! Test harness: the real router over an in-memory session store and a
//! scripted Overpass service.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use site_extractor::domains::session::SessionStore;
use site_extractor::kernel::{BaseOverpassService, MockOverpassService, ServerDeps};
use site_extractor::server::{build_app, AxumAppState};

pub struct TestHarness {
    pub app: Router,
    pub sessions: SessionStore,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }
}

impl TestHarness {
    pub fn new(overpass: Arc<dyn BaseOverpassService>) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let sessions = SessionStore::default();
        let state = AxumAppState::new(ServerDeps::for_tests(overpass), sessions.clone());

        Self {
            app: build_app(state, &[]),
            sessions,
        }
    }

    pub fn with_mock(mock: MockOverpassService) -> Self {
        Self::new(Arc::new(mock))
    }

    /// Second router over the same sessions, backed by a different Overpass mock.
    pub fn sharing_sessions(&self, mock: MockOverpassService) -> Self {
        let state = AxumAppState::new(ServerDeps::for_tests(Arc::new(mock)), self.sessions.clone());

        Self {
            app: build_app(state, &[]),
            sessions: self.sessions.clone(),
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Create a session and return its id.
    pub async fn create_session(&self) -> String {
        let resp = self.request(Method::POST, "/api/sessions", None).await;
        assert_eq!(resp.status, StatusCode::CREATED);
        resp.json()["id"]
            .as_str()
            .expect("session id")
            .to_string()
    }

    pub async fn extract(&self, id: &str, body: Value) -> TestResponse {
        self.request(
            Method::POST,
            &format!("/api/sessions/{}/extract", id),
            Some(body),
        )
        .await
    }
}
