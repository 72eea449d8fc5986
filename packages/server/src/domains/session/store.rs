use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domains::extraction::models::BuildingRecord;
use crate::domains::session::models::{SessionState, Viewport};

/// Session identifier (random UUID)
pub type SessionId = Uuid;

/// In-memory session store
///
/// Sessions expire once idle for longer than the TTL (24 hours by default).
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionState>>>,
    default_viewport: Viewport,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(default_viewport: Viewport, ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            default_viewport,
            ttl,
        }
    }

    pub fn default_viewport(&self) -> Viewport {
        self.default_viewport
    }

    /// Create an Empty session at the default viewport
    pub async fn create_session(&self) -> (SessionId, SessionState) {
        let id = Uuid::new_v4();
        let state = SessionState::new(self.default_viewport);
        let mut sessions = self.sessions.write().await;
        sessions.insert(id, state.clone());
        (id, state)
    }

    /// Get a snapshot of the session, `None` if unknown or expired.
    ///
    /// Reads count as activity and restart the idle timer.
    pub async fn get_session(&self, id: SessionId) -> Option<SessionState> {
        self.update(id, SessionState::touch).await
    }

    /// Replace the session's result with a fresh extraction
    pub async fn apply_extraction(
        &self,
        id: SessionId,
        records: Vec<BuildingRecord>,
        view: Option<Viewport>,
    ) -> Option<SessionState> {
        self.update(id, |state| state.apply_extraction(records, view))
            .await
    }

    /// Clear results and return the viewport to the default
    pub async fn reset_session(&self, id: SessionId) -> Option<SessionState> {
        let default_viewport = self.default_viewport;
        self.update(id, |state| state.reset(default_viewport)).await
    }

    /// Delete session, `true` if it existed
    pub async fn delete_session(&self, id: SessionId) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&id).is_some()
    }

    /// Clean up expired sessions (run periodically). Returns how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        let now = Utc::now();
        let ttl = self.ttl;

        sessions.retain(|_, state| now.signed_duration_since(state.updated_at) < ttl);

        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn update<F>(&self, id: SessionId, apply: F) -> Option<SessionState>
    where
        F: FnOnce(&mut SessionState),
    {
        let mut sessions = self.sessions.write().await;
        let state = sessions.get_mut(&id)?;

        if self.is_expired(state) {
            return None;
        }

        apply(state);
        Some(state.clone())
    }

    fn is_expired(&self, state: &SessionState) -> bool {
        Utc::now().signed_duration_since(state.updated_at) >= self.ttl
    }

    #[cfg(test)]
    async fn insert_raw(&self, id: SessionId, state: SessionState) {
        self.sessions.write().await.insert(id, state);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Viewport::default(), Duration::hours(24))
    }
}
