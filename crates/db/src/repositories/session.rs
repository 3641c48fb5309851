//! Session storage backed by a concurrent map.

use dashmap::DashMap;
use yala_core::session::SessionStorage;
use yala_shared::types::{SessionId, UserId};

/// In-memory [`SessionStorage`].
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    sessions: DashMap<SessionId, UserId>,
}

impl MemorySessionStorage {
    /// Creates empty session storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of authenticated sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns true if no session is authenticated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self, session_id: SessionId) -> Option<UserId> {
        self.sessions.get(&session_id).map(|entry| entry.value().clone())
    }

    fn persist(&self, session_id: SessionId, user_id: UserId) {
        self.sessions.insert(session_id, user_id);
    }

    fn remove(&self, session_id: SessionId) -> Option<UserId> {
        self.sessions.remove(&session_id).map(|(_, user_id)| user_id)
    }
}
