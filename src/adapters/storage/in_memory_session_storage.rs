//! In-Memory Session Storage Adapter
//!
//! Holds the game state of open conversations, keyed by session id.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::domain::game::GameState;
use crate::ports::SessionStateStore;

/// In-memory storage for session-scoped game state
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStorage {
    sessions: Arc<RwLock<HashMap<SessionId, GameState>>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions currently holding state
    pub async fn open_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStateStore for InMemorySessionStorage {
    async fn load(&self, session_id: &SessionId) -> Option<GameState> {
        self.sessions.read().await.get(session_id).copied()
    }

    async fn save(&self, session_id: &SessionId, state: GameState) {
        self.sessions.write().await.insert(session_id.clone(), state);
    }

    async fn clear(&self, session_id: &SessionId) {
        self.sessions.write().await.remove(session_id);
    }
}
