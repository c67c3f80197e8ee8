//! In-Memory State Storage Adapter
//!
//! Stores persistent game state in memory. Contents are lost when the
//! process exits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::domain::game::GameState;
use crate::ports::{PersistenceError, PersistentStateStore};

/// In-memory storage for per-user game state
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateStorage {
    states: Arc<RwLock<HashMap<UserId, GameState>>>,
}

impl InMemoryStateStorage {
    /// Create a new, empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-populated with one user's state
    pub fn with_state(user_id: UserId, state: GameState) -> Self {
        let mut states = HashMap::new();
        states.insert(user_id, state);
        Self {
            states: Arc::new(RwLock::new(states)),
        }
    }

    /// Get the number of stored states
    pub async fn state_count(&self) -> usize {
        self.states.read().await.len()
    }
}

#[async_trait]
impl PersistentStateStore for InMemoryStateStorage {
    async fn load(&self, user_id: &UserId) -> Result<Option<GameState>, PersistenceError> {
        Ok(self.states.read().await.get(user_id).copied())
    }

    async fn save(&self, user_id: &UserId, state: &GameState) -> Result<(), PersistenceError> {
        self.states.write().await.insert(user_id.clone(), *state);
        Ok(())
    }
}
