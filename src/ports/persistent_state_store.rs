//! Persistent State Store Port - Interface for durable per-user game state.
//!
//! The platform hosts the actual table; the skill only loads a user's record
//! at the start of a conversation and saves it once when the conversation ends.

use async_trait::async_trait;

use crate::domain::foundation::{UserId, ValidationError};
use crate::domain::game::GameState;

/// Errors that can occur during persistent state operations
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Failed to serialize state: {0}")]
    Serialization(String),

    #[error("Failed to deserialize state: {0}")]
    Deserialization(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Stored record for user {user_id} is invalid: {source}")]
    CorruptRecord {
        user_id: UserId,
        #[source]
        source: ValidationError,
    },
}

/// Port for loading and saving a user's game state.
///
/// Keyed by the platform user identifier. No versioning or conflict
/// resolution is exposed; the platform serializes access per user.
#[async_trait]
pub trait PersistentStateStore: Send + Sync {
    /// Load the stored state for a user.
    ///
    /// # Returns
    /// `None` if the user has never saved a game
    ///
    /// # Errors
    /// Returns `PersistenceError` if the record cannot be read or violates
    /// the state invariants
    async fn load(&self, user_id: &UserId) -> Result<Option<GameState>, PersistenceError>;

    /// Save a user's state, replacing any previous record.
    ///
    /// # Errors
    /// Returns `PersistenceError` if the write fails
    async fn save(&self, user_id: &UserId, state: &GameState) -> Result<(), PersistenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistent_state_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn PersistentStateStore) {}
    }

    #[test]
    fn corrupt_record_names_user_and_cause() {
        let err = PersistenceError::CorruptRecord {
            user_id: UserId::new("user-1").unwrap(),
            source: ValidationError::out_of_range("facts_index", -1, 9, 42),
        };
        let message = err.to_string();
        assert!(message.contains("user-1"));
        assert!(message.contains("facts_index"));
    }

    #[test]
    fn io_error_displays_message() {
        let err = PersistenceError::Io("disk full".to_string());
        assert_eq!(err.to_string(), "IO error: disk full");
    }
}
