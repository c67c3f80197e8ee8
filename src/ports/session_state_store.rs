//! Session State Store Port - game state scoped to one conversation.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::game::GameState;

/// Port for the per-conversation copy of a user's game state.
///
/// Entries live from the first request of a session until the session ends,
/// at which point the skill persists the state and clears the entry.
#[async_trait]
pub trait SessionStateStore: Send + Sync {
    /// State for a session, or `None` if nothing is stored yet.
    async fn load(&self, session_id: &SessionId) -> Option<GameState>;

    /// Store the state for a session.
    async fn save(&self, session_id: &SessionId, state: GameState);

    /// Drop the state for a session.
    async fn clear(&self, session_id: &SessionId);
}
