//! Errors raised while handling a request.

use thiserror::Error;

use super::Route;
use crate::domain::game::GameStatus;
use crate::ports::PersistenceError;

/// Failures inside a handler or the state plumbing around it.
///
/// None of these end the session; `SkillHandler` logs them and asks the user
/// to repeat themselves.
#[derive(Debug, Error)]
pub enum SkillError {
    #[error("Intent is missing required slot '{0}'")]
    MissingSlot(&'static str),

    #[error("No handler registered for {0}")]
    UnhandledRequest(Route),

    #[error("Persistence failed: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Handler moved game from {from} to {to}")]
    InvalidTransition { from: GameStatus, to: GameStatus },
}
