//! GameStatus state machine.

use std::fmt;

use super::{FactsIndex, GameState};
use crate::domain::foundation::StateMachine;

/// Lifecycle of a user's game, as seen by one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// No state exists yet for this user.
    Uninitialized,
    /// A game is in progress at the given index.
    Ready(FactsIndex),
    /// Every fact has been told and "yes" was asked again.
    Exhausted,
}

impl GameStatus {
    /// Status of an optional state record; `None` is uninitialized.
    pub fn of(state: Option<&GameState>) -> Self {
        state.map_or(GameStatus::Uninitialized, GameState::status)
    }
}

impl StateMachine for GameStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use GameStatus::*;
        match (self, target) {
            (Uninitialized, Uninitialized) => true,
            (Uninitialized, Ready(_)) => true,
            (Ready(_), Ready(_)) => true,
            (Ready(index), Exhausted) => *index == FactsIndex::LAST,
            (Exhausted, Ready(_)) | (Exhausted, Exhausted) => true,
            _ => false,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use GameStatus::*;
        let ready = FactsIndex::all().map(Ready);
        match self {
            Uninitialized => std::iter::once(Uninitialized).chain(ready).collect(),
            Ready(index) if *index == FactsIndex::LAST => ready.chain([Exhausted]).collect(),
            Ready(_) => ready.collect(),
            Exhausted => ready.chain([Exhausted]).collect(),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Uninitialized => write!(f, "uninitialized"),
            GameStatus::Ready(index) => write!(f, "ready({})", index),
            GameStatus::Exhausted => write!(f, "exhausted"),
        }
    }
}
