//! Request handlers.
//!
//! Each handler is a plain function over a [`HandlerContext`]: it reads and
//! mutates the game state in the context and returns what to say. Handlers
//! never touch storage; `SkillHandler` loads state before and saves it after.

mod exit;
mod game;
mod guidance;

pub use exit::{no, session_ended, stop_or_cancel};
pub use game::{fact_number, launch, start_over, yes};
pub use guidance::{fallback, help};

use super::SkillError;
use crate::domain::facts::FactCatalog;
use crate::domain::game::GameState;
use crate::domain::skill::{SkillRequest, SkillResponse, Speech};

/// Signature shared by every entry in the dispatch table.
pub type HandlerFn = fn(&mut HandlerContext<'_>) -> Result<HandlerOutcome, SkillError>;

/// Everything a handler may read, plus the state it may change.
#[derive(Debug)]
pub struct HandlerContext<'a> {
    pub request: &'a SkillRequest,
    pub speech: &'a Speech,
    pub catalog: &'a FactCatalog,
    /// Session copy of the user's state; `None` until something creates it.
    pub state: Option<GameState>,
    /// Stored record, loaded when the request needs it.
    pub persisted: Option<GameState>,
}

impl<'a> HandlerContext<'a> {
    pub fn new(request: &'a SkillRequest, speech: &'a Speech, catalog: &'a FactCatalog) -> Self {
        Self {
            request,
            speech,
            catalog,
            state: None,
            persisted: None,
        }
    }

    pub fn with_state(mut self, state: Option<GameState>) -> Self {
        self.state = state;
        self
    }

    pub fn with_persisted(mut self, persisted: Option<GameState>) -> Self {
        self.persisted = persisted;
        self
    }

    /// The session state, created from the stored record (or fresh) if absent.
    pub fn game(&mut self) -> &mut GameState {
        let persisted = self.persisted;
        self.state
            .get_or_insert_with(|| persisted.unwrap_or_default())
    }
}

/// What a handler produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerOutcome {
    pub response: SkillResponse,
    /// The conversation is over: persist the state and drop the session.
    pub end_session: bool,
}

impl HandlerOutcome {
    /// Respond and keep the session going.
    pub fn reply(response: SkillResponse) -> Self {
        Self {
            response,
            end_session: false,
        }
    }

    /// Respond and finish the session.
    pub fn finish(response: SkillResponse) -> Self {
        Self {
            response,
            end_session: true,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::domain::skill::{IntentName, SkillEvent};

    #[test]
    fn game_prefers_existing_session_state() {
        let request = request(SkillEvent::Launch);
        let speech = speech();
        let catalog = FactCatalog::cat_facts();
        let mut session = GameState::new();
        session.record_play();

        let mut ctx = HandlerContext::new(&request, &speech, &catalog)
            .with_state(Some(session))
            .with_persisted(Some(GameState::new()));

        assert_eq!(ctx.game().times_played(), 1);
    }

    #[test]
    fn game_hydrates_from_persisted_record() {
        let request = intent_request(IntentName::Yes);
        let speech = speech();
        let catalog = FactCatalog::cat_facts();
        let mut stored = GameState::new();
        stored.record_play();
        stored.record_play();

        let mut ctx =
            HandlerContext::new(&request, &speech, &catalog).with_persisted(Some(stored));

        assert_eq!(ctx.game().times_played(), 2);
        assert_eq!(ctx.state, Some(stored));
    }

    #[test]
    fn game_starts_fresh_without_any_record() {
        let request = intent_request(IntentName::Yes);
        let speech = speech();
        let catalog = FactCatalog::cat_facts();
        let mut ctx = HandlerContext::new(&request, &speech, &catalog);

        assert_eq!(*ctx.game(), GameState::new());
    }

    #[test]
    fn outcome_constructors_set_end_session() {
        assert!(!HandlerOutcome::reply(SkillResponse::empty()).end_session);
        assert!(HandlerOutcome::finish(SkillResponse::empty()).end_session);
    }
}
