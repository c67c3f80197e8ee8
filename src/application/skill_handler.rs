//! SkillHandler - resolves state, dispatches, and writes state back.

use std::sync::Arc;

use tracing::{debug, error};

use super::interceptors::{log_request, log_response};
use super::{DispatchTable, HandlerContext, HandlerOutcome, Route, SkillError};
use crate::domain::facts::FactCatalog;
use crate::domain::foundation::StateMachine;
use crate::domain::game::{GameState, GameStatus};
use crate::domain::skill::{SkillEvent, SkillRequest, SkillResponse, Speech};
use crate::ports::{PersistentStateStore, SessionStateStore};

/// Result of handling one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillOutcome {
    pub response: SkillResponse,
    /// State to carry into the next request of this session; `None` once the
    /// session has ended.
    pub session_state: Option<GameState>,
}

/// Entry point for every platform event.
///
/// Each call runs to completion, including any persistence write, before
/// returning. Handler failures never escape: they are logged and answered
/// with a clarification prompt, and the session stays open.
pub struct SkillHandler {
    table: DispatchTable,
    speech: Speech,
    catalog: FactCatalog,
    persistent: Arc<dyn PersistentStateStore>,
    sessions: Arc<dyn SessionStateStore>,
}

impl SkillHandler {
    pub fn new(
        table: DispatchTable,
        speech: Speech,
        persistent: Arc<dyn PersistentStateStore>,
        sessions: Arc<dyn SessionStateStore>,
    ) -> Self {
        Self {
            table,
            speech,
            catalog: FactCatalog::cat_facts(),
            persistent,
            sessions,
        }
    }

    /// Handle a request, falling back to a clarification prompt on error.
    pub async fn handle(&self, request: &SkillRequest) -> SkillOutcome {
        log_request(request);

        let outcome = match self.dispatch(request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(
                    request_id = %request.context.request_id,
                    "Encountered following error: {}",
                    e
                );
                // The platform sends nothing after a session-ended event
                let session_state = if matches!(request.event, SkillEvent::SessionEnded(_)) {
                    self.sessions.clear(&request.context.session_id).await;
                    None
                } else {
                    self.current_session_state(request).await
                };
                SkillOutcome {
                    response: self.speech.clarify(),
                    session_state,
                }
            }
        };

        log_response(request, &outcome);
        outcome
    }

    async fn dispatch(&self, request: &SkillRequest) -> Result<SkillOutcome, SkillError> {
        let context = &request.context;
        let route = Route::for_event(&request.event);
        let handler = self
            .table
            .get(route)
            .ok_or(SkillError::UnhandledRequest(route))?;

        let session_state = self.current_session_state(request).await;
        let persisted = if route == Route::Launch || session_state.is_none() {
            self.persistent.load(&context.user_id).await?
        } else {
            None
        };

        // Launch replaces any session copy with the stored record
        let before = if route == Route::Launch {
            GameStatus::of(persisted.as_ref())
        } else {
            GameStatus::of(session_state.as_ref().or(persisted.as_ref()))
        };

        let mut ctx = HandlerContext::new(request, &self.speech, &self.catalog)
            .with_state(session_state)
            .with_persisted(persisted);
        let HandlerOutcome {
            response,
            end_session,
        } = handler(&mut ctx)?;

        // A handler that never touched the game leaves nothing to check
        if let Some(state) = ctx.state.as_ref() {
            let after = state.status();
            before
                .transition_to(after)
                .map_err(|_| SkillError::InvalidTransition {
                    from: before,
                    to: after,
                })?;
            if before != after {
                debug!(%route, from = %before, to = %after, "Game status changed");
            }
        }

        if end_session {
            if let Some(state) = ctx.state {
                self.persistent.save(&context.user_id, &state).await?;
                debug!(
                    user_id = %context.user_id,
                    times_played = state.times_played(),
                    facts_index = %state.facts_index(),
                    "Persisted game state"
                );
            }
            self.sessions.clear(&context.session_id).await;
            return Ok(SkillOutcome {
                response,
                session_state: None,
            });
        }

        if let Some(state) = ctx.state {
            self.sessions.save(&context.session_id, state).await;
        }
        Ok(SkillOutcome {
            response,
            session_state: ctx.state,
        })
    }

    /// Session state from the store, or else what the platform echoed back.
    async fn current_session_state(&self, request: &SkillRequest) -> Option<GameState> {
        self.sessions
            .load(&request.context.session_id)
            .await
            .or(request.context.session_state)
    }
}
