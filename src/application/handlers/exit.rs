//! Handlers that close the conversation.
//!
//! Each one counts the finished session with `record_play` and returns an
//! outcome that makes `SkillHandler` persist the state.

use super::{HandlerContext, HandlerOutcome};
use crate::application::SkillError;
use crate::domain::skill::{SkillEvent, SkillResponse};

pub fn no(ctx: &mut HandlerContext<'_>) -> Result<HandlerOutcome, SkillError> {
    ctx.game().record_play();
    Ok(HandlerOutcome::finish(ctx.speech.see_you_soon()))
}

pub fn stop_or_cancel(ctx: &mut HandlerContext<'_>) -> Result<HandlerOutcome, SkillError> {
    ctx.game().record_play();
    Ok(HandlerOutcome::finish(ctx.speech.thanks_for_playing()))
}

/// The platform closed the session; nothing is spoken.
pub fn session_ended(ctx: &mut HandlerContext<'_>) -> Result<HandlerOutcome, SkillError> {
    if let SkillEvent::SessionEnded(reason) = &ctx.request.event {
        tracing::info!(
            session_id = %ctx.request.context.session_id,
            "Reason for ending session: {}",
            reason
        );
    }
    ctx.game().record_play();
    Ok(HandlerOutcome::finish(SkillResponse::empty()))
}
