//! Handlers that only talk; neither touches the game state.

use super::{HandlerContext, HandlerOutcome};
use crate::application::SkillError;

pub fn help(ctx: &mut HandlerContext<'_>) -> Result<HandlerOutcome, SkillError> {
    Ok(HandlerOutcome::reply(ctx.speech.help()))
}

/// Anything the interaction model could not match.
pub fn fallback(ctx: &mut HandlerContext<'_>) -> Result<HandlerOutcome, SkillError> {
    if let Some(intent) = ctx.request.event.intent() {
        tracing::debug!(intent = %intent.name, "Falling back for unmatched intent");
    }
    Ok(HandlerOutcome::reply(ctx.speech.fallback()))
}
