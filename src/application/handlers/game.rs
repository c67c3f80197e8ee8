//! Handlers that start, move, or reset a game.

use super::{HandlerContext, HandlerOutcome};
use crate::application::SkillError;
use crate::domain::facts::FactNumber;
use crate::domain::game::{Advance, GameState};
use crate::domain::skill::FACT_NUMBER_SLOT;

/// Open the skill: adopt the stored record (or a fresh one) as the session state.
pub fn launch(ctx: &mut HandlerContext<'_>) -> Result<HandlerOutcome, SkillError> {
    let state = ctx.persisted.unwrap_or_else(GameState::new);
    ctx.state = Some(state);

    let response = if state.can_play() {
        ctx.speech.welcome()
    } else {
        ctx.speech.welcome_exhausted()
    };
    Ok(HandlerOutcome::reply(response))
}

/// Tell a specific fact. Numbers outside 1-10, or text that is not a
/// number, get an explanation and leave the state alone.
pub fn fact_number(ctx: &mut HandlerContext<'_>) -> Result<HandlerOutcome, SkillError> {
    let request = ctx.request;
    let raw = request
        .event
        .intent()
        .and_then(|intent| intent.slot(FACT_NUMBER_SLOT))
        .ok_or(SkillError::MissingSlot(FACT_NUMBER_SLOT))?;

    match FactNumber::parse(raw) {
        Ok(number) => {
            let catalog = ctx.catalog;
            let fact = ctx.game().jump_to(number, catalog);
            Ok(HandlerOutcome::reply(ctx.speech.numbered_fact(number, fact)))
        }
        Err(e) => {
            tracing::debug!(slot_value = raw, "Rejected fact number: {}", e);
            Ok(HandlerOutcome::reply(ctx.speech.fact_number_out_of_range()))
        }
    }
}

/// Reset to before the first fact.
pub fn start_over(ctx: &mut HandlerContext<'_>) -> Result<HandlerOutcome, SkillError> {
    ctx.game().restart();
    Ok(HandlerOutcome::reply(ctx.speech.start_over()))
}

/// Tell the next fact, or say there are none left.
pub fn yes(ctx: &mut HandlerContext<'_>) -> Result<HandlerOutcome, SkillError> {
    let catalog = ctx.catalog;
    let response = match ctx.game().advance(catalog) {
        Advance::Told(fact) => ctx.speech.next_fact(fact),
        Advance::Exhausted => ctx.speech.no_more_facts(),
    };
    Ok(HandlerOutcome::reply(response))
}
