//! Request and response logging around every dispatch.

use tracing::{debug, info};

use super::SkillOutcome;
use crate::domain::skill::SkillRequest;

/// Logs who sent a request and what it asks for.
pub(crate) fn log_request(request: &SkillRequest) {
    let context = &request.context;
    let intent = request.event.intent().map(|i| i.name.as_str()).unwrap_or("-");
    info!(
        request_id = %context.request_id,
        request_type = request.event.kind(),
        intent,
        user_id = %context.user_id,
        device_id = context.device_id.as_ref().map(|d| d.as_str()).unwrap_or("-"),
        new_session = context.new_session,
        "Incoming request"
    );
    debug!(?request, "Incoming request detail");
}

/// Logs what the skill is about to say.
pub(crate) fn log_response(request: &SkillRequest, outcome: &SkillOutcome) {
    info!(
        request_id = %request.context.request_id,
        speech = outcome.response.speech.as_deref().unwrap_or(""),
        should_end_session = outcome.response.should_end_session,
        "Response"
    );
}
