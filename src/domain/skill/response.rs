//! Outbound response type.

/// What the skill says back, before it is wrapped in a platform envelope.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkillResponse {
    pub speech: Option<String>,
    pub reprompt: Option<String>,
    pub should_end_session: bool,
}

impl SkillResponse {
    /// Speak and keep listening, repeating `reprompt` if the user is silent.
    pub fn ask(speech: impl Into<String>, reprompt: impl Into<String>) -> Self {
        Self {
            speech: Some(speech.into()),
            reprompt: Some(reprompt.into()),
            should_end_session: false,
        }
    }

    /// Speak and close the session.
    pub fn tell_and_end(speech: impl Into<String>) -> Self {
        Self {
            speech: Some(speech.into()),
            reprompt: None,
            should_end_session: true,
        }
    }

    /// No output; used when the platform expects no reply.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when there is nothing to speak.
    pub fn is_empty(&self) -> bool {
        self.speech.is_none() && self.reprompt.is_none()
    }
}
