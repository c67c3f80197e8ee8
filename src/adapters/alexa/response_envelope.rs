//! Outbound response envelope DTOs.

use serde::Serialize;

use crate::application::SkillOutcome;
use crate::domain::game::GameState;
use crate::domain::skill::SkillResponse;

const ENVELOPE_VERSION: &str = "1.0";

/// Top-level response envelope returned to the platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<GameState>,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl ResponseEnvelope {
    /// Wrap a response and the session state to carry into the next request.
    pub fn new(response: &SkillResponse, session_attributes: Option<GameState>) -> Self {
        let body = if response.is_empty() && !response.should_end_session {
            ResponseBody::default()
        } else {
            ResponseBody {
                output_speech: response.speech.clone().map(plain_text),
                reprompt: response.reprompt.clone().map(|text| Reprompt {
                    output_speech: plain_text(text),
                }),
                should_end_session: Some(response.should_end_session),
            }
        };
        Self {
            version: ENVELOPE_VERSION.to_string(),
            session_attributes,
            response: body,
        }
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&SkillOutcome> for ResponseEnvelope {
    fn from(outcome: &SkillOutcome) -> Self {
        Self::new(&outcome.response, outcome.session_state)
    }
}

fn plain_text(text: String) -> OutputSpeech {
    OutputSpeech::PlainText { text }
}
