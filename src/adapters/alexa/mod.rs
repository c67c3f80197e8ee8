//! Alexa envelope adapter.
//!
//! Converts the platform's JSON request envelope into a typed
//! [`SkillRequest`](crate::domain::skill::SkillRequest), and a handled
//! [`SkillOutcome`](crate::application::SkillOutcome) back into the JSON
//! response envelope. Session attributes travel through both envelopes.

mod error;
mod request_envelope;
mod response_envelope;

pub use error::EnvelopeError;
pub use request_envelope::RequestEnvelope;
pub use response_envelope::{OutputSpeech, Reprompt, ResponseBody, ResponseEnvelope};
