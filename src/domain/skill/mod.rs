//! Skill module - typed requests the platform delivers and the responses the
//! skill speaks back.
//!
//! These types are platform-neutral; `adapters::alexa` converts to and from
//! the wire envelopes.

mod request;
mod response;
mod speech;

pub use request::{
    Intent, IntentName, RequestContext, SessionEndedReason, SkillEvent, SkillRequest,
    FACT_NUMBER_SLOT,
};
pub use response::SkillResponse;
pub use speech::Speech;
