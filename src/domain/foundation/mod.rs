//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the validation error type, and the state machine
//! trait used by the game lifecycle.

mod errors;
mod ids;
mod state_machine;

pub use errors::ValidationError;
pub use ids::{DeviceId, SessionId, UserId};
pub use state_machine::StateMachine;
