//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the skill to the outside world:
//! - `alexa` - JSON request/response envelopes of the voice platform
//! - `storage` - Session and persistent state stores (in-memory, YAML files)

pub mod alexa;
pub mod storage;

pub use alexa::{EnvelopeError, RequestEnvelope, ResponseEnvelope};
pub use storage::{FileStateStorage, InMemorySessionStorage, InMemoryStateStorage};
