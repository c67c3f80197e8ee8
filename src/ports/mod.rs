//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the skill and the platform services around it. Adapters implement these ports.
//!
//! ## State Ports
//!
//! - `PersistentStateStore` - Durable per-user game state, written at session end
//! - `SessionStateStore` - Game state scoped to one conversation

mod persistent_state_store;
mod session_state_store;

pub use persistent_state_store::{PersistenceError, PersistentStateStore};
pub use session_state_store::SessionStateStore;
