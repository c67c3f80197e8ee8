//! Storage Adapters
//!
//! Implementations of the state ports.
//!
//! ## Available Adapters
//!
//! - **FileStateStorage** - Persists each user's game state as a YAML file
//! - **InMemoryStateStorage** - Persists game state in memory (testing/ephemeral runs)
//! - **InMemorySessionStorage** - Holds per-conversation state
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileStateStorage, InMemorySessionStorage, InMemoryStateStorage};
//!
//! // Production: one file per user under the table directory
//! let persistent = FileStateStorage::new("./data/cat-facts");
//!
//! // Testing: in-memory storage
//! let persistent = InMemoryStateStorage::new();
//! let sessions = InMemorySessionStorage::new();
//! ```

mod file_state_storage;
mod in_memory_session_storage;
mod in_memory_state_storage;

pub use file_state_storage::FileStateStorage;
pub use in_memory_session_storage::InMemorySessionStorage;
pub use in_memory_state_storage::InMemoryStateStorage;
