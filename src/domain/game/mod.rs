//! Game module - per-user progress through the fact catalog.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized --launch--> Ready(-1) --yes / fact N--> Ready(0..=9)
//!                               ^                            |
//!                               |                      yes at index 9
//!                         start over / fact N                 v
//!                               +------------------------ Exhausted
//! ```

mod facts_index;
mod state;
mod status;

pub use facts_index::FactsIndex;
pub use state::{Advance, GameState, GameStateRecord};
pub use status::GameStatus;
