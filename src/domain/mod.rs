//! Domain layer containing skill logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifiers, validation errors, state machine trait)
//! - `facts` - The immutable fact catalog and spoken fact numbers
//! - `game` - Per-user progress through the catalog
//! - `skill` - Typed requests, responses, and speech templates

pub mod facts;
pub mod foundation;
pub mod game;
pub mod skill;
