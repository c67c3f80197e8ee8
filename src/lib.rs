//! Cat Facts - a voice-assistant skill that tells cat facts
//!
//! Users ask for a fact by number or step through the list one "yes" at a
//! time. Progress and a play counter are kept per user between sessions.
//!
//! The crate follows a ports-and-adapters layout: `domain` holds the catalog,
//! the game state and the spoken responses, `application` dispatches platform
//! events to handlers, `ports` declares the storage contracts, and `adapters`
//! implements them alongside the platform's JSON envelopes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
