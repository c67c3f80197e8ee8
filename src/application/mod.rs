//! Application layer - dispatch and orchestration.
//!
//! `SkillHandler` is the entry point: it resolves state for a request, routes
//! it through a `DispatchTable` of handler functions, writes state back, and
//! turns any failure into a spoken retry prompt.

mod dispatcher;
mod error;
pub mod handlers;
mod interceptors;
mod skill_handler;

pub use dispatcher::{DispatchTable, Route};
pub use error::SkillError;
pub use handlers::{HandlerContext, HandlerFn, HandlerOutcome};
pub use skill_handler::{SkillHandler, SkillOutcome};
