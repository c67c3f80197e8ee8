//! Envelope conversion errors.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Reasons an inbound envelope cannot become a skill request.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("Malformed envelope JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Unsupported request type: {0}")]
    UnsupportedRequestType(String),

    #[error("Envelope has no session")]
    MissingSession,

    #[error("Envelope has no user id")]
    MissingUserId,

    #[error("Intent request has no intent")]
    MissingIntent,

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] ValidationError),

    #[error("Invalid session attributes: {0}")]
    InvalidSessionAttributes(String),
}
