//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Skill name must not be empty")]
    EmptySkillName,

    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid persistence table name: {0}")]
    InvalidTable(String),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
