//! Application configuration module
//!
//! Configuration is read from environment variables (and a `.env` file when
//! present) using the `config` and `dotenvy` crates. Variables carry the
//! `CAT_FACTS` prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use cat_facts_skill::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Speaking as {}", config.skill.name);
//! ```

mod error;
mod logging;
mod persistence;
mod skill;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use persistence::{PersistenceBackend, PersistenceConfig};
pub use skill::SkillConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// in-memory configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Skill identity (spoken name)
    #[serde(default)]
    pub skill: SkillConfig,

    /// Persistent state backend
    #[serde(default)]
    pub persistence: PersistenceConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `CAT_FACTS__SKILL__NAME="Cat Facts"` -> `skill.name`
    /// - `CAT_FACTS__PERSISTENCE__BACKEND=file` -> `persistence.backend`
    /// - `CAT_FACTS__PERSISTENCE__TABLE=cat-facts-users` -> `persistence.table`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CAT_FACTS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.skill.validate()?;
        self.persistence.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
