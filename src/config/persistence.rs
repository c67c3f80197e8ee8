//! Persistence configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where per-user game state lives between sessions
#[derive(Debug, Clone, Deserialize)]
pub struct PersistenceConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: PersistenceBackend,

    /// Table name; one directory per table under `data_dir`
    pub table: Option<String>,

    /// Root directory for the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

/// Storage backend for persistent state
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceBackend {
    /// Process-local map; state is lost on exit
    #[default]
    Memory,
    /// One YAML file per user
    File,
}

impl PersistenceConfig {
    /// Directory holding the records of the configured table
    pub fn table_dir(&self) -> Option<PathBuf> {
        self.table.as_ref().map(|table| self.data_dir.join(table))
    }

    /// Validate persistence configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(table) = &self.table {
            let table = table.trim();
            if table.is_empty()
                || table == "."
                || table == ".."
                || table.contains(['/', '\\'])
            {
                return Err(ValidationError::InvalidTable(table.to_string()));
            }
        }
        if self.backend == PersistenceBackend::File && self.table.is_none() {
            return Err(ValidationError::MissingRequired("persistence.table"));
        }
        Ok(())
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            backend: PersistenceBackend::default(),
            table: None,
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
