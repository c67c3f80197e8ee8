//! Skill configuration

use serde::Deserialize;

use super::error::ValidationError;

/// What the skill calls itself when speaking
#[derive(Debug, Clone, Deserialize)]
pub struct SkillConfig {
    #[serde(default = "default_name")]
    pub name: String,
}

impl SkillConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptySkillName);
        }
        Ok(())
    }
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

fn default_name() -> String {
    "Cat Facts".to_string()
}
