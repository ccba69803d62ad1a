use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const MAX_DESCRIPTION_LENGTH: usize = 100000;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 10000;

pub const MIN_COMMENT_LENGTH: usize = 1;
pub const MAX_COMMENT_LENGTH: usize = 20000;
pub const DEFAULT_MAX_COMMENT_LENGTH: usize = 5000;

/// Field limits checked before anything reaches the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length for project, worksheet, column and task titles
    pub max_title_length: usize,
    /// Maximum length for descriptions
    pub max_description_length: usize,
    /// Maximum length for comment and reply bodies
    pub max_comment_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            max_comment_length: DEFAULT_MAX_COMMENT_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_title_length < MIN_TITLE_LENGTH || self.max_title_length > MAX_TITLE_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.max_title_length must be {}-{}, got {}",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if self.max_description_length > MAX_DESCRIPTION_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.max_description_length must be 0-{}, got {}",
                MAX_DESCRIPTION_LENGTH, self.max_description_length
            )));
        }

        if self.max_comment_length < MIN_COMMENT_LENGTH
            || self.max_comment_length > MAX_COMMENT_LENGTH
        {
            return Err(ConfigError::validation(format!(
                "validation.max_comment_length must be {}-{}, got {}",
                MIN_COMMENT_LENGTH, MAX_COMMENT_LENGTH, self.max_comment_length
            )));
        }

        Ok(())
    }
}
