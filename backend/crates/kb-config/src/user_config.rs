use crate::{DEFAULT_USER_ID, DEFAULT_USER_NAME};

use serde::Deserialize;

/// Identity stamped on comments and replies.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub id: String,
    pub name: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            id: String::from(DEFAULT_USER_ID),
            name: String::from(DEFAULT_USER_NAME),
        }
    }
}
