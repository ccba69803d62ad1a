use crate::app::AppResult;

use serde_json::Value;

/// What a command prints on stdout.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Json(Value),
    Text(String),
}

impl Output {
    pub fn render(&self, pretty: bool) -> AppResult<String> {
        match self {
            Output::Json(value) if pretty => Ok(serde_json::to_string_pretty(value)?),
            Output::Json(value) => Ok(serde_json::to_string(value)?),
            Output::Text(text) => Ok(text.clone()),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Output::Json(value) => Some(value),
            Output::Text(_) => None,
        }
    }
}

impl From<Value> for Output {
    fn from(value: Value) -> Self {
        Output::Json(value)
    }
}
