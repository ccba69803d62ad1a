use crate::Result as ServiceResult;

use kb_config::ValidationConfig;
use kb_core::{validate_optional_text, validate_required_text};

/// Input checks applied before a request reaches a service, so invalid
/// input never touches the store.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    limits: ValidationConfig,
}

impl Validator {
    pub fn new(limits: ValidationConfig) -> Self {
        Self { limits }
    }

    #[track_caller]
    pub fn title(&self, value: &str) -> ServiceResult<String> {
        Ok(validate_required_text(
            value,
            "title",
            self.limits.max_title_length,
        )?)
    }

    #[track_caller]
    pub fn description(&self, value: Option<&str>) -> ServiceResult<Option<String>> {
        Ok(validate_optional_text(
            value,
            "description",
            self.limits.max_description_length,
        )?)
    }

    #[track_caller]
    pub fn comment(&self, value: &str) -> ServiceResult<String> {
        Ok(validate_required_text(
            value,
            "content",
            self.limits.max_comment_length,
        )?)
    }

    #[track_caller]
    pub fn optional_title(&self, value: Option<&str>) -> ServiceResult<Option<String>> {
        value.map(|v| self.title(v)).transpose()
    }
}
