//! Parsing of raw command-line values into domain types.

use crate::app::{AppError, AppResult};

use kb_core::{Priority, ProjectStatus};

use chrono::NaiveDate;
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_id(field: &'static str, value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value.trim()).map_err(|_| AppError::invalid(field, value))
}

#[track_caller]
pub(crate) fn parse_optional_id(field: &'static str, value: Option<&str>) -> AppResult<Option<Uuid>> {
    value.map(|v| parse_id(field, v)).transpose()
}

/// Dates are given as `YYYY-MM-DD`.
#[track_caller]
pub(crate) fn parse_date(field: &'static str, value: Option<&str>) -> AppResult<Option<NaiveDate>> {
    value
        .map(|v| {
            NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").map_err(|_| AppError::invalid(field, v))
        })
        .transpose()
}

#[track_caller]
pub(crate) fn parse_priority(value: Option<&str>) -> AppResult<Option<Priority>> {
    Ok(value.map(str::parse::<Priority>).transpose()?)
}

#[track_caller]
pub(crate) fn parse_project_status(value: Option<&str>) -> AppResult<Option<ProjectStatus>> {
    Ok(value.map(str::parse::<ProjectStatus>).transpose()?)
}
