pub mod board;
pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use board::column_defaults::{BACKLOG_STATUS, BACKLOG_TITLE, backlog_column, default_columns};
pub use board::column_order::{
    is_contiguous, move_column, renumber, sort_by_order, take_worksheet_columns,
};
pub use board::column_deletion::absorbing_sibling;
pub use board::status_slug::status_slug;
pub use error::{CoreError, CoreResult};
pub use models::attachment::Attachment;
pub use models::author::Author;
pub use models::column::Column;
pub use models::comment::Comment;
pub use models::drafts::{NewAttachment, NewTask};
pub use models::priority::Priority;
pub use models::project::Project;
pub use models::project_status::ProjectStatus;
pub use models::reply::Reply;
pub use models::task::Task;
pub use models::updates::{
    ColumnUpdate, ProjectUpdate, TaskUpdate, WorksheetUpdate, apply_optional_text,
};
pub use models::worksheet::Worksheet;
pub use validation::{sanitize_string, validate_optional_text, validate_required_text};

/// Title given to the worksheet created on first access to a project.
pub const DEFAULT_WORKSHEET_TITLE: &str = "Main Board";
