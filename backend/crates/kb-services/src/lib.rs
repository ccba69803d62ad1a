pub mod board;
pub mod error;
pub mod notifier;
pub mod service_context;
pub mod services;
pub mod simulator;
pub mod sync;
pub mod validator;

#[cfg(test)]
mod tests;

pub use board::column_lane::ColumnLane;
pub use board::kanban_board::KanbanBoard;
pub use error::{Result, ServiceError};
pub use notifier::{LogNotifier, Notification, Notifier, RecordingNotifier};
pub use service_context::ServiceContext;
pub use services::column_service::{ColumnDeletion, ColumnService};
pub use services::project_service::ProjectService;
pub use services::task_service::TaskService;
pub use services::worksheet_service::WorksheetService;
pub use simulator::Simulator;
pub use sync::board_export::{BoardExport, EXPORT_SCHEMA_VERSION};
pub use sync::entity_import_counts::EntityImportCounts;
pub use sync::export_service::ExportService;
pub use sync::import_result::ImportResult;
pub use validator::Validator;
