pub mod board_export;
pub mod entity_import_counts;
pub mod export_service;
pub mod import_result;
