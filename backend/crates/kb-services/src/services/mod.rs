pub mod column_service;
pub mod project_service;
pub mod task_service;
pub mod worksheet_service;
