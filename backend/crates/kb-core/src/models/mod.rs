pub mod attachment;
pub mod author;
pub mod column;
pub mod comment;
pub mod drafts;
pub mod priority;
pub mod project;
pub mod project_status;
pub mod reply;
pub mod task;
pub mod updates;
pub mod worksheet;
