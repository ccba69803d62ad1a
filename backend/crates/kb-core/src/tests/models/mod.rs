mod column;
mod priority;
mod project_status;
mod task;
