//! Input for entities whose id and timestamps are assigned on creation.

use crate::Priority;

use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewTask {
    pub column_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub assignee: Option<String>,
}

impl NewTask {
    pub fn new(column_id: Uuid, title: impl Into<String>) -> Self {
        Self {
            column_id,
            title: title.into(),
            description: None,
            priority: Priority::default(),
            due_date: None,
            assignee: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewAttachment {
    pub name: String,
    pub url: String,
    pub content_type: String,
    pub size: u64,
}
