use crate::{Attachment, Column, Comment, Priority};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    // Placement
    pub column_id: Uuid,
    /// Status slug of `column_id`, kept in sync for display
    pub status: String,
    pub project_id: Uuid,
    pub worksheet_id: Uuid,

    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(project_id: Uuid, column: &Column, title: String, priority: Priority) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description: None,
            column_id: column.id,
            status: column.status.clone(),
            project_id,
            worksheet_id: column.worksheet_id,
            priority,
            due_date: None,
            assignee: None,
            comments: Vec::new(),
            attachments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Place the task in `column`. Returns false when it was already there.
    pub fn assign_column(&mut self, column: &Column) -> bool {
        if self.column_id == column.id && self.status == column.status {
            return false;
        }
        self.column_id = column.id;
        self.status = column.status.clone();
        self.worksheet_id = column.worksheet_id;
        self.updated_at = Utc::now();
        true
    }

    pub fn find_comment_mut(&mut self, comment_id: Uuid) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.id == comment_id)
    }
}
