use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// File reference attached to a task. Only metadata is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    /// MIME type
    #[serde(rename = "type")]
    pub content_type: String,
    /// Size in bytes
    pub size: u64,
    pub task_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Attachment {
    pub fn new(task_id: Uuid, name: String, url: String, content_type: String, size: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            url,
            content_type,
            size,
            task_id,
            created_at: Utc::now(),
        }
    }
}
