use crate::Reply;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub task_id: Uuid,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

impl Comment {
    pub fn new(task_id: Uuid, content: String, author_id: String, author_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            author_id,
            author_name,
            created_at: Utc::now(),
            task_id,
            replies: Vec::new(),
        }
    }
}
