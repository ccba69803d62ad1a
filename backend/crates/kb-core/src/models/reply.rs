use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reply to a comment. Replies cannot be replied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: Uuid,
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub comment_id: Uuid,
}

impl Reply {
    pub fn new(comment_id: Uuid, content: String, author_id: String, author_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            author_id,
            author_name,
            created_at: Utc::now(),
            comment_id,
        }
    }
}
