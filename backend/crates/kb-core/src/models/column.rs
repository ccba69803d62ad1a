use crate::status_slug;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A board column. Tasks reference columns by `id`; `status` is the
/// slug shown on cards and used to group tasks for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: Uuid,
    pub title: String,
    pub status: String,
    pub color: String,
    pub order: u32,
    pub worksheet_id: Uuid,
}

impl Column {
    /// Column whose status slug is derived from its title.
    pub fn new(worksheet_id: Uuid, title: String, color: String, order: u32) -> Self {
        let status = status_slug(&title);
        Self::with_status(worksheet_id, title, status, color, order)
    }

    pub fn with_status(
        worksheet_id: Uuid,
        title: String,
        status: String,
        color: String,
        order: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            status,
            color,
            order,
            worksheet_id,
        }
    }
}
