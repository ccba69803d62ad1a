use kb_core::{Column, Project, Task, Worksheet};

use serde::{Deserialize, Serialize};

pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Everything stored for one project, as written by `board export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardExport {
    /// Schema version for compatibility checks (current: 1)
    pub schema_version: u32,

    /// RFC3339 timestamp when data was exported
    pub exported_at: String,

    /// Source identifier
    pub exported_by: String,

    pub project: Project,
    pub worksheets: Vec<Worksheet>,
    pub columns: Vec<Column>,
    /// Tasks with their comments and attachments embedded
    pub tasks: Vec<Task>,
}
