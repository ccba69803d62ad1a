use kb_core::{Column, Task};

use serde::Serialize;

/// One column of the selected worksheet with the tasks it holds.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnLane {
    pub column: Column,
    pub tasks: Vec<Task>,
}

impl ColumnLane {
    pub fn status(&self) -> &str {
        &self.column.status
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
