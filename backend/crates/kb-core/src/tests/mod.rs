mod board;
mod models;
mod validation;

use crate::Column;

use uuid::Uuid;

/// Columns `todo`, `in-progress`, `done` with orders 0, 1, 2.
pub(crate) fn three_columns(worksheet_id: Uuid) -> Vec<Column> {
    ["To Do", "In Progress", "Done"]
        .iter()
        .enumerate()
        .map(|(i, title)| Column::new(worksheet_id, title.to_string(), "#000000".into(), i as u32))
        .collect()
}
