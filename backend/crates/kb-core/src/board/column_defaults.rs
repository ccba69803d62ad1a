use crate::Column;

use uuid::Uuid;

pub const BACKLOG_TITLE: &str = "Backlog";
pub const BACKLOG_STATUS: &str = "backlog";
pub const BACKLOG_COLOR: &str = "#6b7280";

/// (title, status, color) of the columns every new worksheet starts with
const DEFAULT_COLUMNS: [(&str, &str, &str); 4] = [
    ("To Do", "todo", "#94a3b8"),
    ("In Progress", "in-progress", "#3b82f6"),
    ("Review", "review", "#f59e0b"),
    ("Done", "done", "#22c55e"),
];

/// The four starter columns with orders 0..3.
pub fn default_columns(worksheet_id: Uuid) -> Vec<Column> {
    DEFAULT_COLUMNS
        .iter()
        .enumerate()
        .map(|(order, (title, status, color))| {
            Column::with_status(
                worksheet_id,
                title.to_string(),
                status.to_string(),
                color.to_string(),
                order as u32,
            )
        })
        .collect()
}

/// Column fabricated when the last column of a worksheet is deleted.
pub fn backlog_column(worksheet_id: Uuid, order: u32) -> Column {
    Column::with_status(
        worksheet_id,
        BACKLOG_TITLE.to_string(),
        BACKLOG_STATUS.to_string(),
        BACKLOG_COLOR.to_string(),
        order,
    )
}
