use crate::{BACKLOG_STATUS, backlog_column, default_columns, is_contiguous};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_worksheet_when_default_columns_built_then_four_ordered_statuses() {
    let worksheet_id = Uuid::new_v4();

    let columns = default_columns(worksheet_id);

    let statuses: Vec<&str> = columns.iter().map(|c| c.status.as_str()).collect();
    assert_that!(statuses, elements_are![eq(&"todo"), eq(&"in-progress"), eq(&"review"), eq(&"done")]);
    assert_that!(is_contiguous(&columns), eq(true));
    assert!(columns.iter().all(|c| c.worksheet_id == worksheet_id));
}

#[test]
fn test_backlog_column_status() {
    let column = backlog_column(Uuid::new_v4(), 0);
    assert_eq!(column.status, BACKLOG_STATUS);
    assert_eq!(column.title, "Backlog");
}
