use crate::tests::three_columns;
use crate::{Priority, Task};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_new_task_then_status_mirrors_column() {
    let columns = three_columns(Uuid::new_v4());

    let task = Task::new(Uuid::new_v4(), &columns[1], "Write docs".into(), Priority::Low);

    assert_that!(task.column_id, eq(columns[1].id));
    assert_that!(task.status, eq("in-progress"));
    assert_that!(task.worksheet_id, eq(columns[1].worksheet_id));
    assert_that!(task.comments, is_empty());
}

#[test]
fn given_task_in_column_when_assigned_same_column_then_unchanged() {
    let columns = three_columns(Uuid::new_v4());
    let mut task = Task::new(Uuid::new_v4(), &columns[0], "t1".into(), Priority::Medium);
    let before = task.clone();

    let changed = task.assign_column(&columns[0]);

    assert_that!(changed, eq(false));
    assert_that!(task, eq(&before));
}

#[test]
fn given_task_when_assigned_other_column_then_status_follows() {
    let columns = three_columns(Uuid::new_v4());
    let mut task = Task::new(Uuid::new_v4(), &columns[0], "t1".into(), Priority::Medium);

    let changed = task.assign_column(&columns[2]);

    assert_that!(changed, eq(true));
    assert_that!(task.column_id, eq(columns[2].id));
    assert_that!(task.status, eq("done"));
}

#[test]
fn given_stored_task_without_comment_fields_when_deserialized_then_lists_default_empty() {
    let columns = three_columns(Uuid::new_v4());
    let task = Task::new(Uuid::new_v4(), &columns[0], "t1".into(), Priority::High);
    let mut value = serde_json::to_value(&task).unwrap();
    let object = value.as_object_mut().unwrap();
    object.remove("comments");
    object.remove("attachments");

    let restored: Task = serde_json::from_value(value).unwrap();

    assert_that!(restored.comments, is_empty());
    assert_that!(restored.attachments, is_empty());
    assert_that!(restored.created_at, eq(task.created_at));
}
