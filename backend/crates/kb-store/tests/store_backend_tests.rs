mod common;

use common::{file_store, memory_store};

use kb_store::{FileStore, KeyValueStore, SharedStore, StoreError};

use googletest::prelude::*;
use tempfile::TempDir;

fn both_backends() -> Vec<(Option<TempDir>, SharedStore)> {
    let (temp, file) = file_store();
    vec![(None, memory_store()), (Some(temp), file)]
}

#[test]
fn given_empty_store_when_reading_missing_key_then_none() {
    for (_temp, store) in both_backends() {
        let result = store.read("kanban-tasks-missing").unwrap();

        assert_that!(result, none());
    }
}

#[test]
fn given_written_value_when_read_then_same_value_returned() {
    for (_temp, store) in both_backends() {
        store.write("projects", "[1,2,3]").unwrap();

        let result = store.read("projects").unwrap();

        assert_that!(result, some(eq("[1,2,3]")));
    }
}

#[test]
fn given_written_key_when_removed_then_gone_and_second_remove_is_ok() {
    for (_temp, store) in both_backends() {
        store.write("worksheets-a", "[]").unwrap();

        store.remove("worksheets-a").unwrap();

        assert_that!(store.read("worksheets-a").unwrap(), none());
        assert_that!(store.remove("worksheets-a"), ok(anything()));
    }
}

#[test]
fn given_several_keys_when_listing_then_sorted() {
    for (_temp, store) in both_backends() {
        store.write("worksheets-b", "[]").unwrap();
        store.write("projects", "[]").unwrap();
        store.write("kanban-tasks-b", "[]").unwrap();

        let keys = store.keys().unwrap();

        assert_that!(
            keys,
            elements_are![eq("kanban-tasks-b"), eq("projects"), eq("worksheets-b")]
        );
    }
}

#[test]
fn given_update_returning_none_then_value_unchanged() {
    for (_temp, store) in both_backends() {
        store.write("projects", "[]").unwrap();

        store.update("projects", &mut |_: Option<&str>| Ok(None)).unwrap();

        assert_that!(store.read("projects").unwrap(), some(eq("[]")));
    }
}

#[test]
fn given_update_when_applied_then_sees_current_value() {
    for (_temp, store) in both_backends() {
        store.write("projects", "a").unwrap();

        store
            .update("projects", &mut |current: Option<&str>| {
                Ok(Some(format!("{}b", current.unwrap_or(""))))
            })
            .unwrap();

        assert_that!(store.read("projects").unwrap(), some(eq("ab")));
    }
}

#[test]
fn given_key_with_path_separator_when_file_store_writes_then_invalid_key() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();

    let result = store.write("../escape", "[]");

    assert!(matches!(result, Err(StoreError::InvalidKey { .. })));
}

#[test]
fn given_file_store_when_reopened_then_data_persists() {
    let temp = TempDir::new().unwrap();
    {
        let store = FileStore::open(temp.path()).unwrap();
        store.write("projects", "[\"kept\"]").unwrap();
    }

    let reopened = FileStore::open(temp.path()).unwrap();

    assert_that!(reopened.read("projects").unwrap(), some(eq("[\"kept\"]")));
    assert!(!temp.path().join("projects.json.tmp").exists());
}
