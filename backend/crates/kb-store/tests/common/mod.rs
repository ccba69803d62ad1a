#![allow(dead_code)]

use kb_core::{Column, Priority, Task, default_columns};
use kb_store::{FileStore, MemoryStore, SharedStore};

use std::sync::Arc;

use tempfile::TempDir;
use uuid::Uuid;

pub fn memory_store() -> SharedStore {
    Arc::new(MemoryStore::new())
}

/// File store in a fresh temp dir. Keep the TempDir alive for the test.
pub fn file_store() -> (TempDir, SharedStore) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::open(temp.path().join("store")).expect("Failed to open file store");
    (temp, Arc::new(store))
}

pub fn create_test_columns() -> Vec<Column> {
    default_columns(Uuid::new_v4())
}

pub fn create_test_task(project_id: Uuid, column: &Column, title: &str) -> Task {
    let mut task = Task::new(project_id, column, title.to_string(), Priority::High);
    task.description = Some("Test task description".to_string());
    task
}
