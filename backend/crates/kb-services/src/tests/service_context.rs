use crate::{RecordingNotifier, ServiceContext, ServiceError, Simulator};

use kb_store::{MemoryStore, SharedStore};

use std::sync::Arc;

use googletest::prelude::*;
use uuid::Uuid;

fn context(simulator: Simulator) -> (ServiceContext, Arc<RecordingNotifier>) {
    let store: SharedStore = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let ctx = ServiceContext::new(store, simulator, notifier.clone());
    (ctx, notifier)
}

#[tokio::test]
async fn given_successful_operation_when_run_then_value_returned_without_notification() {
    let (ctx, notifier) = context(Simulator::instant());

    let value = ctx.run("count tasks", || Ok(3)).await.unwrap();

    assert_that!(value, eq(3));
    assert_that!(notifier.notifications(), is_empty());
}

#[tokio::test]
async fn given_failing_operation_when_run_then_error_notified_once() {
    let (ctx, notifier) = context(Simulator::instant());

    let result: crate::Result<()> = ctx
        .run("delete task", || Err(ServiceError::not_found("Task", Uuid::new_v4())))
        .await;

    assert!(result.unwrap_err().is_not_found());
    assert_that!(notifier.errors(), elements_are![eq("Failed to delete task")]);
}

#[tokio::test]
async fn given_simulated_failure_when_run_then_operation_body_skipped() {
    let (ctx, notifier) = context(Simulator::instant().with_failure_rate(1.0));
    let mut ran = false;

    let result = ctx
        .run("create task", || {
            ran = true;
            Ok(())
        })
        .await;

    assert!(matches!(result, Err(ServiceError::Simulated { .. })));
    assert!(!ran);
    assert_that!(notifier.errors(), elements_are![eq("Failed to create task")]);
}
