use crate::{Notification, Notifier, RecordingNotifier};

use googletest::prelude::*;

#[test]
fn given_recording_notifier_when_notified_then_keeps_order() {
    let notifier = RecordingNotifier::new();

    notifier.success("Task created");
    notifier.error("Failed to move task");
    notifier.success("Task deleted");

    assert_that!(
        notifier.notifications(),
        elements_are![
            eq(&Notification::Success("Task created".into())),
            eq(&Notification::Error("Failed to move task".into())),
            eq(&Notification::Success("Task deleted".into())),
        ]
    );
    assert_that!(notifier.errors(), elements_are![eq("Failed to move task")]);
}
