use crate::status_slug;

#[test]
fn test_status_slug_lowercases_and_dashes() {
    assert_eq!(status_slug("In Progress"), "in-progress");
    assert_eq!(status_slug("  Code   Review "), "code-review");
    assert_eq!(status_slug("done"), "done");
}
