use crate::{validate_optional_text, validate_required_text};

use googletest::prelude::*;

#[test]
fn given_padded_title_when_validated_then_trimmed() {
    let result = validate_required_text("  Fix login  ", "title", 200);

    assert_that!(result, ok(eq("Fix login")));
}

#[test]
fn given_whitespace_title_when_validated_then_error() {
    let result = validate_required_text("   ", "title", 200);

    assert_that!(result, err(anything()));
}

#[test]
fn given_title_over_limit_when_validated_then_error() {
    let title = "x".repeat(11);

    let result = validate_required_text(&title, "title", 10);

    assert_that!(result, err(anything()));
}

#[test]
fn given_empty_optional_text_when_validated_then_kept_empty() {
    let result = validate_optional_text(Some("  "), "description", 10);

    assert_that!(result, ok(some(eq(""))));
}

#[test]
fn given_missing_optional_text_when_validated_then_none() {
    let result = validate_optional_text(None, "description", 10);

    assert_that!(result, ok(none()));
}
