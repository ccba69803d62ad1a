use crate::logger::level_label;

use fern::colors::ColoredLevelConfig;
use googletest::prelude::*;
use log::Level;

#[test]
fn given_no_colors_when_level_labelled_then_plain_name() {
    // Given
    let level = Level::Warn;

    // When
    let label = level_label(level, None);

    // Then
    assert_that!(label.as_str(), eq("WARN"));
}

#[test]
fn given_colors_when_level_labelled_then_name_kept() {
    // Given
    let colors = ColoredLevelConfig::new();

    // When
    let label = level_label(Level::Error, Some(&colors));

    // Then
    assert_that!(label.as_str(), contains_substring("ERROR"));
}
