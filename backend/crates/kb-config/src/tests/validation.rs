use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};
use crate::validation_config::{MAX_COMMENT_LENGTH, MAX_TITLE_LENGTH, MIN_TITLE_LENGTH};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

const BELOW_MIN_TITLE: usize = MIN_TITLE_LENGTH - 1;
const ABOVE_MAX_TITLE: usize = MAX_TITLE_LENGTH + 1;
const ABOVE_MAX_COMMENT: usize = MAX_COMMENT_LENGTH + 1;
const VALID_TITLE_LENGTH: usize = (MIN_TITLE_LENGTH + MAX_TITLE_LENGTH) / 2;

#[test]
#[serial]
fn given_max_title_length_zero_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _length = EnvGuard::set(
        "KB_VALIDATION_MAX_TITLE_LENGTH",
        &BELOW_MIN_TITLE.to_string(),
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_title_length_over_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _length = EnvGuard::set(
        "KB_VALIDATION_MAX_TITLE_LENGTH",
        &ABOVE_MAX_TITLE.to_string(),
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_valid_title_length_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _length = EnvGuard::set(
        "KB_VALIDATION_MAX_TITLE_LENGTH",
        &VALID_TITLE_LENGTH.to_string(),
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_max_comment_length_over_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _length = EnvGuard::set(
        "KB_VALIDATION_MAX_COMMENT_LENGTH",
        &ABOVE_MAX_COMMENT.to_string(),
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
