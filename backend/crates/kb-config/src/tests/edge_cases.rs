use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, LogLevel};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use log::LevelFilter;
use serial_test::serial;

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "this is not valid toml {{{{").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_unknown_log_level_when_load_then_falls_back_to_warn() {
    // Given
    let _temp = setup_config_dir();
    let _level = EnvGuard::set("KB_LOG_LEVEL", "chatty");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Warn));
}

#[test]
#[serial]
fn given_blank_user_id_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _user = EnvGuard::set("KB_USER_ID", "  ");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("a").join("b");
    let _dir = EnvGuard::set("KB_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
fn test_log_level_parse_is_case_insensitive() {
    assert_eq!(LogLevel::parse_lenient("WARN"), LogLevel(LevelFilter::Warn));
    assert_eq!(LogLevel::parse_lenient("Trace"), LogLevel(LevelFilter::Trace));
}
