use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, StoreBackend};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use serial_test::serial;

#[test]
fn test_store_backend_from_str() {
    assert_eq!(StoreBackend::from_str("file").unwrap(), StoreBackend::File);
    assert_eq!(
        StoreBackend::from_str("memory").unwrap(),
        StoreBackend::Memory
    );
    assert!(StoreBackend::from_str("sqlite").is_err());
}

#[test]
#[serial]
fn given_unknown_backend_env_when_load_then_default_kept() {
    // Given
    let _temp = setup_config_dir();
    let _backend = EnvGuard::set("KB_STORE_BACKEND", "sqlite");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.store.backend, eq(StoreBackend::File));
}

#[test]
#[serial]
fn given_store_path_with_traversal_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("KB_STORE_PATH", "../../../etc");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring(".."));
}

#[test]
#[serial]
fn given_absolute_store_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("KB_STORE_PATH", "/tmp/kb-store");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
