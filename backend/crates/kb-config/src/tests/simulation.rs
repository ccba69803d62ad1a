use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, SimulationConfig};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
fn given_failure_rate_without_dev_mode_then_effective_rate_is_zero() {
    let config = SimulationConfig {
        dev_mode: false,
        latency_ms: 0,
        failure_rate: 0.9,
    };

    assert_that!(config.effective_failure_rate(), eq(0.0));
}

#[test]
fn given_instant_simulation_then_valid_and_without_latency() {
    let config = SimulationConfig::instant();

    assert_that!(config.latency_ms, eq(0));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_failure_rate_above_one_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _rate = EnvGuard::set("KB_SIM_FAILURE_RATE", "1.5");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_latency_above_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _latency = EnvGuard::set("KB_SIM_LATENCY_MS", "60000");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
