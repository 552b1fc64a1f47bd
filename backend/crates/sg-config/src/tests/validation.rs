use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

const BELOW_MIN_PASSWORD: usize = crate::MIN_MIN_PASSWORD_LENGTH - 1;
const ABOVE_MAX_PASSWORD: usize = crate::MAX_MIN_PASSWORD_LENGTH + 1;

// =========================================================================
// Validation Tests - Validation Config
// =========================================================================

#[test]
#[serial]
fn given_min_password_length_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _length = EnvGuard::set(
        "SG_VALIDATION_MIN_PASSWORD_LENGTH",
        &BELOW_MIN_PASSWORD.to_string(),
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("min_password_length"));
}

#[test]
#[serial]
fn given_min_password_length_over_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _length = EnvGuard::set(
        "SG_VALIDATION_MIN_PASSWORD_LENGTH",
        &ABOVE_MAX_PASSWORD.to_string(),
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_min_password_length_override_when_load_then_applied() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _length = EnvGuard::set("SG_VALIDATION_MIN_PASSWORD_LENGTH", "8");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validation.min_password_length, eq(8));
    assert_that!(config.validate(), ok(anything()));
}
