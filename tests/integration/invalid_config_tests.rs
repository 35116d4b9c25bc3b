//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::check_load_command;

#[test]
fn test_missing_config_file() {
    check_load_command(&["-C", "./tests/invalid_configs/does_not_exist.toml"])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("CheckLoad UNKNOWN: "))
        .stdout(predicate::str::contains("Unable to read the config file"));
}

#[test]
fn test_toml_mismatch_type() {
    check_load_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("invalid type"));
}

#[test]
fn test_short_triple() {
    check_load_command(&["-C", "./tests/invalid_configs/short_triple.toml"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("invalid length"));
}

#[test]
fn test_unknown_key() {
    check_load_command(&["-C", "./tests/invalid_configs/unknown_key.toml"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("unknown field"));
}

#[test]
fn test_infinite_threshold() {
    check_load_command(&["-C", "./tests/invalid_configs/infinite_threshold.toml"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains(
            "'crit' was set with an invalid value",
        ));
}
