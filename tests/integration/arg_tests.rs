//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::check_load_command;

#[test]
fn test_help() {
    check_load_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--per-core"))
        .stdout(predicate::str::contains("Load WARNING threshold"));
}

#[test]
fn test_version() {
    check_load_command(&["-V"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_short_warn_triple() {
    check_load_command(&["-w", "1,2"])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("CheckLoad UNKNOWN: "))
        .stdout(predicate::str::contains("'--warn <L1,L5,L15>'"))
        .stderr(predicate::str::contains(
            "expected three comma-separated numbers",
        ));
}

#[test]
fn test_non_numeric_crit() {
    check_load_command(&["--crit", "a,b,c"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("UNKNOWN"))
        .stdout(predicate::str::contains("'a,b,c'"));
}

#[test]
fn test_too_many_values() {
    check_load_command(&["-c", "1,2,3,4"]).assert().code(3);
}

#[test]
fn test_bad_per_core_value() {
    check_load_command(&["--per-core=maybe"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("UNKNOWN"));
}

#[test]
fn test_unknown_flag() {
    check_load_command(&["--frobnicate"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("UNKNOWN"));
}

#[test]
fn test_single_line_output() {
    check_load_command(&["-w", "1,2"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_match("^[^\n]*\n$").unwrap());
}
