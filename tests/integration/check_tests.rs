//! End-to-end runs of the check against fixture procfs files.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{check_load_command, fixture_command};

const READ_FAILURE: &str = "CheckLoad WARNING: Could not read load average from /proc\n";

#[test]
fn test_ok_without_per_core() {
    fixture_command("loadavg_low", "cpuinfo_quad")
        .arg("--per-core=false")
        .assert()
        .code(0)
        .stdout("CheckLoad OK: Load average: 1.0, 2.0, 3.0\n");
}

#[test]
fn test_warning() {
    fixture_command("loadavg_low", "cpuinfo_quad")
        .args(["--per-core=false", "-w", "0.5,0.5,0.5"])
        .assert()
        .code(1)
        .stdout("CheckLoad WARNING: Load average: 1.0, 2.0, 3.0\n");
}

#[test]
fn test_critical_takes_precedence() {
    fixture_command("loadavg_low", "cpuinfo_quad")
        .args(["--per-core=false", "-c", "0.5,0.5,0.5"])
        .assert()
        .code(2)
        .stdout("CheckLoad CRITICAL: Load average: 1.0, 2.0, 3.0\n");
}

#[test]
fn test_only_one_window_needs_to_exceed() {
    fixture_command("loadavg_low", "cpuinfo_quad")
        .args(["--per-core=false", "-w", "10,10,2.5"])
        .assert()
        .code(1);
}

#[test]
fn test_per_core_by_default() {
    fixture_command("loadavg_high", "cpuinfo_quad")
        .assert()
        .code(0)
        .stdout("CheckLoad OK: Load average: 2.0, 2.0, 2.0\n");
}

#[test]
fn test_explicit_per_core_flag() {
    fixture_command("loadavg_high", "cpuinfo_quad")
        .arg("-p")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("2.0, 2.0, 2.0"));
}

#[test]
fn test_raw_high_load_is_critical() {
    fixture_command("loadavg_high", "cpuinfo_quad")
        .arg("--per-core=false")
        .assert()
        .code(2)
        .stdout("CheckLoad CRITICAL: Load average: 8.0, 8.0, 8.0\n");
}

#[test]
fn test_no_cores_is_warning() {
    fixture_command("loadavg_high", "cpuinfo_empty")
        .assert()
        .code(1)
        .stdout(READ_FAILURE);
}

#[test]
fn test_missing_loadavg_is_warning() {
    fixture_command("loadavg_missing", "cpuinfo_quad")
        .args(["-c", "0,0,0"])
        .assert()
        .code(1)
        .stdout(READ_FAILURE);
}

#[test]
fn test_garbage_loadavg_is_warning() {
    fixture_command("loadavg_garbage", "cpuinfo_quad")
        .arg("--per-core=false")
        .assert()
        .code(1)
        .stdout(READ_FAILURE);
}

#[test]
fn test_real_procfs() {
    check_load_command(&["-w", "1000,1000,1000", "-c", "1000,1000,1000"])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("CheckLoad OK: Load average: "));
}
