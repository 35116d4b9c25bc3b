//! A monitoring check for the system load average.
//!
//! The check reads the 1, 5, and 15 minute load averages, optionally divides
//! them by the number of logical processors, and grades them against a warning
//! and a critical threshold triple. The result is reported as a single line on
//! stdout and as the process exit code, following the usual Nagios/Sensu
//! plugin convention.

pub mod check;
pub mod collection;
pub mod options;

pub mod utils {
    pub mod logging;
}

use anyhow::Context;

pub use check::{CheckConfig, CheckOutcome, LoadChecker, LoadSample, Status, Thresholds};

/// Builds the options, runs the check, and prints the result line.
///
/// Returns the status whose exit code the process should exit with.
pub fn start_check_load() -> Status {
    let outcome = match options::init_options().context("Unable to set up the check") {
        Ok(options) => {
            let (load_source, core_source) = collection::platform_sources(options.paths);
            LoadChecker::new(load_source, core_source).run(&options.check)
        }
        Err(err) => CheckOutcome::new(Status::Unknown, format!("{err:#}")),
    };

    log::debug!("finished with {}", outcome.status);
    println!("{outcome}");

    outcome.status
}
