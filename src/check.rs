//! The load check itself: normalizing a sample, comparing it against the
//! threshold tiers, and producing a [`CheckOutcome`].

use std::fmt;

use crate::collection::{CoreSource, LoadSource};

/// The message reported whenever a load sample could not be produced.
pub const READ_FAILURE_MESSAGE: &str = "Could not read load average from /proc";

/// The name printed in front of every result line.
pub const CHECK_NAME: &str = "CheckLoad";

/// A 1, 5, and 15 minute load average triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadSample([f64; 3]);

impl LoadSample {
    pub fn new(values: [f64; 3]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> [f64; 3] {
        self.0
    }

    /// Divides each value by `divisor` and rounds it to two decimal places.
    ///
    /// Returns [`None`] if `divisor` is zero, since that means the core count
    /// could not be detected.
    pub fn normalize(&self, divisor: usize) -> Option<LoadSample> {
        if divisor == 0 {
            return None;
        }

        let divisor = divisor as f64;
        Some(Self(self.0.map(|value| round_hundredths(value / divisor))))
    }

    /// Whether any value is strictly greater than the threshold in the same
    /// position.
    pub fn exceeds(&self, thresholds: &Thresholds) -> bool {
        self.0
            .iter()
            .zip(thresholds.0.iter())
            .any(|(value, limit)| value > limit)
    }
}

impl fmt::Display for LoadSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [one, five, fifteen] = self.0;

        // Debug formatting on floats keeps a trailing ".0" for whole numbers.
        write!(f, "{one:?}, {five:?}, {fifteen:?}")
    }
}

#[inline]
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A 1, 5, and 15 minute threshold triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds([f64; 3]);

impl Thresholds {
    pub const DEFAULT_WARN: Thresholds = Thresholds([5.0, 4.0, 3.0]);
    pub const DEFAULT_CRIT: Thresholds = Thresholds([8.0, 7.0, 6.0]);

    pub fn new(values: [f64; 3]) -> Self {
        Self(values)
    }
}

/// The settings for a single check run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckConfig {
    pub warn: Thresholds,
    pub crit: Thresholds,
    pub per_core: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            warn: Thresholds::DEFAULT_WARN,
            crit: Thresholds::DEFAULT_CRIT,
            per_core: true,
        }
    }
}

/// The status reported to the monitoring framework.
///
/// These are ordered by severity, with [`Status::Unknown`] sitting above
/// [`Status::Critical`] as it means the check could not run at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// The process exit code for this status.
    pub fn exit_code(&self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        })
    }
}

/// A status alongside the message explaining it.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub status: Status,
    pub message: String,
}

impl CheckOutcome {
    pub fn new<M: Into<String>>(status: Status, message: M) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CHECK_NAME} {}: {}", self.status, self.message)
    }
}

/// Reads the load average and core count from its sources and grades the
/// result.
pub struct LoadChecker {
    load_source: Box<dyn LoadSource>,
    core_source: Box<dyn CoreSource>,
}

impl LoadChecker {
    pub fn new(load_source: Box<dyn LoadSource>, core_source: Box<dyn CoreSource>) -> Self {
        Self {
            load_source,
            core_source,
        }
    }

    /// The number of logical processors, or zero if it could not be detected.
    pub fn detect_core_count(&self) -> usize {
        self.core_source.core_count()
    }

    /// The raw load average, if it could be read.
    pub fn read_load_average(&self) -> Option<LoadSample> {
        self.load_source.load_average()
    }

    /// Reads and normalizes a sample. [`None`] means the sample failed, either
    /// because the load average was unreadable or because per-core mode is on
    /// and no cores were detected.
    pub fn compute_sample(&self, per_core: bool) -> Option<LoadSample> {
        let divisor = if per_core {
            self.detect_core_count()
        } else {
            1
        };

        let raw = self.read_load_average()?;
        if divisor == 0 {
            log::debug!("core count detection returned zero, refusing to normalize");
        }

        raw.normalize(divisor)
    }

    /// Runs the check once.
    pub fn run(&self, config: &CheckConfig) -> CheckOutcome {
        let Some(sample) = self.compute_sample(config.per_core) else {
            return CheckOutcome::new(Status::Warning, READ_FAILURE_MESSAGE);
        };

        let message = format!("Load average: {sample}");
        let status = if sample.exceeds(&config.crit) {
            Status::Critical
        } else if sample.exceeds(&config.warn) {
            Status::Warning
        } else {
            Status::Ok
        };

        log::debug!("sample {sample:?} graded as {status}");

        CheckOutcome::new(status, message)
    }
}
