//! Load average and processor count through Linux's procfs.

use std::{
    fs,
    path::{Path, PathBuf},
};

use super::{
    error::{CollectionError, CollectionResult},
    CoreSource, LoadSource,
};
use crate::check::LoadSample;

pub const LOADAVG_PATH: &str = "/proc/loadavg";
pub const CPUINFO_PATH: &str = "/proc/cpuinfo";

/// Reads `/proc/loadavg` and `/proc/cpuinfo`, or files laid out like them.
#[derive(Debug, Clone)]
pub struct ProcFs {
    loadavg: PathBuf,
    cpuinfo: PathBuf,
}

impl ProcFs {
    pub fn new(loadavg: impl Into<PathBuf>, cpuinfo: impl Into<PathBuf>) -> Self {
        Self {
            loadavg: loadavg.into(),
            cpuinfo: cpuinfo.into(),
        }
    }

    fn read(path: &Path) -> CollectionResult<String> {
        fs::read_to_string(path).map_err(|err| CollectionError::io(path, err))
    }
}

impl LoadSource for ProcFs {
    fn load_average(&self) -> Option<LoadSample> {
        match Self::read(&self.loadavg).and_then(|contents| parse_load_average(&contents)) {
            Ok(sample) => Some(sample),
            Err(err) => {
                log::debug!("no load average from {}: {err}", self.loadavg.display());
                None
            }
        }
    }
}

impl CoreSource for ProcFs {
    fn core_count(&self) -> usize {
        match Self::read(&self.cpuinfo).and_then(|contents| count_processors(&contents)) {
            Ok(count) => count,
            Err(err) => {
                log::debug!("no core count from {}: {err}", self.cpuinfo.display());
                0
            }
        }
    }
}

/// Parses the first three whitespace-separated tokens of a `/proc/loadavg`
/// style string. Anything after them (the run queue and last PID) is ignored.
pub fn parse_load_average(contents: &str) -> CollectionResult<LoadSample> {
    let mut tokens = contents.split_ascii_whitespace();
    let mut values = [0.0; 3];

    for value in values.iter_mut() {
        let token = tokens.next().ok_or_else(|| {
            CollectionError::malformed(format!("expected 3 load values in '{}'", contents.trim()))
        })?;

        *value = match token.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => parsed,
            _ => {
                return Err(CollectionError::malformed(format!(
                    "'{token}' is not a load value"
                )));
            }
        };
    }

    Ok(LoadSample::new(values))
}

/// Counts the `processor` entries of a `/proc/cpuinfo` style string.
pub fn count_processors(contents: &str) -> CollectionResult<usize> {
    let count = contents
        .lines()
        .filter(|line| line.starts_with("processor"))
        .count();

    if count == 0 {
        Err(CollectionError::malformed("no processor entries"))
    } else {
        Ok(count)
    }
}
