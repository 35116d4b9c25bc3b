//! Load average and processor count through sysinfo, for platforms without
//! procfs.

use sysinfo::System;

use super::{error::CollectionError, CoreSource, LoadSource};
use crate::check::LoadSample;

#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoSource;

impl LoadSource for SysinfoSource {
    fn load_average(&self) -> Option<LoadSample> {
        // sysinfo reports all zeroes on Windows rather than failing.
        if cfg!(target_family = "windows") {
            log::debug!("no load average from sysinfo: {}", CollectionError::Unsupported);
            return None;
        }

        // The API for sysinfo apparently wants you to call it like this, rather than
        // using a &System.
        let sysinfo::LoadAvg { one, five, fifteen } = System::load_average();

        Some(LoadSample::new([one, five, fifteen]))
    }
}

impl CoreSource for SysinfoSource {
    fn core_count(&self) -> usize {
        let mut sys = System::new();
        sys.refresh_cpu_all();

        sys.cpus().len()
    }
}
