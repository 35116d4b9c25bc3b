//! Reading load averages and processor counts from the operating system.
//!
//! Every reader swallows its own failures: a load source hands back [`None`]
//! and a core source hands back zero, and the reason is only logged.

pub mod error;
pub mod procfs;
pub mod sysinfo;

use std::path::PathBuf;

use cfg_if::cfg_if;

use crate::check::LoadSample;

/// Something that can report the raw 1, 5, and 15 minute load averages.
pub trait LoadSource {
    /// Returns the raw load average, or [`None`] if it could not be read.
    fn load_average(&self) -> Option<LoadSample>;
}

/// Something that can report the number of logical processors.
pub trait CoreSource {
    /// Returns the logical processor count, or zero if it could not be detected.
    fn core_count(&self) -> usize;
}

/// Where to read the load average and processor metadata from. Only used by
/// the procfs readers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourcePaths {
    pub loadavg: Option<PathBuf>,
    pub cpuinfo: Option<PathBuf>,
}

cfg_if! {
    if #[cfg(target_os = "linux")] {
        /// Returns the load and core sources for the current platform.
        pub fn platform_sources(paths: SourcePaths) -> (Box<dyn LoadSource>, Box<dyn CoreSource>) {
            let procfs = procfs::ProcFs::new(
                paths.loadavg.unwrap_or_else(|| PathBuf::from(procfs::LOADAVG_PATH)),
                paths.cpuinfo.unwrap_or_else(|| PathBuf::from(procfs::CPUINFO_PATH)),
            );

            (Box::new(procfs.clone()), Box::new(procfs))
        }
    } else {
        /// Returns the load and core sources for the current platform.
        pub fn platform_sources(paths: SourcePaths) -> (Box<dyn LoadSource>, Box<dyn CoreSource>) {
            if paths != SourcePaths::default() {
                log::debug!("procfs paths are ignored on this platform: {paths:?}");
            }

            (Box::new(sysinfo::SysinfoSource), Box::new(sysinfo::SysinfoSource))
        }
    }
}
