use std::path::{Path, PathBuf};

use serde::Deserialize;

/// The TOML config file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub(crate) load: LoadConfig,
}

/// The `[load]` table.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadConfig {
    pub(crate) warn: Option<[f64; 3]>,
    pub(crate) crit: Option<[f64; 3]>,
    pub(crate) per_core: Option<bool>,
    pub(crate) loadavg_file: Option<PathBuf>,
    pub(crate) cpuinfo_file: Option<PathBuf>,
}

impl LoadConfig {
    /// Makes relative source paths relative to `base`, the directory holding
    /// the config file.
    pub(crate) fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.loadavg_file, &mut self.cpuinfo_file]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
