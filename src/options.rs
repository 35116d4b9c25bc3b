//! How to create the check's settings from the command line arguments and an
//! optional config file.

pub(crate) mod args;
pub mod config;
mod error;

use std::{fs, path::Path};

pub use config::Config;
pub use error::OptionError;
use error::OptionResult;

use self::args::Args;
use crate::{
    check::{CheckConfig, Thresholds},
    collection::SourcePaths,
};

/// Everything needed to run the check once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckOptions {
    pub check: CheckConfig,
    pub paths: SourcePaths,
}

/// Reads and parses the config file at `path`. Relative source paths in it are
/// taken relative to the file's directory.
pub fn read_config(path: &Path) -> OptionResult<Config> {
    let contents = fs::read_to_string(path)?;
    let mut config: Config = toml_edit::de::from_str(&contents)?;

    if let Some(base) = path.parent() {
        config.load.resolve_paths(base);
    }

    log::debug!("using config file at {}", path.display());

    Ok(config)
}

/// Builds the [`CheckOptions`] from the process arguments.
pub fn init_options() -> OptionResult<CheckOptions> {
    let args = args::try_get_args()?;
    let config = match &args.source_args.config_location {
        Some(path) => read_config(path)?,
        None => Config::default(),
    };

    get_check_options(args, config)
}

/// Merges arguments over the config file, falling back to defaults for
/// anything neither sets.
fn get_check_options(args: Args, config: Config) -> OptionResult<CheckOptions> {
    let defaults = CheckConfig::default();
    let load = config.load;
    let threshold_args = args.threshold_args;
    let source_args = args.source_args;

    let warn = get_thresholds(threshold_args.warn, load.warn, "warn")?.unwrap_or(defaults.warn);
    let crit = get_thresholds(threshold_args.crit, load.crit, "crit")?.unwrap_or(defaults.crit);
    let per_core = threshold_args
        .per_core
        .or(load.per_core)
        .unwrap_or(defaults.per_core);

    Ok(CheckOptions {
        check: CheckConfig {
            warn,
            crit,
            per_core,
        },
        paths: SourcePaths {
            loadavg: source_args.loadavg_file.or(load.loadavg_file),
            cpuinfo: source_args.cpuinfo_file.or(load.cpuinfo_file),
        },
    })
}

/// Arguments are validated by clap already, so only config values are checked
/// here; TOML will happily accept `nan` and `inf`.
fn get_thresholds(
    arg: Option<[f64; 3]>, config: Option<[f64; 3]>, key: &str,
) -> OptionResult<Option<Thresholds>> {
    if let Some(values) = arg {
        return Ok(Some(Thresholds::new(values)));
    }

    match config {
        Some(values) if values.iter().all(|value| value.is_finite()) => {
            Ok(Some(Thresholds::new(values)))
        }
        Some(_) => Err(OptionError::invalid_config_value(key)),
        None => Ok(None),
    }
}
