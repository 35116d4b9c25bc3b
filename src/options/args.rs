// Argument parsing via clap.
//
// Note that you probably want to keep this as a single file so the build script doesn't
// trip all over itself.

use std::path::PathBuf;

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "check-load [OPTIONS]";

/// Parses a `L1,L5,L15` triple, such as `5,4,3` or `0.5, 1.25, 2`.
pub(crate) fn parse_load_triple(value: &str) -> Result<[f64; 3], String> {
    let expected = || format!("expected three comma-separated numbers (e.g. '5,4,3'), got '{value}'");

    let mut values = [0.0; 3];
    let mut tokens = value.split(',');

    for slot in values.iter_mut() {
        let token = tokens.next().ok_or_else(expected)?.trim();
        *slot = match token.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => parsed,
            _ => return Err(expected()),
        };
    }

    if tokens.next().is_some() {
        return Err(expected());
    }

    Ok(values)
}

/// The arguments for check-load.
#[derive(Parser, Debug, Default)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub(crate) struct Args {
    #[command(flatten)]
    pub(crate) threshold_args: ThresholdArgs,

    #[command(flatten)]
    pub(crate) source_args: SourceArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Threshold Options")]
pub(crate) struct ThresholdArgs {
    #[arg(
        short = 'w',
        long,
        value_name = "L1,L5,L15",
        value_parser = parse_load_triple,
        help = "Load WARNING threshold, 1/5/15 min average.",
        long_help = "Load WARNING threshold, as a comma-separated 1/5/15 minute average triple. \
                    Any average strictly above its threshold raises a warning. Defaults to 5,4,3."
    )]
    pub(crate) warn: Option<[f64; 3]>,

    #[arg(
        short = 'c',
        long,
        value_name = "L1,L5,L15",
        value_parser = parse_load_triple,
        help = "Load CRITICAL threshold, 1/5/15 min average.",
        long_help = "Load CRITICAL threshold, as a comma-separated 1/5/15 minute average triple. \
                    Any average strictly above its threshold is critical, regardless of the warning \
                    threshold. Defaults to 8,7,6."
    )]
    pub(crate) crit: Option<[f64; 3]>,

    #[arg(
        short = 'p',
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Divide load average results by cpu/core count.",
        long_help = "Divide load average results by the logical cpu/core count before comparing them. \
                    Enabled by default; pass '--per-core=false' to compare the raw averages."
    )]
    pub(crate) per_core: Option<bool>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Source Options")]
pub(crate) struct SourceArgs {
    #[arg(
        short = 'C',
        long = "config",
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    Arguments given on the command line take precedence over the config file. \
                    Relative paths inside the config file are relative to the file's directory."
    )]
    pub(crate) config_location: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Reads the load average from this file instead of /proc/loadavg.",
        long_help = "Reads the load average from this file instead of /proc/loadavg. Only used on Linux."
    )]
    pub(crate) loadavg_file: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Counts processors from this file instead of /proc/cpuinfo.",
        long_help = "Counts processors from this file instead of /proc/cpuinfo. Only used on Linux."
    )]
    pub(crate) cpuinfo_file: Option<PathBuf>,
}

/// Returns an [`Args`] built from the process arguments, or the clap error
/// explaining why they were rejected. The full error is also written to stderr.
///
/// Help and version requests are printed and exit immediately with a zero code.
pub(crate) fn try_get_args() -> Result<Args, clap::Error> {
    Args::try_parse().map_err(|err| {
        if !err.use_stderr() {
            err.exit();
        }

        let _ = err.print();
        err
    })
}

/// Returns a [`Command`] based off of [`Args`].
#[cfg(test)]
pub(crate) fn build_cmd() -> Command {
    Args::command()
}
