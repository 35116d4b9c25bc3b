use std::{env, fs, io, path::Path};

use clap_complete::{generate_to, shells::Shell};

// Only the argument definitions are shared with the crate, so `Result` must stay the prelude's.
include!("src/options/args.rs");

const BIN_NAME: &str = "check-load";
const GENERATE_VAR: &str = "CHECK_LOAD_GENERATE";
const OUT_DIR: &str = "./target/tmp/check-load";

fn write_completions(cmd: &mut Command, dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;

    for shell in [
        Shell::Bash,
        Shell::Zsh,
        Shell::Fish,
        Shell::PowerShell,
        Shell::Elvish,
    ] {
        generate_to(shell, cmd, BIN_NAME, dir)?;
    }

    Ok(())
}

fn write_manpage(cmd: Command, dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;

    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;
    fs::write(dir.join(format!("{BIN_NAME}.1")), buffer)
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-env-changed={GENERATE_VAR}");

    match env::var_os(GENERATE_VAR) {
        Some(var) if !var.is_empty() => {}
        _ => return Ok(()),
    }

    let out_dir = Path::new(OUT_DIR);
    let mut cmd = Args::command().name(BIN_NAME);

    write_completions(&mut cmd, &out_dir.join("completion")).inspect_err(|err| {
        eprintln!("Failed to generate shell completions in {out_dir:?}: {err}");
    })?;
    write_manpage(cmd, &out_dir.join("manpage")).inspect_err(|err| {
        eprintln!("Failed to generate the manpage in {out_dir:?}: {err}");
    })
}
