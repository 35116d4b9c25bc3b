use std::process::ExitCode;

use check_load::start_check_load;

fn main() -> ExitCode {
    #[cfg(all(feature = "logging", debug_assertions))]
    {
        if let Err(err) = check_load::utils::logging::init_logger(
            log::LevelFilter::Debug,
            std::ffi::OsStr::new("check-load-debug.log"),
        ) {
            eprintln!("Unable to start the debug logger: {err}");
        }
    }

    ExitCode::from(start_check_load().exit_code())
}
