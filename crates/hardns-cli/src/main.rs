use hardns_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Log file only on request (RUST_LOG); stderr otherwise or if it fails.
    let rust_log = std::env::var_os("RUST_LOG");
    if !logging::file_logging_requested(rust_log.as_deref()) || logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = Cli::run_from_args() {
        eprintln!("hardns error: {:#}", err);
        std::process::exit(1);
    }
}
