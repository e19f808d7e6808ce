//! CLI entry point for the pattern password generator

use clap::Parser;
use pwpattern::io::cli::{Cli, PasswordRunner};
use pwpattern::io::logging;
use std::process::ExitCode;

// Allow print for the user-facing failure message
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match PasswordRunner::new(cli).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(error.exit_code())
        }
    }
}
