//! `calc`: button calculator for the terminal

use std::process::ExitCode;

use calc_tui::{commands, Cli, ShellResult};
use clap::Parser;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> ShellResult<()> {
    let cli = Cli::parse();
    commands::execute(&cli)
}
