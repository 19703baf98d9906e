//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Button calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// YAML configuration file (title and colours)
    #[arg(short, long, global = true, env = "CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand, falling back to the interactive shell
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive calculator
    Run,

    /// Press buttons without a terminal UI and print the display
    Press(PressArgs),
}

/// Arguments for `calc press`
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct PressArgs {
    /// Button labels, e.g. `10.5 + 2 =` (× and ÷ also accept * and /)
    #[arg(required = true, allow_hyphen_values = true)]
    pub buttons: Vec<String>,

    /// Print the display after every button instead of only at the end
    #[arg(long)]
    pub steps: bool,
}

impl PressArgs {
    /// The buttons joined back into one script
    #[must_use]
    pub fn script(&self) -> String {
        self.buttons.join(" ")
    }
}
