//! Subcommand execution

use std::io::Write;

use calc_core::{Calculator, Event};

use crate::cli::{Cli, Commands, PressArgs};
use crate::config::CalcConfig;
use crate::error::ShellResult;
use crate::logging::{self, LogTarget};
use crate::terminal;

/// Runs the parsed command line
pub fn execute(cli: &Cli) -> ShellResult<()> {
    let command = cli.command();
    let interactive = command == Commands::Run;
    logging::init(
        cli.verbose,
        &LogTarget::select(cli.log_file.as_deref(), interactive),
    )?;

    match command {
        Commands::Run => {
            let config = CalcConfig::load_or_default(cli.config.as_deref())?;
            terminal::run(&config)
        }
        Commands::Press(args) => {
            let lines = press(&args)?;
            let mut stdout = std::io::stdout().lock();
            for line in lines {
                writeln!(stdout, "{line}")?;
            }
            Ok(())
        }
    }
}

/// Presses the buttons on a fresh calculator
///
/// Returns the final display, or one `label → display` line per button when
/// `--steps` is set. Every label is checked before anything is pressed.
pub fn press(args: &PressArgs) -> ShellResult<Vec<String>> {
    let events = Event::parse_script(&args.script())?;
    let mut calc = Calculator::new();
    tracing::debug!(count = events.len(), "pressing buttons");

    if args.steps {
        Ok(events
            .into_iter()
            .map(|event| format!("{event} → {}", calc.handle_event(event)))
            .collect())
    } else {
        for event in events {
            calc.handle_event(event);
        }
        Ok(vec![calc.display().to_string()])
    }
}
