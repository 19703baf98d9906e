//! Interactive terminal session

use std::io::{self, Stdout, Write};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};

use crate::config::CalcConfig;
use crate::error::ShellResult;
use crate::tui::{layout, render, AppAction, CalculatorApp, InputHandler};

/// Raw mode, alternate screen and mouse capture for as long as it lives
///
/// Restores the terminal on drop, so an error in the event loop still leaves
/// the user's shell usable.
#[derive(Debug)]
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Switches the terminal into calculator mode
    pub fn enter() -> ShellResult<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = leave_screen(&mut io::stdout());
                let _ = disable_raw_mode();
                Err(err.into())
            }
        }
    }

    /// The ratatui terminal
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = leave_screen(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}

/// Leaves the alternate screen and stops mouse capture on `writer`
pub fn leave_screen<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, LeaveAlternateScreen, DisableMouseCapture)
}

/// Runs the calculator until the user quits
pub fn run(config: &CalcConfig) -> ShellResult<()> {
    let mut guard = TerminalGuard::enter()?;
    tracing::info!(title = %config.title, "calculator started");
    let result = run_app(guard.terminal(), config);
    tracing::info!("calculator stopped");
    result
}

/// Applies one action to the app
///
/// `area` is the full terminal area the keypad was last drawn into.
pub fn handle_action(app: &mut CalculatorApp, area: Rect, action: AppAction) {
    match action {
        AppAction::Click { column, row } => {
            let keypad = layout(area).keypad;
            app.click(keypad, column, row);
        }
        AppAction::Release => app.release(),
        AppAction::Quit => app.quit(),
        AppAction::None => {}
    }
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, config: &CalcConfig) -> ShellResult<()> {
    let mut app = CalculatorApp::new();
    let input_handler = InputHandler::new();

    loop {
        let completed = terminal.draw(|f| render(&app, config, f))?;
        let area = completed.area;

        let action = input_handler.handle_event(&event::read()?);
        handle_action(&mut app, area, action);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
