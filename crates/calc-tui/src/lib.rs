//! Calc TUI - terminal frontend for the accumulator calculator
//!
//! A mouse-driven keypad and one-line display drawn with ratatui, plus a
//! headless `press` command for scripting:
//!
//! ```bash
//! calc                      # open the keypad
//! calc press 10.5 + 2 =     # prints 12.5
//! calc press --steps 6 ÷ 0 = # prints the display after each button
//! ```
//!
//! All arithmetic lives in [`calc_core`]; this crate only maps clicks to
//! button events and shows the text the calculator returns.

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod terminal;
pub mod tui;

pub use cli::{Cli, Commands, PressArgs};
pub use config::{CalcConfig, Rgb, Theme};
pub use driver::TuiDriver;
pub use error::{ShellError, ShellResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cli::{Cli, Commands, PressArgs};
    pub use crate::config::{CalcConfig, Theme};
    pub use crate::driver::TuiDriver;
    pub use crate::error::{ShellError, ShellResult};
    pub use crate::tui::{CalculatorApp, InputHandler, Keypad};
}
