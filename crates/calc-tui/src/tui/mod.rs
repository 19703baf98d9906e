//! Terminal frontend for the calculator
//!
//! A clickable keypad, a one-line display, and the glue that turns mouse
//! clicks into calculator events.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{AppAction, InputHandler};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{display_tail, layout, render, CalculatorLayout, MAX_KEYPAD_HEIGHT, MAX_WIDTH};
