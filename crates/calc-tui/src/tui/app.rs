//! TUI Application State
//!
//! The app is the single owner of the calculator; the event loop owns the
//! app. Every click is fully applied before the next one is read.

use calc_core::{Calculator, Event, Outcome};
use ratatui::layout::Rect;

use super::keypad::Keypad;

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    calculator: Calculator,
    keypad: Keypad,
    last_outcome: Option<Outcome>,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.calculator.display()
    }

    /// Returns the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Outcome of the most recent press, if any
    #[must_use]
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handles a mouse click at terminal coordinates
    ///
    /// `keypad_area` is where the keypad is currently drawn. Clicks that miss
    /// every button are ignored and return `None`.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> Option<Outcome> {
        let Some(index) = self.keypad.hit_test(keypad_area, x, y) else {
            tracing::trace!(x, y, "click missed keypad");
            return None;
        };
        self.press_button(index)
    }

    /// Presses the keypad button at `index`
    pub fn press_button(&mut self, index: usize) -> Option<Outcome> {
        let event = self.keypad.get_button(index)?.event;
        self.keypad.release_all();
        self.keypad.press_button(index);
        Some(self.press(event))
    }

    /// Sends an event straight to the calculator
    pub fn press(&mut self, event: Event) -> Outcome {
        let outcome = self.calculator.press(event);
        tracing::debug!(button = %event, ?outcome, display = self.calculator.display(), "button");
        self.last_outcome = Some(outcome);
        outcome
    }

    /// Releases any held keypad button
    pub fn release(&mut self) {
        self.keypad.release_all();
    }
}
