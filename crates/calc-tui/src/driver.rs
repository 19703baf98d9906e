//! Keypad-clicking calculator driver
//!
//! Runs the shared behavioural checks from `calc_core::driver` through the
//! terminal frontend: every button press becomes a mouse click at the centre
//! of the drawn button, so the layout and hit testing are exercised too.

use calc_core::driver::CalculatorDriver;
use calc_core::Event;
use ratatui::layout::Rect;

use crate::tui::{layout, CalculatorApp};

/// Terminal size the driver pretends to draw into
pub const DEFAULT_AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 42,
    height: 26,
};

/// Drives a [`CalculatorApp`] by clicking its keypad
#[derive(Debug)]
pub struct TuiDriver {
    app: CalculatorApp,
    area: Rect,
}

impl Default for TuiDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiDriver {
    /// Creates a driver for a fresh app in a 42x26 terminal
    #[must_use]
    pub fn new() -> Self {
        Self::with_area(DEFAULT_AREA)
    }

    /// Creates a driver for a terminal of the given size
    #[must_use]
    pub fn with_area(area: Rect) -> Self {
        Self {
            app: CalculatorApp::new(),
            area,
        }
    }

    /// Returns a reference to the underlying app
    #[must_use]
    pub fn app(&self) -> &CalculatorApp {
        &self.app
    }

    /// Terminal cell at the centre of the button for `event`
    #[must_use]
    pub fn button_centre(&self, event: Event) -> Option<(u16, u16)> {
        let keypad = layout(self.area).keypad;
        let index = self.app.keypad().find_button(event)?;
        let rect = self.app.keypad().button_rect(keypad, index)?;
        Some((rect.x + rect.width / 2, rect.y + rect.height / 2))
    }
}

impl CalculatorDriver for TuiDriver {
    fn press(&mut self, event: Event) {
        let Some((x, y)) = self.button_centre(event) else {
            tracing::warn!(button = %event, "no button on the keypad");
            return;
        };
        let keypad = layout(self.area).keypad;
        self.app.click(keypad, x, y);
        self.app.release();
    }

    fn display(&self) -> String {
        self.app.display().to_string()
    }
}
