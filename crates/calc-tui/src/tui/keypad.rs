//! Clickable keypad
//!
//! The button grid of the classic desktop calculator:
//!
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ + ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ × ]
//! [ 0 ] [ . ] [ = ] [ ÷ ]
//! [    AC   ] [   DEL   ]
//! ```
//!
//! Rendering and hit testing share [`Keypad::button_rect`], so a click
//! always lands on the button that was drawn there.

use calc_core::{Event, Operator};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::config::Theme;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The event sent to the calculator
    pub event: Event,
    /// Grid row (0-indexed)
    pub row: u16,
    /// Leftmost grid column (0-indexed)
    pub col: u16,
    /// Number of columns covered
    pub span: u16,
    /// Whether the button is currently held down
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a single-column button
    #[must_use]
    pub const fn new(event: Event, row: u16, col: u16) -> Self {
        Self::wide(event, row, col, 1)
    }

    /// Creates a button covering `span` columns
    #[must_use]
    pub const fn wide(event: Event, row: u16, col: u16, span: u16) -> Self {
        Self {
            event,
            row,
            col,
            span,
            pressed: false,
        }
    }

    /// Label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.event.label()
    }

    /// Returns true if the button covers the grid cell
    #[must_use]
    pub const fn covers(&self, row: u16, col: u16) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad: 18 buttons on a 5x4 grid
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: u16,
    cols: u16,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let mut buttons = Vec::with_capacity(18);

        // 7 8 9 / 4 5 6 / 1 2 3, top row first
        for d in 1..=9u8 {
            let index = u16::from(d - 1);
            buttons.push(KeypadButton::new(Event::Digit(d), 2 - index / 3, index % 3));
        }
        buttons.push(KeypadButton::new(Event::Digit(0), 3, 0));
        buttons.push(KeypadButton::new(Event::Dot, 3, 1));
        buttons.push(KeypadButton::new(Event::Equals, 3, 2));

        for (row, op) in (0..).zip(Operator::ALL) {
            buttons.push(KeypadButton::new(Event::Operator(op), row, 3));
        }

        buttons.push(KeypadButton::wide(Event::Clear, 4, 0, 2));
        buttons.push(KeypadButton::wide(Event::Delete, 4, 2, 2));

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: u16, col: u16) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds the index of the button that sends `event`
    #[must_use]
    pub fn find_button(&self, event: Event) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Marks a button as held down
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Screen rectangle of a button when the keypad is drawn in `area`
    ///
    /// `None` if the index is unknown or the area is too small to give every
    /// cell at least one column and row.
    #[must_use]
    pub fn button_rect(&self, area: Rect, index: usize) -> Option<Rect> {
        let btn = self.buttons.get(index)?;
        let inner = area.inner(Margin::new(1, 1));
        let cell_width = inner.width / self.cols;
        let cell_height = inner.height / self.rows;
        if cell_width == 0 || cell_height == 0 {
            return None;
        }
        Some(Rect::new(
            inner.x + btn.col * cell_width,
            inner.y + btn.row * cell_height,
            cell_width * btn.span,
            cell_height,
        ))
    }

    /// Converts a click position to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let position = Position::new(x, y);
        (0..self.buttons.len()).find(|&index| {
            self.button_rect(area, index)
                .is_some_and(|rect| rect.contains(position))
        })
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    theme: Theme,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad, theme: Theme) -> Self {
        Self { keypad, theme }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let background = Style::default().bg(self.theme.background.into());
        Block::default()
            .borders(Borders::ALL)
            .border_style(background.fg(self.theme.component.into()))
            .style(background)
            .render(area, buf);

        let component = Style::default()
            .fg(self.theme.component_text.into())
            .bg(self.theme.component.into());

        for (index, btn) in self.keypad.buttons().enumerate() {
            let Some(rect) = self.keypad.button_rect(area, index) else {
                continue;
            };

            // Leave a one-cell gutter on the right when there is room
            let face = if rect.width > 2 {
                Rect { width: rect.width - 1, ..rect }
            } else {
                rect
            };

            let style = if btn.pressed {
                component.add_modifier(Modifier::REVERSED | Modifier::BOLD)
            } else {
                component.add_modifier(Modifier::BOLD)
            };
            buf.set_style(face, style);

            let label = btn.label();
            let label_width = label.chars().count() as u16;
            let x = face.x + face.width.saturating_sub(label_width) / 2;
            let y = face.y + face.height / 2;
            buf.set_stringn(x, y, &label, face.width as usize, style);
        }
    }
}
