//! Terminal input mapping
//!
//! The calculator is operated with the mouse only. The keyboard can quit the
//! shell and nothing else.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Actions the event loop can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Left button went down at a terminal cell
    Click {
        /// Column of the click
        column: u16,
        /// Row of the click
        row: u16,
    },
    /// Left button went up
    Release,
    /// Leave the application
    Quit,
    /// Input with no meaning for the calculator
    None,
}

/// Maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> AppAction {
        match event {
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            Event::Key(key) => Self::handle_key(key),
            _ => AppAction::None,
        }
    }

    fn handle_mouse(mouse: &MouseEvent) -> AppAction {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppAction::Click {
                column: mouse.column,
                row: mouse.row,
            },
            MouseEventKind::Up(MouseButton::Left) => AppAction::Release,
            _ => AppAction::None,
        }
    }

    fn handle_key(key: &KeyEvent) -> AppAction {
        if key.kind != KeyEventKind::Press {
            return AppAction::None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppAction::Quit,
            KeyCode::Char('q') | KeyCode::Esc => AppAction::Quit,
            _ => AppAction::None,
        }
    }
}
