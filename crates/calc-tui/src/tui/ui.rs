//! TUI rendering
//!
//! The display shows exactly the text the calculator returns; the keypad
//! below it is the only input surface.

use calc_core::Outcome;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::config::CalcConfig;

/// Widest the calculator is drawn, in columns
pub const MAX_WIDTH: u16 = 42;

/// Tallest the keypad is drawn, in rows
pub const MAX_KEYPAD_HEIGHT: u16 = 22;

const DISPLAY_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
const FOOTER_HINT: &str = "click buttons · q quits";
/// Border plus one column of padding on each side
const DISPLAY_CHROME: u16 = 4;

/// Screen areas of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    /// Whole calculator frame
    pub frame: Rect,
    /// One-line display with its border
    pub display: Rect,
    /// Keypad including its border
    pub keypad: Rect,
    /// Hint line
    pub footer: Rect,
}

/// Computes the layout for a terminal of size `area`
///
/// The calculator is centred horizontally and never grows wider than
/// [`MAX_WIDTH`].
#[must_use]
pub fn layout(area: Rect) -> CalculatorLayout {
    let width = area.width.min(MAX_WIDTH);
    let height = area
        .height
        .min(DISPLAY_HEIGHT + MAX_KEYPAD_HEIGHT + FOOTER_HEIGHT);
    let frame = Rect::new(area.x + (area.width - width) / 2, area.y, width, height);

    let [display, keypad, footer] = Layout::vertical([
        Constraint::Length(DISPLAY_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(frame);

    CalculatorLayout {
        frame,
        display,
        keypad,
        footer,
    }
}

/// The last `width` characters of `text`
///
/// Long operands scroll left so the newest digit stays in view.
#[must_use]
pub fn display_tail(text: &str, width: usize) -> &str {
    let skip = text.chars().count().saturating_sub(width);
    text.char_indices()
        .nth(skip)
        .map_or("", |(start, _)| &text[start..])
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, config: &CalcConfig, frame: &mut Frame) {
    let areas = layout(frame.area());
    let theme = config.theme;

    let background = Style::default().bg(theme.background.into());
    let component = Style::default()
        .fg(theme.component_text.into())
        .bg(theme.component.into());

    frame.render_widget(Block::default().style(background), frame.area());

    let visible = display_tail(
        app.display(),
        usize::from(areas.display.width.saturating_sub(DISPLAY_CHROME)),
    );
    let display = Paragraph::new(Span::styled(
        visible,
        component.add_modifier(Modifier::BOLD),
    ))
    .style(component)
    .block(
        Block::default()
            .title(format!(" {} ", config.title))
            .borders(Borders::ALL)
            .border_style(background.fg(theme.component.into()))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(display, areas.display);

    frame.render_widget(KeypadWidget::new(app.keypad(), theme), areas.keypad);

    let hint = match app.last_outcome() {
        Some(Outcome::Ignored) => Span::styled(
            FOOTER_HINT,
            background
                .fg(theme.component.into())
                .add_modifier(Modifier::DIM),
        ),
        _ => Span::styled(FOOTER_HINT, background.fg(theme.component.into())),
    };
    frame.render_widget(
        Paragraph::new(hint).alignment(Alignment::Center),
        areas.footer,
    );
}
