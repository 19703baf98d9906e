//! Button events fed to the state machine
//!
//! One event per button press. The shell never talks to the calculator in
//! any other way.

use std::str::FromStr;

use crate::error::{CalcError, CalcResult};
use crate::operator::Operator;

/// A single button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Digit button (0-9)
    Digit(u8),
    /// Decimal point
    Dot,
    /// Delete the last typed character (DEL)
    Delete,
    /// Reset everything, including the error lockout (AC)
    Clear,
    /// One of the four operator buttons
    Operator(Operator),
    /// Equals
    Equals,
}

impl Event {
    /// Creates a digit event, rejecting values above 9
    #[must_use]
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Self::Digit(d))
    }

    /// Returns the label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Dot => ".".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
        }
    }

    /// Parses a whitespace separated list of button labels
    ///
    /// Tokens made only of digits and dots expand to one event per
    /// character, so `"10.5 + 2 ="` presses six buttons.
    pub fn parse_script(script: &str) -> CalcResult<Vec<Self>> {
        let mut events = Vec::new();
        for token in script.split_whitespace() {
            if token.chars().all(|c| c.is_ascii_digit() || c == '.') {
                for c in token.chars() {
                    events.push(c.to_string().parse()?);
                }
            } else {
                events.push(token.parse()?);
            }
        }
        Ok(events)
    }
}

impl FromStr for Event {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let event = match label {
            "." => Self::Dot,
            "=" => Self::Equals,
            "+" => Self::Operator(Operator::Add),
            "-" => Self::Operator(Operator::Subtract),
            "×" | "*" | "x" => Self::Operator(Operator::Multiply),
            "÷" | "/" => Self::Operator(Operator::Divide),
            "⌫" => Self::Delete,
            _ => match label.to_ascii_uppercase().as_str() {
                "DEL" => Self::Delete,
                "AC" | "C" | "CLR" => Self::Clear,
                digit if digit.len() == 1 => digit
                    .chars()
                    .next()
                    .and_then(|c| c.to_digit(10))
                    .and_then(|d| Self::digit(d as u8))
                    .ok_or_else(|| CalcError::UnknownButton(label.to_string()))?,
                _ => return Err(CalcError::UnknownButton(label.to_string())),
            },
        };
        Ok(event)
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_constructor() {
        assert_eq!(Event::digit(0), Some(Event::Digit(0)));
        assert_eq!(Event::digit(9), Some(Event::Digit(9)));
        assert_eq!(Event::digit(10), None);
    }

    #[test]
    fn test_parse_digits_matches_constructor() {
        for d in 0..=9u8 {
            assert_eq!(d.to_string().parse::<Event>().ok(), Event::digit(d));
        }
        assert!("٣".parse::<Event>().is_err());
    }

    #[test]
    fn test_labels_match_keypad_buttons() {
        assert_eq!(Event::Digit(7).label(), "7");
        assert_eq!(Event::Dot.label(), ".");
        assert_eq!(Event::Delete.label(), "DEL");
        assert_eq!(Event::Clear.label(), "AC");
        assert_eq!(Event::Equals.label(), "=");
        assert_eq!(Event::Operator(Operator::Divide).label(), "÷");
    }

    #[test]
    fn test_parse_every_label_back() {
        let mut all: Vec<Event> = (0..=9).map(Event::Digit).collect();
        all.extend([Event::Dot, Event::Delete, Event::Clear, Event::Equals]);
        all.extend(Operator::ALL.map(Event::Operator));

        for event in all {
            assert_eq!(event.label().parse::<Event>(), Ok(event));
        }
    }

    #[test]
    fn test_parse_ascii_aliases() {
        assert_eq!("*".parse(), Ok(Event::Operator(Operator::Multiply)));
        assert_eq!("x".parse(), Ok(Event::Operator(Operator::Multiply)));
        assert_eq!("/".parse(), Ok(Event::Operator(Operator::Divide)));
        assert_eq!("c".parse(), Ok(Event::Clear));
        assert_eq!("del".parse(), Ok(Event::Delete));
        assert_eq!("⌫".parse(), Ok(Event::Delete));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "sqrt".parse::<Event>(),
            Err(CalcError::UnknownButton("sqrt".into()))
        );
        assert!("%".parse::<Event>().is_err());
        assert!("".parse::<Event>().is_err());
    }

    #[test]
    fn test_parse_script_expands_numbers() {
        let events = Event::parse_script("10.5 + 2 =").unwrap();
        assert_eq!(
            events,
            vec![
                Event::Digit(1),
                Event::Digit(0),
                Event::Dot,
                Event::Digit(5),
                Event::Operator(Operator::Add),
                Event::Digit(2),
                Event::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_script_empty() {
        assert_eq!(Event::parse_script("   ").unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_script_rejects_unknown_token() {
        assert!(matches!(
            Event::parse_script("2 ^ 3"),
            Err(CalcError::UnknownButton(token)) if token == "^"
        ));
    }
}
