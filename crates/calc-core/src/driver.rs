//! Unified calculator driver
//!
//! Write the behavioural checks once and run them against anything that can
//! press buttons and read the display: the bare state machine here, or the
//! terminal shell clicking its keypad.

use crate::event::Event;
use crate::machine::{Calculator, ERROR_TEXT};
use crate::operator::Operator;

/// Anything that can press calculator buttons and read the display
pub trait CalculatorDriver {
    /// Presses a single button
    fn press(&mut self, event: Event);

    /// Reads the display text
    fn display(&self) -> String;

    /// Presses a sequence of buttons and returns the final display
    fn press_all(&mut self, events: &[Event]) -> String {
        for event in events {
            self.press(*event);
        }
        self.display()
    }

    /// Presses buttons given as a label script, e.g. `"2 + 3 ="`
    ///
    /// Panics on unknown labels; intended for verification code.
    #[allow(clippy::panic)]
    fn press_script(&mut self, script: &str) -> String {
        match Event::parse_script(script) {
            Ok(events) => self.press_all(&events),
            Err(err) => panic!("invalid script {script:?}: {err}"),
        }
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, event: Event) {
        Calculator::press(self, event);
    }

    fn display(&self) -> String {
        Calculator::display(self).to_string()
    }
}

fn reset<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Event::Clear);
    assert_eq!(driver.display(), "");
}

/// Typed digits are echoed verbatim before any operator
pub fn verify_buffer_echo<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    let mut expected = String::new();
    for d in [3, 1, 4, 1, 5, 9, 2, 6] {
        driver.press(Event::Digit(d));
        expected.push_str(&d.to_string());
        assert_eq!(driver.display(), expected);
    }
}

/// The four operators on whole numbers
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (script, expected) in [
        ("2 + 3 =", "5"),
        ("10 - 4 =", "6"),
        ("6 × 7 =", "42"),
        ("20 ÷ 4 =", "5"),
    ] {
        reset(driver);
        assert_eq!(driver.press_script(script), expected, "{script}");
    }
}

/// Decimal entry and non-integer results
pub fn verify_decimal_result<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    assert_eq!(driver.press_script("10.5 + 2 ="), "12.5");

    reset(driver);
    assert_eq!(driver.press_script(". . 5"), ".5");
}

/// Division by zero shows `Error` and locks everything but clear
pub fn verify_division_by_zero_lockout<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    assert_eq!(driver.press_script("6 ÷ 0 ="), ERROR_TEXT);

    for event in [
        Event::Digit(1),
        Event::Dot,
        Event::Delete,
        Event::Operator(Operator::Add),
        Event::Equals,
    ] {
        driver.press(event);
        assert_eq!(driver.display(), ERROR_TEXT);
    }

    driver.press(Event::Clear);
    assert_eq!(driver.display(), "");
}

/// A second equals does not repeat the last operation
pub fn verify_equals_idempotence<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    assert_eq!(driver.press_script("4 × 5 ="), "20");
    driver.press(Event::Equals);
    assert_eq!(driver.display(), "20");
}

/// Pressing another operator before typing replaces the pending one
pub fn verify_operator_substitution<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    assert_eq!(driver.press_script("5 + -"), "");
    assert_eq!(driver.press_script("2 ="), "3");
}

/// Results feed the next operation left to right, without precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    assert_eq!(driver.press_script("2 + 3 × 4 ="), "20");
    assert_eq!(driver.press_script("- 25 ="), "-5");
}

/// Runs every verification in turn
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_buffer_echo(driver);
    verify_basic_arithmetic(driver);
    verify_decimal_result(driver);
    verify_division_by_zero_lockout(driver);
    verify_equals_idempotence(driver);
    verify_operator_substitution(driver);
    verify_chaining(driver);
}
