//! Accumulator state machine
//!
//! Every button press goes through [`Calculator::press`]. The machine keeps
//! the typed operand as text, a running `f64` accumulator and the operator
//! waiting for its right-hand side.
//!
//! ```text
//!            digit/dot/del            digit/dot/del
//!              ┌──────┐                 ┌──────┐
//!              ▼      │   operator      ▼      │
//!           ┌──────────┴─┐ ─────────▶ ┌─────────┴───────┐
//!  clear ──▶│    Idle    │            │ AwaitingOperand │◀─┐ operator
//!           └────────────┘ ◀───────── └─────────────────┘──┘
//!                 ▲           equals          │
//!                 │                           │ ÷ 0
//!                 │  clear    ┌───────┐       │
//!                 └────────── │ Error │◀──────┘
//!                             └───────┘
//! ```

use crate::error::{CalcError, CalcResult};
use crate::event::Event;
use crate::format::format_value;
use crate::operator::Operator;

/// Text shown while the divide-by-zero lockout is active
pub const ERROR_TEXT: &str = "Error";

/// Externally observable state of the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No operator committed; the next operator captures the first operand
    Idle,
    /// An operator is pending and waits for its second operand
    AwaitingOperand,
    /// Division by zero happened; only clear is accepted
    Error,
}

/// Whether a press changed anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The event mutated the state
    Applied,
    /// The event was inert in the current state
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    FirstOperand,
    Chained(Operator),
    Error,
}

/// Four-operator accumulator calculator
#[derive(Debug, Clone)]
pub struct Calculator {
    buffer: String,
    accumulator: f64,
    mode: Mode,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a cleared calculator
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            accumulator: 0.0,
            mode: Mode::FirstOperand,
        }
    }

    /// Applies one event and returns the text to display
    pub fn handle_event(&mut self, event: Event) -> &str {
        self.press(event);
        self.display()
    }

    /// Applies one event, reporting whether it had any effect
    pub fn press(&mut self, event: Event) -> Outcome {
        let outcome = self.apply(event);
        tracing::trace!(?event, ?outcome, phase = ?self.phase(), buffer = %self.buffer, "press");
        outcome
    }

    /// Text for the display field
    #[must_use]
    pub fn display(&self) -> &str {
        match self.mode {
            Mode::Error => ERROR_TEXT,
            Mode::FirstOperand | Mode::Chained(_) => &self.buffer,
        }
    }

    /// The operand currently being typed
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The running result
    #[must_use]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// The operator waiting for a second operand, if any
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        match self.mode {
            Mode::Chained(op) => Some(op),
            Mode::FirstOperand | Mode::Error => None,
        }
    }

    /// True when the next operator press captures the first operand
    #[must_use]
    pub fn awaiting_first_operand(&self) -> bool {
        !matches!(self.mode, Mode::Chained(_))
    }

    /// True while the divide-by-zero lockout is active
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.mode == Mode::Error
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.mode {
            Mode::FirstOperand => Phase::Idle,
            Mode::Chained(_) => Phase::AwaitingOperand,
            Mode::Error => Phase::Error,
        }
    }

    fn apply(&mut self, event: Event) -> Outcome {
        match (event, self.mode) {
            (Event::Clear, _) => {
                self.clear();
                Outcome::Applied
            }
            (_, Mode::Error) => Outcome::Ignored,
            (Event::Digit(d), _) => match char::from_digit(u32::from(d), 10) {
                Some(c) => {
                    self.buffer.push(c);
                    Outcome::Applied
                }
                None => Outcome::Ignored,
            },
            (Event::Dot, _) if self.buffer.contains('.') => Outcome::Ignored,
            (Event::Dot, _) => {
                self.buffer.push('.');
                Outcome::Applied
            }
            (Event::Delete, _) => match self.buffer.pop() {
                Some(_) => Outcome::Applied,
                None => Outcome::Ignored,
            },
            (Event::Operator(op), mode) => self.press_operator(op, mode),
            (Event::Equals, Mode::Chained(pending)) => self.press_equals(pending),
            (Event::Equals, Mode::FirstOperand) => Outcome::Ignored,
        }
    }

    fn press_operator(&mut self, op: Operator, mode: Mode) -> Outcome {
        match (mode, self.operand()) {
            (Mode::FirstOperand, Ok(value)) => {
                self.accumulator = value;
                self.mode = Mode::Chained(op);
                self.buffer.clear();
                Outcome::Applied
            }
            (Mode::Chained(pending), Ok(value)) => {
                if self.equate(pending, value).is_ok() {
                    self.mode = Mode::Chained(op);
                    self.buffer.clear();
                }
                Outcome::Applied
            }
            (Mode::Chained(_), Err(_)) if self.buffer.is_empty() => {
                self.mode = Mode::Chained(op);
                Outcome::Applied
            }
            _ => Outcome::Ignored,
        }
    }

    fn press_equals(&mut self, pending: Operator) -> Outcome {
        let Ok(value) = self.operand() else {
            return Outcome::Ignored;
        };
        if self.equate(pending, value).is_ok() {
            self.mode = Mode::FirstOperand;
            self.buffer = format_value(self.accumulator);
        }
        Outcome::Applied
    }

    /// Folds `value` into the accumulator, entering the error lockout on
    /// division by zero
    fn equate(&mut self, pending: Operator, value: f64) -> CalcResult<()> {
        match pending.apply(self.accumulator, value) {
            Ok(result) => {
                self.accumulator = result;
                Ok(())
            }
            Err(err) => {
                tracing::debug!(accumulator = self.accumulator, %err, "entering error lockout");
                self.mode = Mode::Error;
                self.buffer.clear();
                Err(err)
            }
        }
    }

    fn operand(&self) -> CalcResult<f64> {
        self.buffer
            .parse()
            .map_err(|_| CalcError::InvalidOperand(self.buffer.clone()))
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.accumulator = 0.0;
        self.mode = Mode::FirstOperand;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADD: Event = Event::Operator(Operator::Add);
    const SUB: Event = Event::Operator(Operator::Subtract);
    const MUL: Event = Event::Operator(Operator::Multiply);
    const DIV: Event = Event::Operator(Operator::Divide);

    fn run(calc: &mut Calculator, events: &[Event]) -> String {
        for event in events {
            calc.press(*event);
        }
        calc.display().to_string()
    }

    fn fresh(events: &[Event]) -> Calculator {
        let mut calc = Calculator::new();
        run(&mut calc, events);
        calc
    }

    // ===== Construction =====

    #[test]
    fn test_new_is_cleared() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "");
        assert_eq!(calc.accumulator(), 0.0);
        assert_eq!(calc.pending_operator(), None);
        assert!(calc.awaiting_first_operand());
        assert!(!calc.is_error());
        assert_eq!(calc.phase(), Phase::Idle);
    }

    #[test]
    fn test_default() {
        assert_eq!(Calculator::default().display(), "");
    }

    // ===== Editing =====

    #[test]
    fn test_digits_echo() {
        let mut calc = Calculator::new();
        assert_eq!(calc.handle_event(Event::Digit(4)), "4");
        assert_eq!(calc.handle_event(Event::Digit(2)), "42");
    }

    #[test]
    fn test_leading_zeros_are_kept_in_buffer() {
        let calc = fresh(&[Event::Digit(0), Event::Digit(0), Event::Digit(7)]);
        assert_eq!(calc.buffer(), "007");
    }

    #[test]
    fn test_out_of_range_digit_ignored() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press(Event::Digit(12)), Outcome::Ignored);
        assert_eq!(calc.display(), "");
    }

    #[test]
    fn test_second_dot_ignored() {
        let mut calc = fresh(&[Event::Digit(1), Event::Dot]);
        assert_eq!(calc.press(Event::Dot), Outcome::Ignored);
        assert_eq!(calc.display(), "1.");
        calc.press(Event::Digit(5));
        assert_eq!(calc.press(Event::Dot), Outcome::Ignored);
        assert_eq!(calc.display(), "1.5");
    }

    #[test]
    fn test_leading_dot() {
        let calc = fresh(&[Event::Dot, Event::Digit(5)]);
        assert_eq!(calc.display(), ".5");
    }

    #[test]
    fn test_delete_last_char() {
        let mut calc = fresh(&[Event::Digit(1), Event::Digit(2)]);
        assert_eq!(calc.handle_event(Event::Delete), "1");
    }

    #[test]
    fn test_delete_on_empty_is_noop() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press(Event::Delete), Outcome::Ignored);
        assert_eq!(calc.display(), "");
    }

    #[test]
    fn test_delete_removes_lone_dot() {
        let mut calc = fresh(&[Event::Dot]);
        assert_eq!(calc.handle_event(Event::Delete), "");
    }

    #[test]
    fn test_delete_then_dot_allowed_again() {
        let mut calc = fresh(&[Event::Digit(1), Event::Dot, Event::Delete]);
        assert_eq!(calc.handle_event(Event::Dot), "1.");
    }

    // ===== Operators =====

    #[test]
    fn test_first_operator_captures_operand() {
        let calc = fresh(&[Event::Digit(5), ADD]);
        assert_eq!(calc.accumulator(), 5.0);
        assert_eq!(calc.pending_operator(), Some(Operator::Add));
        assert!(!calc.awaiting_first_operand());
        assert_eq!(calc.phase(), Phase::AwaitingOperand);
        assert_eq!(calc.display(), "");
    }

    #[test]
    fn test_operator_on_empty_idle_ignored() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press(ADD), Outcome::Ignored);
        assert_eq!(calc.phase(), Phase::Idle);
        assert_eq!(calc.pending_operator(), None);
    }

    #[test]
    fn test_operator_substitution() {
        let mut calc = fresh(&[Event::Digit(5), ADD]);
        assert_eq!(calc.press(SUB), Outcome::Applied);
        assert_eq!(calc.pending_operator(), Some(Operator::Subtract));
        assert_eq!(calc.accumulator(), 5.0);
        assert_eq!(calc.display(), "");
    }

    #[test]
    fn test_substituted_operator_is_used() {
        let mut calc = Calculator::new();
        let display = run(
            &mut calc,
            &[Event::Digit(9), ADD, MUL, DIV, SUB, Event::Digit(4), Event::Equals],
        );
        assert_eq!(display, "5");
    }

    #[test]
    fn test_chained_operator_equates() {
        let calc = fresh(&[Event::Digit(2), ADD, Event::Digit(3), MUL]);
        assert_eq!(calc.accumulator(), 5.0);
        assert_eq!(calc.pending_operator(), Some(Operator::Multiply));
        assert_eq!(calc.display(), "");
    }

    #[test]
    fn test_no_precedence() {
        let mut calc = Calculator::new();
        let display = run(
            &mut calc,
            &[Event::Digit(2), ADD, Event::Digit(3), MUL, Event::Digit(4), Event::Equals],
        );
        assert_eq!(display, "20");
    }

    #[test]
    fn test_lone_dot_operand_ignored() {
        let mut calc = fresh(&[Event::Dot]);
        assert_eq!(calc.press(ADD), Outcome::Ignored);
        assert_eq!(calc.phase(), Phase::Idle);
        assert_eq!(calc.display(), ".");

        let mut calc = fresh(&[Event::Digit(2), ADD, Event::Dot]);
        assert_eq!(calc.press(SUB), Outcome::Ignored);
        assert_eq!(calc.pending_operator(), Some(Operator::Add));
        assert_eq!(calc.press(Event::Equals), Outcome::Ignored);
        assert_eq!(calc.display(), ".");
    }

    // ===== Equals =====

    #[test]
    fn test_addition() {
        let mut calc = Calculator::new();
        assert_eq!(run(&mut calc, &[Event::Digit(2), ADD, Event::Digit(3), Event::Equals]), "5");
    }

    #[test]
    fn test_subtraction_negative() {
        let mut calc = Calculator::new();
        assert_eq!(run(&mut calc, &[Event::Digit(2), SUB, Event::Digit(9), Event::Equals]), "-7");
    }

    #[test]
    fn test_non_integer_result() {
        let mut calc = Calculator::new();
        let events = [
            Event::Digit(1),
            Event::Digit(0),
            Event::Dot,
            Event::Digit(5),
            ADD,
            Event::Digit(2),
            Event::Equals,
        ];
        assert_eq!(run(&mut calc, &events), "12.5");
    }

    #[test]
    fn test_equals_before_operator_ignored() {
        let mut calc = fresh(&[Event::Digit(7)]);
        assert_eq!(calc.press(Event::Equals), Outcome::Ignored);
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_equals_with_empty_operand_ignored() {
        let mut calc = fresh(&[Event::Digit(7), ADD]);
        assert_eq!(calc.press(Event::Equals), Outcome::Ignored);
        assert_eq!(calc.pending_operator(), Some(Operator::Add));
    }

    #[test]
    fn test_equals_twice_is_idempotent() {
        let mut calc = fresh(&[Event::Digit(4), MUL, Event::Digit(5)]);
        assert_eq!(calc.handle_event(Event::Equals), "20");
        assert_eq!(calc.press(Event::Equals), Outcome::Ignored);
        assert_eq!(calc.display(), "20");
        assert!(calc.awaiting_first_operand());
    }

    #[test]
    fn test_result_chains_into_next_operator() {
        let mut calc = fresh(&[Event::Digit(4), MUL, Event::Digit(5), Event::Equals]);
        assert_eq!(run(&mut calc, &[SUB, Event::Digit(8), Event::Equals]), "12");
    }

    #[test]
    fn test_digits_append_to_result() {
        let mut calc = fresh(&[Event::Digit(2), ADD, Event::Digit(3), Event::Equals]);
        assert_eq!(calc.handle_event(Event::Digit(1)), "51");
    }

    #[test]
    fn test_dot_after_fractional_result_ignored() {
        let mut calc = fresh(&[Event::Digit(5), DIV, Event::Digit(2), Event::Equals]);
        assert_eq!(calc.display(), "2.5");
        assert_eq!(calc.press(Event::Dot), Outcome::Ignored);
    }

    #[test]
    fn test_negative_result_chains() {
        let mut calc = fresh(&[Event::Digit(1), SUB, Event::Digit(4), Event::Equals]);
        assert_eq!(run(&mut calc, &[MUL, Event::Digit(2), Event::Equals]), "-6");
    }

    #[test]
    fn test_overflow_chains_as_infinity() {
        let mut calc = Calculator::new();
        let mut events = vec![Event::Digit(9)];
        for _ in 0..400 {
            events.push(Event::Digit(9));
        }
        events.extend([MUL, Event::Digit(9)]);
        for _ in 0..400 {
            events.push(Event::Digit(9));
        }
        events.push(Event::Equals);
        assert_eq!(run(&mut calc, &events), "inf");
        assert_eq!(run(&mut calc, &[ADD, Event::Digit(1), Event::Equals]), "inf");
    }

    // ===== Division by zero =====

    #[test]
    fn test_divide_by_zero_on_equals() {
        let mut calc = fresh(&[Event::Digit(6), DIV, Event::Digit(0)]);
        assert_eq!(calc.handle_event(Event::Equals), ERROR_TEXT);
        assert!(calc.is_error());
        assert_eq!(calc.phase(), Phase::Error);
        assert_eq!(calc.accumulator(), 6.0);
    }

    #[test]
    fn test_divide_by_zero_on_chained_operator() {
        let mut calc = fresh(&[Event::Digit(6), DIV, Event::Digit(0)]);
        assert_eq!(calc.handle_event(ADD), ERROR_TEXT);
        assert!(calc.is_error());
        assert_eq!(calc.pending_operator(), None);
    }

    #[test]
    fn test_divide_by_zero_point_zero() {
        let mut calc = Calculator::new();
        let events = [Event::Digit(1), DIV, Event::Digit(0), Event::Dot, Event::Digit(0), Event::Equals];
        assert_eq!(run(&mut calc, &events), ERROR_TEXT);
    }

    #[test]
    fn test_error_lockout() {
        let mut calc = fresh(&[Event::Digit(6), DIV, Event::Digit(0), Event::Equals]);
        for event in [Event::Digit(1), Event::Dot, Event::Delete, ADD, Event::Equals] {
            assert_eq!(calc.press(event), Outcome::Ignored);
            assert_eq!(calc.display(), ERROR_TEXT);
        }
    }

    #[test]
    fn test_clear_leaves_error() {
        let mut calc = fresh(&[Event::Digit(6), DIV, Event::Digit(0), Event::Equals]);
        assert_eq!(calc.handle_event(Event::Clear), "");
        assert!(!calc.is_error());
        assert_eq!(calc.accumulator(), 0.0);
        assert_eq!(calc.phase(), Phase::Idle);
        assert_eq!(run(&mut calc, &[Event::Digit(3), ADD, Event::Digit(4), Event::Equals]), "7");
    }

    // ===== Clear =====

    #[test]
    fn test_clear_mid_operation() {
        let mut calc = fresh(&[Event::Digit(8), MUL, Event::Digit(2)]);
        assert_eq!(calc.press(Event::Clear), Outcome::Applied);
        assert_eq!(calc.display(), "");
        assert_eq!(calc.accumulator(), 0.0);
        assert_eq!(calc.pending_operator(), None);
        assert!(calc.awaiting_first_operand());
    }
}
