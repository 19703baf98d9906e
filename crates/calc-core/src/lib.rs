//! Calc Core - accumulator calculator state machine
//!
//! The whole calculator behind the `calc` keypad: one running `f64`
//! accumulator, one pending operator and the operand being typed. Button
//! presses arrive as [`Event`]s and each one returns the display text.
//!
//! There is no expression parsing and no precedence: `2 + 3 × 4 =` shows
//! `20`, because every operator press folds the typed operand into the
//! accumulator immediately.
//!
//! # Example
//!
//! ```rust
//! use calc_core::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for event in Event::parse_script("10.5 + 2").unwrap() {
//!     calc.handle_event(event);
//! }
//! assert_eq!(calc.handle_event(Event::Equals), "12.5");
//!
//! // Division by zero locks the calculator until AC
//! calc.handle_event(Event::Operator(Operator::Divide));
//! calc.handle_event(Event::Digit(0));
//! assert_eq!(calc.handle_event(Event::Equals), "Error");
//! assert_eq!(calc.handle_event(Event::Digit(1)), "Error");
//! assert_eq!(calc.handle_event(Event::Clear), "");
//! ```

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

pub mod driver;
pub mod error;
pub mod event;
pub mod format;
pub mod machine;
pub mod operator;

pub use error::{CalcError, CalcResult};
pub use event::Event;
pub use format::format_value;
pub use machine::{Calculator, Outcome, Phase, ERROR_TEXT};
pub use operator::Operator;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::driver::CalculatorDriver;
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::event::Event;
    pub use crate::format::format_value;
    pub use crate::machine::{Calculator, Outcome, Phase, ERROR_TEXT};
    pub use crate::operator::Operator;
}
