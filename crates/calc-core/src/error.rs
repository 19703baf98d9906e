//! Error types for the calculator core

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors produced by the calculator core
///
/// Only [`CalcError::DivisionByZero`] can happen while pressing buttons, and
/// it never leaves the state machine: it is rendered as `Error` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Divide was applied with a zero operand
    #[error("Division by zero")]
    DivisionByZero,

    /// The display buffer does not hold a number (e.g. a lone ".")
    #[error("Invalid operand: {0:?}")]
    InvalidOperand(String),

    /// A button label that no calculator button carries
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),
}
