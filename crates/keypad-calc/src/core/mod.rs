//! Calculator core: the keypad state machine and its arithmetic
//!
//! The state machine itself is total. Errors only surface at the edges
//! where untyped input (raw digits, key names, element ids) enters the crate.

mod numeral;
mod operations;
mod state;

pub use numeral::{format_numeral, parse_numeral};
pub use operations::{evaluate, Operation};
pub use state::{Calculator, Mode, PendingOperation, Snapshot};

use thiserror::Error;

/// Result type for calculator entry points that accept untyped input
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised when untyped input cannot be mapped to a calculator event
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A digit outside `0..=9`
    #[error("Invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),
    /// A key name with no binding
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),
    /// An element id that is not a keypad button
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),
}

impl CalcError {
    /// Creates an unknown-key error
    #[must_use]
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey(key.into())
    }

    /// Creates an unknown-button error
    #[must_use]
    pub fn unknown_button(id: impl Into<String>) -> Self {
        Self::UnknownButton(id.into())
    }
}
