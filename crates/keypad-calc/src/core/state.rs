//! The calculator state machine
//!
//! Four pieces of state drive everything: the display text, the pending
//! left operand, the pending operation, and the fresh-entry flag. The
//! operand and operation are stored as one [`PendingOperation`], so one is
//! never present without the other.

use serde::{Deserialize, Serialize};

use super::numeral::{format_numeral, parse_numeral};
use super::operations::{evaluate, Operation};
use super::{CalcError, CalcResult};
use crate::keypad::KeypadAction;

const ZERO: &str = "0";

/// Left operand and operation awaiting a right operand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingOperation {
    /// Left-hand operand
    pub operand: f64,
    /// Operation to apply once the right operand is known
    pub operation: Operation,
}

/// Effective mode derived from the state fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// No pending operation; digits edit the display freely
    Fresh,
    /// Operation pending; the next digit replaces the display
    Armed,
    /// Operation pending; digits append to the right operand
    Accumulating,
}

/// Keypad calculator state machine
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    pending: Option<PendingOperation>,
    awaiting_fresh_entry: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator showing `0` with nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: ZERO.to_string(),
            pending: None,
            awaiting_fresh_entry: false,
        }
    }

    /// Text on the primary display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Left operand of the pending operation
    #[must_use]
    pub fn previous_value(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    /// Operation waiting for its right operand
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending.map(|p| p.operation)
    }

    /// Pending operand and operation together
    #[must_use]
    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    /// Whether the next digit or decimal point starts a new numeral
    #[must_use]
    pub fn is_awaiting_fresh_entry(&self) -> bool {
        self.awaiting_fresh_entry
    }

    /// Current effective mode
    #[must_use]
    pub fn mode(&self) -> Mode {
        match (self.pending, self.awaiting_fresh_entry) {
            (None, _) => Mode::Fresh,
            (Some(_), true) => Mode::Armed,
            (Some(_), false) => Mode::Accumulating,
        }
    }

    /// Secondary line shown above the display, e.g. `"5 +"`.
    ///
    /// Empty when no operation is pending.
    #[must_use]
    pub fn history_line(&self) -> String {
        match self.pending {
            Some(p) => format!("{} {}", format_numeral(p.operand), p.operation.glyph()),
            None => String::new(),
        }
    }

    /// Numeric value of the display
    #[must_use]
    pub fn current_value(&self) -> f64 {
        parse_numeral(&self.display)
    }

    /// Enters a digit `0..=9`
    pub fn enter_digit(&mut self, digit: u8) -> CalcResult<()> {
        if digit > 9 {
            return Err(CalcError::InvalidDigit(digit));
        }
        let ch = char::from(b'0' + digit);

        if self.awaiting_fresh_entry {
            self.display = ch.to_string();
            self.awaiting_fresh_entry = false;
        } else if self.display == ZERO {
            self.display = ch.to_string();
        } else {
            self.display.push(ch);
        }
        tracing::trace!(display = %self.display, "digit entered");
        Ok(())
    }

    /// Enters a decimal point; a second point in the same numeral is ignored
    pub fn enter_decimal(&mut self) {
        if self.awaiting_fresh_entry {
            self.display = "0.".to_string();
            self.awaiting_fresh_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        } else {
            tracing::trace!(display = %self.display, "decimal point ignored");
        }
    }

    /// Arms `op`, first resolving any operation already pending
    pub fn apply_operation(&mut self, op: Operation) {
        let current = self.current_value();

        let operand = match self.pending {
            None => current,
            Some(p) => {
                let result = evaluate(p.operand, current, p.operation);
                self.display = format_numeral(result);
                result
            }
        };

        self.pending = Some(PendingOperation {
            operand,
            operation: op,
        });
        self.awaiting_fresh_entry = true;
        tracing::debug!(operand, op = ?op, display = %self.display, "operation armed");
    }

    /// Resolves the pending operation; does nothing when none is pending
    pub fn equals(&mut self) {
        let Some(p) = self.pending.take() else {
            tracing::trace!("equals ignored, nothing pending");
            return;
        };

        let result = evaluate(p.operand, self.current_value(), p.operation);
        self.display = format_numeral(result);
        self.awaiting_fresh_entry = true;
        tracing::debug!(display = %self.display, "equals resolved");
    }

    /// Resets every field to its default
    pub fn clear(&mut self) {
        *self = Self::new();
        tracing::debug!("cleared");
    }

    /// Removes the last display character, falling back to `0`
    pub fn backspace(&mut self) {
        if self.display.chars().count() <= 1 {
            self.display = ZERO.to_string();
            return;
        }

        self.display.pop();
        if self.display == "-" {
            self.display = ZERO.to_string();
        }
    }

    /// Divides the display by 100
    pub fn toggle_percentage(&mut self) {
        self.display = format_numeral(self.current_value() / 100.0);
    }

    /// Negates the display
    pub fn toggle_sign(&mut self) {
        self.display = format_numeral(-self.current_value());
    }

    /// Routes one keypad action to its handler
    pub fn apply(&mut self, action: KeypadAction) -> CalcResult<()> {
        match action {
            KeypadAction::Digit(d) => self.enter_digit(d)?,
            KeypadAction::Decimal => self.enter_decimal(),
            KeypadAction::Operator(op) => self.apply_operation(op),
            KeypadAction::Equals => self.equals(),
            KeypadAction::Clear => self.clear(),
            KeypadAction::Backspace => self.backspace(),
            KeypadAction::ToggleSign => self.toggle_sign(),
            KeypadAction::Percent => self.toggle_percentage(),
        }
        Ok(())
    }

    /// Captures the state and both output strings
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            previous_value: self.previous_value(),
            pending_operation: self.pending_operation(),
            awaiting_fresh_entry: self.awaiting_fresh_entry,
            mode: self.mode(),
            history_line: self.history_line(),
        }
    }
}

/// Serializable view of a [`Calculator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Primary display text
    pub display: String,
    /// Left operand, if an operation is pending
    pub previous_value: Option<f64>,
    /// Pending operation
    pub pending_operation: Option<Operation>,
    /// Fresh-entry flag
    pub awaiting_fresh_entry: bool,
    /// Derived mode
    pub mode: Mode,
    /// Secondary history line
    pub history_line: String,
}

impl Snapshot {
    /// Serializes the snapshot to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
