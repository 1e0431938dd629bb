//! Binary operations and the pure evaluation step
//!
//! Operations resolve strictly left to right as they are entered;
//! there is no precedence between them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four keypad operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// All operations in keypad order (top to bottom in the operator column)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the glyph shown on the button and in the history line
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{d7}",
            Self::Divide => "\u{f7}",
        }
    }

    /// Returns the keyboard key bound to this operation
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Returns a short name used in element ids
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
        }
    }

    /// Looks up an operation by keyboard key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.key() == key)
    }

    /// Looks up an operation by glyph, accepting the ASCII hyphen for subtract
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        if glyph == "-" {
            return Some(Self::Subtract);
        }
        Self::ALL.into_iter().find(|op| op.glyph() == glyph)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Resolves `prev op current`.
///
/// Division by zero yields `0` rather than an error or infinity. A result
/// outside the finite `f64` range is reported as `0` under the same policy,
/// so every value this returns can be shown on the display.
#[must_use]
pub fn evaluate(prev: f64, current: f64, op: Operation) -> f64 {
    let result = match op {
        Operation::Add => prev + current,
        Operation::Subtract => prev - current,
        Operation::Multiply => prev * current,
        Operation::Divide => {
            if current == 0.0 {
                tracing::debug!(prev, "division by zero resolved to 0");
                return 0.0;
            }
            prev / current
        }
    };

    if result.is_finite() {
        result
    } else {
        tracing::warn!(prev, current, op = ?op, "non-finite result resolved to 0");
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== Operation metadata =====

    #[test]
    fn test_operation_glyphs() {
        assert_eq!(Operation::Add.glyph(), "+");
        assert_eq!(Operation::Subtract.glyph(), "−");
        assert_eq!(Operation::Multiply.glyph(), "×");
        assert_eq!(Operation::Divide.glyph(), "÷");
    }

    #[test]
    fn test_operation_keys() {
        assert_eq!(Operation::Add.key(), "+");
        assert_eq!(Operation::Subtract.key(), "-");
        assert_eq!(Operation::Multiply.key(), "*");
        assert_eq!(Operation::Divide.key(), "/");
    }

    #[test]
    fn test_operation_names() {
        let names: Vec<_> = Operation::ALL.iter().map(Operation::name).collect();
        assert_eq!(names, vec!["divide", "times", "minus", "plus"]);
    }

    #[test]
    fn test_operation_from_key() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_key(op.key()), Some(op));
        }
        assert_eq!(Operation::from_key("^"), None);
        assert_eq!(Operation::from_key("×"), None);
    }

    #[test]
    fn test_operation_from_glyph() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_glyph(op.glyph()), Some(op));
        }
        assert_eq!(Operation::from_glyph("-"), Some(Operation::Subtract));
        assert_eq!(Operation::from_glyph("*"), None);
    }

    #[test]
    fn test_operation_display_uses_glyph() {
        assert_eq!(Operation::Multiply.to_string(), "×");
    }

    #[test]
    fn test_operation_serde_lowercase() {
        let json = serde_json::to_string(&Operation::Divide).unwrap();
        assert_eq!(json, "\"divide\"");
        let op: Operation = serde_json::from_str("\"subtract\"").unwrap();
        assert_eq!(op, Operation::Subtract);
    }

    // ===== evaluate =====

    #[test]
    fn test_evaluate_basic() {
        assert_eq!(evaluate(2.0, 3.0, Operation::Add), 5.0);
        assert_eq!(evaluate(5.0, 3.0, Operation::Subtract), 2.0);
        assert_eq!(evaluate(4.0, 3.0, Operation::Multiply), 12.0);
        assert_eq!(evaluate(12.0, 4.0, Operation::Divide), 3.0);
    }

    #[test]
    fn test_evaluate_divide_by_zero_is_zero() {
        assert_eq!(evaluate(5.0, 0.0, Operation::Divide), 0.0);
        assert_eq!(evaluate(-5.0, 0.0, Operation::Divide), 0.0);
        assert_eq!(evaluate(0.0, 0.0, Operation::Divide), 0.0);
    }

    #[test]
    fn test_evaluate_divide_by_negative_zero_is_zero() {
        assert_eq!(evaluate(5.0, -0.0, Operation::Divide), 0.0);
    }

    #[test]
    fn test_evaluate_overflow_is_zero() {
        assert_eq!(evaluate(f64::MAX, 10.0, Operation::Multiply), 0.0);
        assert_eq!(evaluate(f64::MAX, f64::MAX, Operation::Add), 0.0);
        assert_eq!(evaluate(-f64::MAX, f64::MAX, Operation::Subtract), 0.0);
        assert_eq!(evaluate(f64::MAX, 0.5, Operation::Divide), 0.0);
    }

    #[test]
    fn test_evaluate_floating_semantics() {
        assert_eq!(evaluate(0.1, 0.2, Operation::Add), 0.1 + 0.2);
    }

    proptest! {
        #[test]
        fn prop_evaluate_is_finite(
            a in -1e150f64..1e150f64,
            b in -1e150f64..1e150f64,
            op in prop::sample::select(Operation::ALL.to_vec()),
        ) {
            prop_assert!(evaluate(a, b, op).is_finite());
        }

        #[test]
        fn prop_add_commutes(a in -1e6f64..1e6f64, b in -1e6f64..1e6f64) {
            prop_assert_eq!(evaluate(a, b, Operation::Add), evaluate(b, a, Operation::Add));
        }
    }
}
