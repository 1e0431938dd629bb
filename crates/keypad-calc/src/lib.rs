//! Keypad Calculator - running-expression calculator widget
//!
//! A classic four-function keypad calculator. Pressing an operator resolves
//! whatever operation is already pending, left to right, so `2 + 3 × 4 =`
//! shows `20`.
//!
//! # Layers
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌─────────────────────────┐
//! │ core         │◄──│ keypad       │◄──│ wasm                    │
//! │ Calculator   │   │ Keypad       │   │ CalculatorWidget        │
//! │ Operation    │   │ KeypadAction │   │ MockDom / Browser mount │
//! └──────────────┘   └──────────────┘   └─────────────────────────┘
//!         ▲                                         ▲
//!         └──────────── driver::CalculatorDriver ───┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.enter_digit(2).unwrap();
//! calc.apply_operation(Operation::Add);
//! calc.enter_digit(3).unwrap();
//! calc.apply_operation(Operation::Multiply);
//! assert_eq!(calc.display(), "5");
//! assert_eq!(calc.history_line(), "5 ×");
//!
//! calc.enter_digit(4).unwrap();
//! calc.equals();
//! assert_eq!(calc.display(), "20");
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

pub mod core;
pub mod driver;
pub mod keypad;

/// Widget module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        evaluate, format_numeral, parse_numeral, CalcError, CalcResult, Calculator, Mode,
        Operation, PendingOperation, Snapshot,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{ButtonVariant, Keypad, KeypadAction, KeypadButtonDef};

    #[cfg(feature = "wasm")]
    pub use crate::wasm::BrowserCalculator;
    pub use crate::wasm::{CalculatorWidget, DomElement, DomEvent, MockDom, MountedWidget};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = Calculator::new();
        calc.apply(KeypadAction::Digit(6)).unwrap();
        calc.apply(KeypadAction::Operator(Operation::Multiply)).unwrap();
        calc.apply(KeypadAction::Digit(7)).unwrap();
        calc.apply(KeypadAction::Equals).unwrap();
        assert_eq!(calc.display(), "42");
    }

    #[test]
    fn test_widget_and_calculator_agree() {
        let actions = [
            KeypadAction::Digit(1),
            KeypadAction::Decimal,
            KeypadAction::Digit(5),
            KeypadAction::Operator(Operation::Subtract),
            KeypadAction::Digit(4),
            KeypadAction::Percent,
            KeypadAction::Equals,
        ];

        let mut calc = Calculator::new();
        calc.press_all(&actions).unwrap();

        let mut dom = MockDom::new();
        let mut widget = CalculatorWidget::new();
        let mut mounted = widget.mount(&mut dom);
        mounted.press_all(&actions).unwrap();

        assert_eq!(mounted.display_text(), calc.display());
        assert_eq!(calc.display(), "1.46");
    }

    #[test]
    fn test_snapshot_json() {
        let mut calc = Calculator::new();
        calc.apply(KeypadAction::Digit(8)).unwrap();
        calc.apply(KeypadAction::Operator(Operation::Divide)).unwrap();
        let json = calc.snapshot().to_json().unwrap();
        assert!(json.contains("\"display\":\"8\""));
        assert!(json.contains("\"pending_operation\":\"divide\""));
        assert!(json.contains("\"mode\":\"armed\""));
    }
}
