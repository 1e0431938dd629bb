//! Keypad layout and keyboard bindings
//!
//! Every on-screen button and every bound key produce the same
//! [`KeypadAction`] vocabulary, so hosts feed one event type into the
//! state machine.

use serde::{Deserialize, Serialize};

use crate::core::Operation;

/// Actions that keypad buttons and bound keys perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeypadAction {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Enter a decimal point
    Decimal,
    /// Arm a binary operation
    Operator(Operation),
    /// Resolve the pending operation
    Equals,
    /// Reset the calculator
    Clear,
    /// Remove the last display character
    Backspace,
    /// Negate the display
    ToggleSign,
    /// Divide the display by 100
    Percent,
}

impl KeypadAction {
    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.glyph().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "\u{2190} Backspace".to_string(),
            Self::ToggleSign => "+/-".to_string(),
            Self::Percent => "%".to_string(),
        }
    }

    /// Returns the DOM element id of the button for this action
    #[must_use]
    pub fn element_id(&self) -> String {
        match self {
            Self::Digit(d) => format!("btn-{d}"),
            Self::Decimal => "btn-decimal".to_string(),
            Self::Operator(op) => format!("btn-{}", op.name()),
            Self::Equals => "btn-equals".to_string(),
            Self::Clear => "btn-clear".to_string(),
            Self::Backspace => "btn-backspace".to_string(),
            Self::ToggleSign => "btn-sign".to_string(),
            Self::Percent => "btn-percent".to_string(),
        }
    }

    /// Returns the visual style of the button for this action
    #[must_use]
    pub const fn variant(&self) -> ButtonVariant {
        match self {
            Self::Digit(_) | Self::Decimal => ButtonVariant::Default,
            Self::Operator(_) => ButtonVariant::Operation,
            Self::Equals => ButtonVariant::Equals,
            Self::Clear | Self::Backspace | Self::ToggleSign | Self::Percent => {
                ButtonVariant::Function
            }
        }
    }
}

/// Visual style of a keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Digits and the decimal point
    Default,
    /// Binary operators
    Operation,
    /// The equals button
    Equals,
    /// Clear, backspace, sign and percent
    Function,
}

impl ButtonVariant {
    /// CSS class applied to buttons of this variant
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Default => "btn-default",
            Self::Operation => "btn-operation",
            Self::Equals => "btn-equals",
            Self::Function => "btn-function",
        }
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column of the leftmost cell (0-indexed)
    pub col: usize,
    /// Number of columns the button covers
    pub span: usize,
}

impl KeypadButtonDef {
    /// Creates a single-cell button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self::spanning(action, row, col, 1)
    }

    /// Creates a button covering `span` columns
    #[must_use]
    pub fn spanning(action: KeypadAction, row: usize, col: usize, span: usize) -> Self {
        Self {
            action,
            id: action.element_id(),
            row,
            col,
            span,
        }
    }

    /// Returns true if the button covers the given cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }
}

/// Keys and what they do, for help output
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("0-9", "Enter digit"),
    (".", "Decimal point"),
    ("+ -", "Add / subtract"),
    ("* /", "Multiply / divide"),
    ("Enter =", "Equals"),
    ("Backspace", "Delete last digit"),
    ("Escape", "Clear"),
];

/// Keypad layout definition
///
/// ```text
/// [ C ] [+/-] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ − ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [    0    ] [ . ] [ = ]
/// [     ← Backspace     ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{Backspace, Clear, Decimal, Digit, Equals, Operator, Percent, ToggleSign};

        let buttons = vec![
            // Row 0: C +/- % ÷
            KeypadButtonDef::new(Clear, 0, 0),
            KeypadButtonDef::new(ToggleSign, 0, 1),
            KeypadButtonDef::new(Percent, 0, 2),
            KeypadButtonDef::new(Operator(Operation::Divide), 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButtonDef::new(Digit(7), 1, 0),
            KeypadButtonDef::new(Digit(8), 1, 1),
            KeypadButtonDef::new(Digit(9), 1, 2),
            KeypadButtonDef::new(Operator(Operation::Multiply), 1, 3),
            // Row 2: 4 5 6 −
            KeypadButtonDef::new(Digit(4), 2, 0),
            KeypadButtonDef::new(Digit(5), 2, 1),
            KeypadButtonDef::new(Digit(6), 2, 2),
            KeypadButtonDef::new(Operator(Operation::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButtonDef::new(Digit(1), 3, 0),
            KeypadButtonDef::new(Digit(2), 3, 1),
            KeypadButtonDef::new(Digit(3), 3, 2),
            KeypadButtonDef::new(Operator(Operation::Add), 3, 3),
            // Row 4: 0 (wide) . =
            KeypadButtonDef::spanning(Digit(0), 4, 0, 2),
            KeypadButtonDef::new(Decimal, 4, 2),
            KeypadButtonDef::new(Equals, 4, 3),
            // Row 5: backspace across the full width
            KeypadButtonDef::spanning(Backspace, 5, 0, 4),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 6,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButtonDef> {
        self.buttons.get(index)
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button that performs an action
    #[must_use]
    pub fn find_button_by_action(&self, action: KeypadAction) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Processes a button click and returns its action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_button_by_id(element_id).map(|btn| btn.action)
    }

    /// Maps a keyboard key (DOM `KeyboardEvent.key` naming) to an action.
    ///
    /// Sign toggle and percent have no key.
    #[must_use]
    pub fn key_to_action(key: &str) -> Option<KeypadAction> {
        match key {
            "." => Some(KeypadAction::Decimal),
            "Enter" | "=" => Some(KeypadAction::Equals),
            "Backspace" => Some(KeypadAction::Backspace),
            "Escape" => Some(KeypadAction::Clear),
            _ => {
                if let [b @ b'0'..=b'9'] = key.as_bytes() {
                    return Some(KeypadAction::Digit(*b - b'0'));
                }
                Operation::from_key(key).map(KeypadAction::Operator)
            }
        }
    }

    /// Whether the host should suppress the default behaviour of a key.
    ///
    /// Every bound key except the digits is suppressed, so `/` does not open
    /// quick-find and `Backspace` does not navigate back.
    #[must_use]
    pub fn suppresses_default(key: &str) -> bool {
        matches!(
            Self::key_to_action(key),
            Some(action) if !matches!(action, KeypadAction::Digit(_))
        )
    }
}
