//! Unified calculator driver
//!
//! Behavioural checks are written once against [`CalculatorDriver`] and run
//! against every host: the bare state machine, the mounted mock-DOM widget,
//! and anything else that can press keypad buttons and read the display.

use crate::core::{CalcError, CalcResult, Calculator, Operation};
use crate::keypad::{Keypad, KeypadAction};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses the on-screen button for an action
    fn press(&mut self, action: KeypadAction) -> CalcResult<()>;

    /// Presses a keyboard key
    fn press_key(&mut self, key: &str) -> CalcResult<()>;

    /// Primary display text
    fn display(&self) -> String;

    /// History line text
    fn history_line(&self) -> String;

    /// Presses clear
    fn clear(&mut self) -> CalcResult<()> {
        self.press(KeypadAction::Clear)
    }

    /// Presses each action in order
    fn press_all(&mut self, actions: &[KeypadAction]) -> CalcResult<()> {
        actions.iter().try_for_each(|action| self.press(*action))
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, action: KeypadAction) -> CalcResult<()> {
        self.apply(action)
    }

    fn press_key(&mut self, key: &str) -> CalcResult<()> {
        let action = Keypad::key_to_action(key).ok_or_else(|| CalcError::unknown_key(key))?;
        self.apply(action)
    }

    fn display(&self) -> String {
        Calculator::display(self).to_string()
    }

    fn history_line(&self) -> String {
        Calculator::history_line(self)
    }
}

// ===== Shared specifications =====
// These work with ANY CalculatorDriver implementation.

const ADD: KeypadAction = KeypadAction::Operator(Operation::Add);
const MULTIPLY: KeypadAction = KeypadAction::Operator(Operation::Multiply);
const DIVIDE: KeypadAction = KeypadAction::Operator(Operation::Divide);

/// Clear always returns to `0` with nothing pending
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press_all(&[KeypadAction::Digit(1), KeypadAction::Digit(2), DIVIDE])?;
    driver.clear()?;
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.history_line(), "");
    driver.clear()?;
    assert_eq!(driver.display(), "0");
    Ok(())
}

/// `2 + 3 × 4 =` resolves left to right to 20
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press_all(&[
        KeypadAction::Digit(2),
        ADD,
        KeypadAction::Digit(3),
        MULTIPLY,
    ])?;
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.history_line(), "5 ×");
    driver.press_all(&[KeypadAction::Digit(4), KeypadAction::Equals])?;
    assert_eq!(driver.display(), "20");
    Ok(())
}

/// `5 ÷ 0 =` shows 0
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press_all(&[
        KeypadAction::Digit(5),
        DIVIDE,
        KeypadAction::Digit(0),
        KeypadAction::Equals,
    ])?;
    assert_eq!(driver.display(), "0");
    Ok(())
}

/// Backspace never empties the display
pub fn verify_backspace_floor<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press_all(&[
        KeypadAction::Digit(7),
        KeypadAction::Backspace,
        KeypadAction::Backspace,
    ])?;
    assert_eq!(driver.display(), "0");
    Ok(())
}

/// A second decimal point in one numeral is ignored
pub fn verify_decimal_guard<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press_all(&[
        KeypadAction::Digit(1),
        KeypadAction::Decimal,
        KeypadAction::Decimal,
        KeypadAction::Digit(2),
    ])?;
    assert_eq!(driver.display(), "1.2");
    Ok(())
}

/// The first digit after an operator replaces the display
pub fn verify_fresh_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press_all(&[KeypadAction::Digit(9), ADD, KeypadAction::Digit(3)])?;
    assert_eq!(driver.display(), "3");
    Ok(())
}

/// Percent and sign only touch the display
pub fn verify_sign_percent_purity<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press_all(&[
        KeypadAction::Digit(4),
        ADD,
        KeypadAction::Digit(5),
        KeypadAction::Percent,
    ])?;
    assert_eq!(driver.display(), "0.05");
    assert_eq!(driver.history_line(), "4 +");
    driver.press_all(&[KeypadAction::ToggleSign, KeypadAction::ToggleSign])?;
    assert_eq!(driver.history_line(), "4 +");
    driver.press(KeypadAction::Equals)?;
    assert_eq!(driver.display(), "4.05");
    Ok(())
}

/// Keyboard keys behave like their buttons
pub fn verify_keyboard<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press_key("Escape")?;
    for key in ["1", "2", ".", "5", "*", "2", "="] {
        driver.press_key(key)?;
    }
    assert_eq!(driver.display(), "25");
    driver.press_key("Backspace")?;
    assert_eq!(driver.display(), "2");
    driver.press_key("-")?;
    assert_eq!(driver.history_line(), "2 −");
    driver.press_key("Enter")?;
    assert_eq!(driver.display(), "0");
    assert!(matches!(
        driver.press_key("%"),
        Err(CalcError::UnknownKey(_))
    ));
    Ok(())
}

/// Runs every shared specification
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_clear(driver)?;
    verify_chaining(driver)?;
    verify_divide_by_zero(driver)?;
    verify_backspace_floor(driver)?;
    verify_decimal_guard(driver)?;
    verify_fresh_entry(driver)?;
    verify_sign_percent_purity(driver)?;
    verify_keyboard(driver)?;
    Ok(())
}
