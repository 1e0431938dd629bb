//! [`CalculatorDriver`] over a mounted widget
//!
//! Presses go through DOM events and reads come from the rendered elements,
//! so the shared behaviour checks exercise the full mount binding.

use super::widget::MountedWidget;
use crate::core::{CalcError, CalcResult};
use crate::driver::CalculatorDriver;
use crate::keypad::KeypadAction;

impl CalculatorDriver for MountedWidget<'_> {
    fn press(&mut self, action: KeypadAction) -> CalcResult<()> {
        self.click(&action.element_id()).map(|_| ())
    }

    fn press_key(&mut self, key: &str) -> CalcResult<()> {
        self.key_down(key)
            .map(|_| ())
            .ok_or_else(|| CalcError::unknown_key(key))
    }

    fn display(&self) -> String {
        self.display_text().to_string()
    }

    fn history_line(&self) -> String {
        self.history_text().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{run_full_specification, verify_chaining, verify_keyboard};
    use crate::wasm::{CalculatorWidget, MockDom};

    #[test]
    fn test_mounted_driver_chaining() {
        let mut dom = MockDom::new();
        let mut widget = CalculatorWidget::new();
        let mut mounted = widget.mount(&mut dom);
        verify_chaining(&mut mounted).unwrap();
    }

    #[test]
    fn test_mounted_driver_keyboard() {
        let mut dom = MockDom::new();
        let mut widget = CalculatorWidget::new();
        let mut mounted = widget.mount(&mut dom);
        verify_keyboard(&mut mounted).unwrap();
    }

    #[test]
    fn test_mounted_driver_full_specification() {
        let mut dom = MockDom::new();
        let mut widget = CalculatorWidget::new();
        let mut mounted = widget.mount(&mut dom);
        run_full_specification(&mut mounted).unwrap();
    }

    #[test]
    fn test_mounted_driver_press_records_clicks() {
        let mut dom = MockDom::new();
        let mut widget = CalculatorWidget::new();
        let mut mounted = widget.mount(&mut dom);
        mounted.press(KeypadAction::Digit(6)).unwrap();
        mounted.press(KeypadAction::ToggleSign).unwrap();
        assert_eq!(CalculatorDriver::display(&mounted), "-6");
        assert_eq!(mounted.dom().event_history().len(), 2);
    }
}
