//! Calculator widget: state machine plus keypad, rendered into a DOM
//!
//! [`CalculatorWidget::mount`] attaches the widget to a [`MockDom`] and
//! installs its keyboard listener. The returned [`MountedWidget`] guard owns
//! that binding; dropping it unmounts the widget and removes the listener.

use super::dom::{DomElement, DomEvent, ListenerId, MockDom};
use crate::core::{CalcError, CalcResult, Calculator};
use crate::keypad::{Keypad, KeypadAction};

/// Element id of the widget container
pub const ROOT_ID: &str = "calculator";
/// Element id of the primary display
pub const DISPLAY_ID: &str = "calc-display";
/// Element id of the secondary history line
pub const HISTORY_ID: &str = "calc-history";
/// Element id of the keypad grid
pub const KEYPAD_ID: &str = "calc-keypad";

/// The two strings a host renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    /// Primary display text
    pub primary: String,
    /// History line, empty when nothing is pending
    pub history: String,
}

/// Calculator widget
#[derive(Debug, Default)]
pub struct CalculatorWidget {
    calculator: Calculator,
    keypad: Keypad,
}

impl CalculatorWidget {
    /// Creates a widget in its initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying state machine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// The keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Current output strings
    #[must_use]
    pub fn display_model(&self) -> DisplayModel {
        DisplayModel {
            primary: self.calculator.display().to_string(),
            history: self.calculator.history_line(),
        }
    }

    /// Handles a click on a keypad button
    pub fn handle_click(&mut self, element_id: &str) -> CalcResult<KeypadAction> {
        let action = self
            .keypad
            .handle_click(element_id)
            .ok_or_else(|| CalcError::unknown_button(element_id))?;
        self.calculator.apply(action)?;
        Ok(action)
    }

    /// Handles a key press; unbound keys are ignored and return `None`
    pub fn handle_key(&mut self, key: &str) -> Option<KeypadAction> {
        let Some(action) = Keypad::key_to_action(key) else {
            tracing::trace!(key, "unbound key ignored");
            return None;
        };
        // Bound keys only ever produce digits 0-9.
        self.calculator.apply(action).ok()?;
        Some(action)
    }

    /// Builds the element tree for the widget
    #[must_use]
    pub fn build_tree(&self) -> DomElement {
        let model = self.display_model();

        let display = DomElement::new("div")
            .with_class("display")
            .with_child(
                DomElement::new("p")
                    .with_id(HISTORY_ID)
                    .with_class("history-line")
                    .with_text(&model.history),
            )
            .with_child(
                DomElement::new("p")
                    .with_id(DISPLAY_ID)
                    .with_class("primary-display")
                    .with_text(&model.primary),
            );

        let mut keypad = DomElement::new("div")
            .with_id(KEYPAD_ID)
            .with_class("keypad");
        for btn in self.keypad.buttons() {
            keypad = keypad.with_child(
                DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.action.label())
                    .with_class("keypad-btn")
                    .with_class(btn.action.variant().class())
                    .with_attr("data-row", &btn.row.to_string())
                    .with_attr("data-col", &btn.col.to_string())
                    .with_attr("data-span", &btn.span.to_string()),
            );
        }

        let footer = DomElement::new("div")
            .with_class("footer")
            .with_child(DomElement::new("p").with_text("Use keyboard or mouse to calculate"))
            .with_child(DomElement::new("p").with_text("Press ESC to clear, ENTER for equals"));

        DomElement::new("div")
            .with_id(ROOT_ID)
            .with_class("calculator")
            .with_child(display)
            .with_child(keypad)
            .with_child(footer)
    }

    /// Writes the output strings into the mounted display elements
    pub fn render(&self, dom: &mut MockDom) {
        let model = self.display_model();
        dom.set_element_text(DISPLAY_ID, &model.primary);
        dom.set_element_text(HISTORY_ID, &model.history);
    }

    /// Mounts the widget and installs its keyboard listener
    pub fn mount<'a>(&'a mut self, dom: &'a mut MockDom) -> MountedWidget<'a> {
        let tree = self.build_tree();
        dom.insert_tree(&tree);
        let keydown = dom.add_event_listener("keydown");
        tracing::debug!(?keydown, "widget mounted");

        MountedWidget {
            widget: self,
            dom,
            tree,
            keydown,
        }
    }
}

/// A widget attached to a DOM; unmounts on drop
#[derive(Debug)]
pub struct MountedWidget<'a> {
    widget: &'a mut CalculatorWidget,
    dom: &'a mut MockDom,
    tree: DomElement,
    keydown: ListenerId,
}

impl MountedWidget<'_> {
    /// The mounted widget
    #[must_use]
    pub fn widget(&self) -> &CalculatorWidget {
        self.widget
    }

    /// The host DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.dom
    }

    /// Keyboard listener installed at mount
    #[must_use]
    pub fn keydown_listener(&self) -> ListenerId {
        self.keydown
    }

    /// Dispatches a click on an element and re-renders
    pub fn click(&mut self, element_id: &str) -> CalcResult<KeypadAction> {
        self.dom.dispatch_event(DomEvent::click(element_id));
        let action = self.widget.handle_click(element_id)?;
        self.widget.render(self.dom);
        Ok(action)
    }

    /// Dispatches a keydown to the document and re-renders
    pub fn key_down(&mut self, key: &str) -> Option<KeypadAction> {
        self.dom.dispatch_event(DomEvent::key_down(key));
        if !self.dom.has_listener(self.keydown) {
            return None;
        }
        let action = self.widget.handle_key(key)?;
        self.widget.render(self.dom);
        Some(action)
    }

    /// Text currently shown in the display element
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.dom.get_element_text(DISPLAY_ID).unwrap_or_default()
    }

    /// Text currently shown in the history element
    #[must_use]
    pub fn history_text(&self) -> &str {
        self.dom.get_element_text(HISTORY_ID).unwrap_or_default()
    }
}

impl Drop for MountedWidget<'_> {
    fn drop(&mut self) {
        self.dom.remove_event_listener(self.keydown);
        self.dom.remove_tree(&self.tree);
        tracing::debug!(keydown = ?self.keydown, "widget unmounted");
    }
}
