//! Browser bindings for the calculator widget
//!
//! [`BrowserCalculator::mount`] builds the widget into a container element,
//! wires a click listener per button and one `keydown` listener on the
//! window. Unmounting (explicitly or on drop) removes all of them.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, Event, KeyboardEvent, Window};

use super::dom::DomElement;
use super::widget::{CalculatorWidget, DISPLAY_ID, HISTORY_ID};
use crate::keypad::Keypad;

type ClickListener = Closure<dyn FnMut(Event)>;
type KeyListener = Closure<dyn FnMut(KeyboardEvent)>;

/// Calculator widget mounted into a live document
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    widget: Rc<RefCell<CalculatorWidget>>,
    window: Window,
    root: Option<Element>,
    keydown: Option<KeyListener>,
    clicks: Vec<(Element, ClickListener)>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Mounts a fresh calculator into the element with id `container_id`
    pub fn mount(container_id: &str) -> Result<BrowserCalculator, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{container_id}")))?;

        let widget = Rc::new(RefCell::new(CalculatorWidget::new()));
        let tree = widget.borrow().build_tree();
        let root = materialize(&document, &tree)?;
        container.append_child(&root)?;

        let ids: Vec<String> = widget
            .borrow()
            .keypad()
            .buttons()
            .iter()
            .map(|btn| btn.id.clone())
            .collect();

        let mut clicks = Vec::new();
        for id in ids {
            let Some(element) = document.get_element_by_id(&id) else {
                continue;
            };
            let state = Rc::clone(&widget);
            let doc = document.clone();
            let on_click = Closure::wrap(Box::new(move |_event: Event| {
                let Ok(mut widget) = state.try_borrow_mut() else {
                    return;
                };
                if widget.handle_click(&id).is_ok() {
                    paint(&doc, &widget);
                }
            }) as Box<dyn FnMut(Event)>);
            element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            clicks.push((element, on_click));
        }

        let state = Rc::clone(&widget);
        let doc = document.clone();
        let keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let key = event.key();
            if Keypad::suppresses_default(&key) {
                event.prevent_default();
            }
            let Ok(mut widget) = state.try_borrow_mut() else {
                return;
            };
            if widget.handle_key(&key).is_some() {
                paint(&doc, &widget);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;

        console::log_1(&format!("Calculator mounted into #{container_id}").into());

        Ok(Self {
            widget,
            window,
            root: Some(root),
            keydown: Some(keydown),
            clicks,
        })
    }

    /// Primary display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.widget
            .try_borrow()
            .map(|w| w.calculator().display().to_string())
            .unwrap_or_default()
    }

    /// History line text
    #[wasm_bindgen(getter, js_name = historyLine)]
    pub fn history_line(&self) -> String {
        self.widget
            .try_borrow()
            .map(|w| w.calculator().history_line())
            .unwrap_or_default()
    }

    /// Whether the widget is still attached to the document
    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.root.is_some()
    }

    /// Removes the widget and every listener it installed
    pub fn unmount(&mut self) {
        if let Some(keydown) = self.keydown.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
        }
        for (element, on_click) in self.clicks.drain(..) {
            let _ = element
                .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
        if let Some(root) = self.root.take() {
            root.remove();
            console::log_1(&"Calculator unmounted".into());
        }
    }
}

impl Drop for BrowserCalculator {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Creates live elements for a widget tree
fn materialize(document: &Document, node: &DomElement) -> Result<Element, JsValue> {
    let element = document.create_element(&node.tag)?;
    if !node.id.is_empty() {
        element.set_id(&node.id);
    }
    if !node.classes.is_empty() {
        element.set_class_name(&node.classes.join(" "));
    }
    for (name, value) in &node.attributes {
        element.set_attribute(name, value)?;
    }
    if !node.text_content.is_empty() {
        element.set_text_content(Some(&node.text_content));
    }
    for child in &node.children {
        element.append_child(&materialize(document, child)?)?;
    }
    Ok(element)
}

/// Writes both output strings into the live display elements
fn paint(document: &Document, widget: &CalculatorWidget) {
    let model = widget.display_model();
    if let Some(display) = document.get_element_by_id(DISPLAY_ID) {
        display.set_text_content(Some(&model.primary));
    }
    if let Some(history) = document.get_element_by_id(HISTORY_ID) {
        history.set_text_content(Some(&model.history));
    }
}

/// Installs the panic hook when the module loads
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Keypad calculator WASM initialized".into());
}
