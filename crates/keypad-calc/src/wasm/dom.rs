//! In-memory DOM for driving the widget without a browser
//!
//! Holds an element registry, an event log, and a listener registry so
//! tests can observe exactly when the keyboard binding exists.

use std::collections::{BTreeMap, HashMap};

/// Represents a DOM element
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Visits this element and all descendants, depth first
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a DomElement)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// DOM events the widget reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Pointer click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key pressed while the document has focus
    KeyDown {
        /// `KeyboardEvent.key` value
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a keydown event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }

    /// Event type name as used by `addEventListener`
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Click { .. } => "click",
            Self::KeyDown { .. } => "keydown",
        }
    }
}

/// Handle to a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

/// Mock DOM for driving the widget without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
    listeners: BTreeMap<ListenerId, &'static str>,
    next_listener: u64,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element and all its descendants for ID lookup
    pub fn insert_tree(&mut self, root: &DomElement) {
        root.walk(&mut |element| {
            if !element.id.is_empty() {
                self.elements.insert(element.id.clone(), element.clone());
            }
        });
    }

    /// Removes an element and all its descendants from the registry
    pub fn remove_tree(&mut self, root: &DomElement) {
        root.walk(&mut |element| {
            self.elements.remove(&element.id);
        });
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Number of registered elements
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Registers a listener for an event kind
    pub fn add_event_listener(&mut self, kind: &'static str) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, kind);
        id
    }

    /// Removes a listener; returns false if it was not registered
    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Whether a listener is currently registered
    #[must_use]
    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(&id)
    }

    /// Number of listeners registered for an event kind
    #[must_use]
    pub fn listener_count(&self, kind: &str) -> usize {
        self.listeners.values().filter(|k| **k == kind).count()
    }

    /// Records an event in the log
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DomElement {
        DomElement::new("div")
            .with_id("root")
            .with_child(DomElement::new("p").with_id("a").with_text("first"))
            .with_child(
                DomElement::new("div")
                    .with_child(DomElement::new("span").with_id("b").with_text("nested")),
            )
    }

    // ===== DomElement tests =====

    #[test]
    fn test_dom_element_builder() {
        let elem = DomElement::new("button")
            .with_id("btn-1")
            .with_text("1")
            .with_class("keypad-btn")
            .with_attr("data-row", "3");
        assert_eq!(elem.tag, "button");
        assert_eq!(elem.id, "btn-1");
        assert_eq!(elem.text_content, "1");
        assert!(elem.has_class("keypad-btn"));
        assert!(!elem.has_class("other"));
        assert_eq!(elem.get_attr("data-row"), Some("3"));
        assert_eq!(elem.get_attr("missing"), None);
    }

    #[test]
    fn test_dom_element_default_is_div() {
        assert_eq!(DomElement::default().tag, "div");
    }

    #[test]
    fn test_dom_element_walk_depth_first() {
        let mut tags = Vec::new();
        sample_tree().walk(&mut |e| tags.push(e.tag.clone()));
        assert_eq!(tags, vec!["div", "p", "div", "span"]);
    }

    // ===== DomEvent tests =====

    #[test]
    fn test_dom_event_constructors() {
        assert_eq!(
            DomEvent::click("btn-5"),
            DomEvent::Click {
                element_id: "btn-5".into()
            }
        );
        assert_eq!(
            DomEvent::key_down("Enter"),
            DomEvent::KeyDown { key: "Enter".into() }
        );
    }

    #[test]
    fn test_dom_event_kind() {
        assert_eq!(DomEvent::click("x").kind(), "click");
        assert_eq!(DomEvent::key_down("x").kind(), "keydown");
    }

    // ===== MockDom tests =====

    #[test]
    fn test_insert_and_remove_tree() {
        let mut dom = MockDom::new();
        let tree = sample_tree();
        dom.insert_tree(&tree);
        assert_eq!(dom.element_count(), 3);
        assert_eq!(dom.get_element_text("b"), Some("nested"));

        dom.remove_tree(&tree);
        assert_eq!(dom.element_count(), 0);
        assert!(dom.get_element("root").is_none());
    }

    #[test]
    fn test_set_element_text() {
        let mut dom = MockDom::new();
        dom.insert_tree(&sample_tree());
        dom.set_element_text("a", "changed");
        assert_eq!(dom.get_element_text("a"), Some("changed"));
        dom.set_element_text("missing", "ignored");
        assert!(dom.get_element("missing").is_none());
    }

    #[test]
    fn test_listener_registry() {
        let mut dom = MockDom::new();
        let first = dom.add_event_listener("keydown");
        let second = dom.add_event_listener("keydown");
        assert_ne!(first, second);
        assert_eq!(dom.listener_count("keydown"), 2);
        assert_eq!(dom.listener_count("click"), 0);

        assert!(dom.remove_event_listener(first));
        assert!(!dom.remove_event_listener(first));
        assert!(!dom.has_listener(first));
        assert!(dom.has_listener(second));
        assert_eq!(dom.listener_count("keydown"), 1);
    }

    #[test]
    fn test_event_history() {
        let mut dom = MockDom::new();
        dom.dispatch_event(DomEvent::click("btn-1"));
        dom.dispatch_event(DomEvent::key_down("2"));
        assert_eq!(dom.event_history().len(), 2);
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
    }
}
