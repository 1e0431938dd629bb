//! Widget and DOM binding
//!
//! The widget renders into a [`MockDom`] everywhere, so mount, unmount and
//! event routing are testable without a browser. The `wasm` feature adds
//! [`BrowserCalculator`], which binds the same widget to the real document.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod widget;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, ListenerId, MockDom};
pub use widget::{
    CalculatorWidget, DisplayModel, MountedWidget, DISPLAY_ID, HISTORY_ID, KEYPAD_ID, ROOT_ID,
};
