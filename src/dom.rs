// src/dom.rs
//! The element capabilities the signup controller needs, plus in-memory
//! elements used off-browser.
use std::cell::{Cell, RefCell};

pub const SIGNUP_FORM_ID: &str = "signup-form";
pub const FIRST_NAME_ID: &str = "first-name";
pub const LAST_NAME_ID: &str = "last-name";
pub const EMAIL_ID: &str = "email";
pub const SUCCESS_POPUP_ID: &str = "success-popup";
pub const CLOSE_POPUP_ID: &str = "close-popup";

/// A text input whose current value can be read.
pub trait TextField {
    fn current_value(&self) -> String;
}

/// An element that can be shown and hidden.
pub trait Panel {
    fn show(&self);
    fn hide(&self);
    fn is_visible(&self) -> bool;
}

/// The form submit event. Only default suppression is needed.
pub trait SubmitEvent {
    fn prevent_default(&self);
}

impl<T: TextField + ?Sized> TextField for &T {
    fn current_value(&self) -> String {
        (**self).current_value()
    }
}

impl<P: Panel + ?Sized> Panel for &P {
    fn show(&self) {
        (**self).show()
    }

    fn hide(&self) {
        (**self).hide()
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }
}

#[derive(Debug, Default)]
pub struct MemoryField {
    value: RefCell<String>,
}

impl MemoryField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(value.into()),
        }
    }

    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.borrow_mut() = value.into();
    }
}

impl TextField for MemoryField {
    fn current_value(&self) -> String {
        self.value.borrow().clone()
    }
}

/// Starts hidden.
#[derive(Debug, Default)]
pub struct MemoryPanel {
    visible: Cell<bool>,
}

impl MemoryPanel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Panel for MemoryPanel {
    fn show(&self) {
        self.visible.set(true);
    }

    fn hide(&self) {
        self.visible.set(false);
    }

    fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

#[derive(Debug, Default)]
pub struct MemorySubmitEvent {
    default_prevented: Cell<bool>,
}

impl MemorySubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl SubmitEvent for MemorySubmitEvent {
    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_field_reads_latest_value() {
        let field = MemoryField::new("Ada");
        assert_eq!(field.current_value(), "Ada");

        field.set_value("");
        assert_eq!(field.current_value(), "");
    }

    #[test]
    fn test_memory_panel_starts_hidden() {
        let panel = MemoryPanel::new();
        assert!(!panel.is_visible());

        panel.show();
        assert!(panel.is_visible());

        panel.hide();
        panel.hide();
        assert!(!panel.is_visible());
    }

    #[test]
    fn test_panel_through_reference() {
        let panel = MemoryPanel::new();
        let borrowed = &panel;

        borrowed.show();
        assert!(panel.is_visible());
    }

    #[test]
    fn test_memory_event_records_prevent_default() {
        let event = MemorySubmitEvent::new();
        assert!(!event.default_prevented());

        event.prevent_default();
        assert!(event.default_prevented());
    }
}
