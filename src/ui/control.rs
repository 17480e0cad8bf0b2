// SPDX-License-Identifier: MPL-2.0
//! In-memory page elements.
//!
//! [`Button`] is a [`TriggerControl`] whose state lives behind a mutex, and
//! [`TableCell`] is a patchable text cell. Hosts without a real widget tree
//! (the terminal host, tests) use these directly.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::application::port::TriggerControl;

#[derive(Debug)]
struct ButtonState {
    label: String,
    enabled: bool,
}

/// A clickable button. Clones share the same state.
#[derive(Clone, Debug)]
pub struct Button {
    state: Arc<Mutex<ButtonState>>,
}

impl Button {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ButtonState {
                label: label.into(),
                enabled: true,
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, ButtonState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TriggerControl for Button {
    fn label(&self) -> String {
        self.state().label.clone()
    }

    fn set_label(&self, label: &str) {
        label.clone_into(&mut self.state().label);
    }

    fn is_enabled(&self) -> bool {
        self.state().enabled
    }

    fn set_enabled(&self, enabled: bool) {
        self.state().enabled = enabled;
    }

    fn try_disable(&self) -> bool {
        let mut state = self.state();
        std::mem::replace(&mut state.enabled, false)
    }
}

/// A text cell in a table row. Clones share the same text.
#[derive(Clone, Debug, Default)]
pub struct TableCell {
    text: Arc<Mutex<String>>,
}

impl TableCell {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Arc::new(Mutex::new(text.into())),
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.lock().unwrap_or_else(PoisonError::into_inner) = text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_starts_enabled_with_label() {
        let button = Button::new("Send");
        assert_eq!(button.label(), "Send");
        assert!(button.is_enabled());
    }

    #[test]
    fn try_disable_succeeds_once() {
        let button = Button::new("Send");
        assert!(button.try_disable());
        assert!(!button.try_disable());
        assert!(!button.is_enabled());

        button.set_enabled(true);
        assert!(button.try_disable());
    }

    #[test]
    fn clones_share_state() {
        let button = Button::new("Copy");
        let clone = button.clone();
        clone.set_label("Copied!");
        assert_eq!(button.label(), "Copied!");
    }

    #[test]
    fn table_cell_patches_text() {
        let cell = TableCell::new("—");
        cell.clone().set_text("✓ Sent");
        assert_eq!(cell.text(), "✓ Sent");
    }
}
