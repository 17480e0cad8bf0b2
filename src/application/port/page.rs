// SPDX-License-Identifier: MPL-2.0
//! Page host ports.
//!
//! The page hosting the feedback components owns the controls the user
//! clicks, the blocking confirmation prompt and the places a CSRF token can
//! be read from. Hosts implement these traits; a terminal host lives in
//! [`crate::infrastructure::terminal`].

/// A clickable control that owns its own label and enabled flag.
///
/// Methods take `&self`; implementations use interior mutability so the
/// control can be shared with the task running its action.
pub trait TriggerControl: Send + Sync {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn is_enabled(&self) -> bool;
    fn set_enabled(&self, enabled: bool);

    /// Disables the control if it is enabled. Returns `false` when it was
    /// already disabled.
    ///
    /// Implementations sharing state across threads should override this
    /// so the check and the update happen under one lock.
    fn try_disable(&self) -> bool {
        if self.is_enabled() {
            self.set_enabled(false);
            true
        } else {
            false
        }
    }
}

/// Blocking yes/no confirmation shown before a state-changing request.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Where a CSRF token can be found on the page.
pub trait CsrfSource {
    /// Value of the hidden form field `name`, if present.
    fn hidden_field(&self, name: &str) -> Option<String>;
    /// Value of the cookie `name`, if present.
    fn cookie(&self, name: &str) -> Option<String>;
}
