// SPDX-License-Identifier: MPL-2.0
//! Shared user-feedback services.

use std::sync::Arc;

use crate::diagnostics::DiagnosticsHandle;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::ToastHost;

/// What every feedback component needs: the toast container, localized
/// strings and the operator diagnostics channel.
#[derive(Clone, Debug)]
pub struct Feedback {
    pub toasts: ToastHost,
    pub i18n: Arc<I18n>,
    pub diagnostics: DiagnosticsHandle,
}

impl Feedback {
    #[must_use]
    pub fn new(toasts: ToastHost, i18n: Arc<I18n>, diagnostics: DiagnosticsHandle) -> Self {
        Self {
            toasts,
            i18n,
            diagnostics,
        }
    }

    /// Resolves a message key in the current locale.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.i18n.tr(key)
    }
}
