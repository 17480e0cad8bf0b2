// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! Toasts render to a small view model (what a page needs to build the
//! element) and to a single line for terminal hosts.

use super::notification::{Toast, ToastKind};

/// Everything needed to draw one toast element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView<'a> {
    /// Element classes, e.g. `toast toast-success` (plus `hide` while exiting).
    pub class: String,
    /// Icon class selected by the toast kind.
    pub icon: &'static str,
    pub message: &'a str,
    pub exiting: bool,
}

/// Builds the view model of a toast.
#[must_use]
pub fn view(toast: &Toast) -> ToastView<'_> {
    let kind = toast.kind();
    let mut class = format!("toast toast-{}", kind.as_str());
    if toast.is_exiting() {
        class.push_str(" hide");
    }
    ToastView {
        class,
        icon: kind.icon(),
        message: toast.message(),
        exiting: toast.is_exiting(),
    }
}

/// Renders a toast as one terminal line, e.g. `[✔] Link copied`.
#[must_use]
pub fn render_line(toast: &Toast) -> String {
    format!("[{}] {}", glyph(toast.kind()), toast.message())
}

fn glyph(kind: ToastKind) -> char {
    match kind {
        ToastKind::Info => 'i',
        ToastKind::Success => '✔',
        ToastKind::Error => '✖',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn toast(kind: ToastKind, message: &str) -> Toast {
        Toast::new(kind, message, Instant::now(), Duration::from_secs(4))
    }

    #[test]
    fn view_uses_kind_class_and_icon() {
        let toast = toast(ToastKind::Success, "Saved");
        let view = view(&toast);
        assert_eq!(view.class, "toast toast-success");
        assert_eq!(view.icon, "fa-check-circle");
        assert_eq!(view.message, "Saved");
        assert!(!view.exiting);
    }

    #[test]
    fn exiting_toast_gets_hide_class() {
        let mut toast = toast(ToastKind::Error, "Failed");
        toast.begin_exit();
        let view = view(&toast);
        assert_eq!(view.class, "toast toast-error hide");
        assert!(view.exiting);
    }

    #[test]
    fn unrecognized_kind_renders_info_icon() {
        let toast = toast(ToastKind::from_name("warning"), "Heads up");
        assert_eq!(view(&toast).icon, "fa-info-circle");
    }

    #[test]
    fn render_line_prefixes_glyph() {
        assert_eq!(render_line(&toast(ToastKind::Error, "Nope")), "[✖] Nope");
        assert_eq!(render_line(&toast(ToastKind::Info, "FYI")), "[i] FYI");
    }
}
