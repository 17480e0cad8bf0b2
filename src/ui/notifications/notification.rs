// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` struct, its `ToastKind` and the two
//! phases a toast goes through before it is detached.

use std::time::{Duration, Instant};

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of toast; selects the icon and accent class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ToastKind {
    /// Neutral information.
    #[default]
    Info,
    /// Operation completed successfully.
    Success,
    /// Operation failed.
    Error,
}

impl ToastKind {
    /// Parses a kind name. Anything unrecognized is treated as `Info`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            _ => ToastKind::Info,
        }
    }

    /// Lower-case name, as used in CSS classes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    /// Icon class shown in front of the message.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "fa-info-circle",
            ToastKind::Success => "fa-check-circle",
            ToastKind::Error => "fa-exclamation-circle",
        }
    }
}

impl From<&str> for ToastKind {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

/// Where a toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fully displayed.
    Visible,
    /// Exit transition running; detached once it completes.
    Exiting,
}

/// A toast living in the shared container.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    kind: ToastKind,
    message: String,
    created_at: Instant,
    /// When the exit transition starts.
    exit_at: Instant,
    phase: Phase,
}

impl Toast {
    /// Creates a visible toast that starts exiting after `display`.
    pub fn new(
        kind: ToastKind,
        message: impl Into<String>,
        created_at: Instant,
        display: Duration,
    ) -> Self {
        Self {
            id: ToastId::new(),
            kind,
            message: message.into(),
            created_at,
            exit_at: created_at + display,
            phase: Phase::Visible,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn exit_at(&self) -> Instant {
        self.exit_at
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.phase == Phase::Exiting
    }

    /// Moves the toast into its exit phase. Returns `false` if it already was.
    pub(crate) fn begin_exit(&mut self) -> bool {
        if self.phase == Phase::Exiting {
            return false;
        }
        self.phase = Phase::Exiting;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        let now = Instant::now();
        let t1 = Toast::new(ToastKind::Info, "a", now, Duration::from_secs(4));
        let t2 = Toast::new(ToastKind::Info, "a", now, Duration::from_secs(4));
        assert_ne!(t1.id(), t2.id());
    }

    #[test]
    fn recognized_kinds_map_to_their_icons() {
        assert_eq!(ToastKind::Info.icon(), "fa-info-circle");
        assert_eq!(ToastKind::Success.icon(), "fa-check-circle");
        assert_eq!(ToastKind::Error.icon(), "fa-exclamation-circle");
    }

    #[test]
    fn icons_are_distinct() {
        assert_ne!(ToastKind::Info.icon(), ToastKind::Success.icon());
        assert_ne!(ToastKind::Info.icon(), ToastKind::Error.icon());
        assert_ne!(ToastKind::Success.icon(), ToastKind::Error.icon());
    }

    #[test]
    fn unrecognized_kind_falls_back_to_info_icon() {
        for name in ["warning", "", "SUCCESSFUL", "danger"] {
            let kind = ToastKind::from_name(name);
            assert_eq!(kind, ToastKind::Info, "{name:?}");
            assert_eq!(kind.icon(), ToastKind::Info.icon());
        }
    }

    #[test]
    fn kind_names_parse_case_insensitively() {
        assert_eq!(ToastKind::from("Success"), ToastKind::Success);
        assert_eq!(ToastKind::from(" error "), ToastKind::Error);
        assert_eq!(ToastKind::from("info"), ToastKind::Info);
    }

    #[test]
    fn new_toast_is_visible_until_display_ends() {
        let now = Instant::now();
        let toast = Toast::new(ToastKind::Success, "saved", now, Duration::from_millis(4000));
        assert_eq!(toast.phase(), Phase::Visible);
        assert_eq!(toast.exit_at(), now + Duration::from_millis(4000));
        assert_eq!(toast.message(), "saved");
    }

    #[test]
    fn begin_exit_happens_once() {
        let mut toast = Toast::new(ToastKind::Info, "x", Instant::now(), Duration::ZERO);
        assert!(toast.begin_exit());
        assert!(!toast.begin_exit());
        assert!(toast.is_exiting());
    }
}
