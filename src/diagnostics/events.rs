// SPDX-License-Identifier: MPL-2.0
//! Operator-facing diagnostic event types.
//!
//! These events never reach the user-facing toast path. They record what
//! went wrong behind a generic toast (or behind no toast at all, for the
//! polling badge) so an operator can inspect it later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened, with the detail needed to investigate it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A user-initiated request failed before a structured result was read.
    TransportFailure {
        /// Which action issued the request (e.g. `send-notification/42`).
        action: String,
        /// Underlying error text.
        detail: String,
    },

    /// An unread-count poll failed; the badge kept its previous state.
    PollFailure {
        /// Underlying error text.
        detail: String,
    },

    /// The primary clipboard path was unavailable or rejected the write.
    ClipboardFallback {
        /// Why the fallback path was taken.
        reason: String,
    },

    /// The toast container was full and its oldest toast was dropped.
    ToastEvicted {
        /// Message of the dropped toast.
        message: String,
    },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticEvent {
    /// Wall-clock time the event was recorded.
    pub timestamp: DateTime<Utc>,
    /// Event payload.
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }

    /// Short machine-readable name of the event kind.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            DiagnosticEventKind::TransportFailure { .. } => "transport_failure",
            DiagnosticEventKind::PollFailure { .. } => "poll_failure",
            DiagnosticEventKind::ClipboardFallback { .. } => "clipboard_fallback",
            DiagnosticEventKind::ToastEvicted { .. } => "toast_evicted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_with_flattened_tag() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::PollFailure {
            detail: "connection refused".to_string(),
        });
        let json = serde_json::to_value(&event).expect("serializable event");

        assert_eq!(json["type"], "poll_failure");
        assert_eq!(json["detail"], "connection refused");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn kind_name_matches_serde_tag() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::TransportFailure {
            action: "send-notification/7".to_string(),
            detail: "timeout".to_string(),
        });
        let json = serde_json::to_value(&event).expect("serializable event");
        assert_eq!(json["type"], event.kind_name());
    }
}
