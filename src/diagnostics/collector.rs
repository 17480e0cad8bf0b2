// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating operator-facing events.
//!
//! Components report through a cloneable [`DiagnosticsHandle`]; the
//! [`DiagnosticsCollector`] drains the channel into a circular buffer that
//! can be exported as JSON.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind};
use crate::config::DIAGNOSTICS_CHANNEL_CAPACITY;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared across tasks.
/// Every event is also emitted as a `tracing` record, so operators see it
/// even when nobody drains the collector.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Option<Sender<DiagnosticEvent>>,
}

impl DiagnosticsHandle {
    /// A handle that only logs through `tracing` and stores nothing.
    #[must_use]
    pub fn detached() -> Self {
        Self { event_tx: None }
    }

    /// Records a transport failure behind a user-initiated action.
    pub fn log_transport_failure(&self, action: impl Into<String>, detail: impl Into<String>) {
        let (action, detail) = (action.into(), detail.into());
        tracing::error!(%action, %detail, "action request failed");
        self.send(DiagnosticEventKind::TransportFailure { action, detail });
    }

    /// Records a failed unread-count poll.
    pub fn log_poll_failure(&self, detail: impl Into<String>) {
        let detail = detail.into();
        tracing::debug!(%detail, "unread-count poll failed");
        self.send(DiagnosticEventKind::PollFailure { detail });
    }

    /// Records that the clipboard helper fell back to the legacy path.
    pub fn log_clipboard_fallback(&self, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::info!(%reason, "clipboard fallback path taken");
        self.send(DiagnosticEventKind::ClipboardFallback { reason });
    }

    /// Records a toast dropped because the container was full.
    pub fn log_toast_evicted(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "toast evicted");
        self.send(DiagnosticEventKind::ToastEvicted { message });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        if let Some(tx) = &self.event_tx {
            // Non-blocking send - drop if channel is full
            let _ = tx.try_send(DiagnosticEvent::new(kind));
        }
    }
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::detached()
    }
}

/// Central collector for diagnostic events.
///
/// The collector receives events through a channel and stores them in a
/// circular buffer, evicting the oldest events when the buffer is full.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DIAGNOSTICS_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: Some(self.event_tx.clone()),
        }
    }

    /// Moves all pending events from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Exports all stored events as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<&DiagnosticEvent> = self.buffer.iter().collect();
        serde_json::to_string_pretty(&events)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_new_creates_empty_buffer() {
        let collector = DiagnosticsCollector::default();
        assert!(collector.is_empty());
        assert_eq!(collector.len(), 0);
    }

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_poll_failure("connection refused");

        // Event is in channel, not yet in buffer
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 1);
        let event = collector.iter().next().unwrap();
        assert_eq!(
            event.kind,
            DiagnosticEventKind::PollFailure {
                detail: "connection refused".to_string()
            }
        );
    }

    #[test]
    fn transport_failure_keeps_action_and_detail() {
        let mut collector = DiagnosticsCollector::default();
        collector
            .handle()
            .log_transport_failure("send-notification/12", "HTTP status 500");
        collector.process_pending();

        let event = collector.iter().next().unwrap();
        match &event.kind {
            DiagnosticEventKind::TransportFailure { action, detail } => {
                assert_eq!(action, "send-notification/12");
                assert_eq!(detail, "HTTP status 500");
            }
            other => panic!("expected TransportFailure, got {other:?}"),
        }
    }

    #[test]
    fn detached_handle_stores_nothing() {
        let handle = DiagnosticsHandle::detached();
        handle.log_clipboard_fallback("no display");
        handle.log_toast_evicted("old toast");
    }

    #[test]
    fn buffer_evicts_oldest_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(10));
        let handle = collector.handle();
        for i in 0..15 {
            handle.log_poll_failure(format!("failure {i}"));
        }
        collector.process_pending();

        assert_eq!(collector.len(), 10);
        let first = collector.iter().next().unwrap();
        assert_eq!(
            first.kind,
            DiagnosticEventKind::PollFailure {
                detail: "failure 5".to_string()
            }
        );
    }

    #[test]
    fn export_json_lists_events() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log_clipboard_fallback("clipboard unavailable");
        collector.process_pending();

        let json = collector.export_json().expect("export succeeds");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value[0]["type"], "clipboard_fallback");
        assert_eq!(value[0]["reason"], "clipboard unavailable");
    }
}
