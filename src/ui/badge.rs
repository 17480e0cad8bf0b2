// SPDX-License-Identifier: MPL-2.0
//! Unread-notification badge.
//!
//! The badge polls the unread-count endpoint and is visible whenever the
//! count is positive. Poll failures are kept away from the user: the badge
//! keeps its last state and the failure goes to the operator diagnostics.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::application::port::{RequestDescriptor, Transport, TransportError, UnreadCount};
use crate::diagnostics::DiagnosticsHandle;
use crate::domain::feedback::PollInterval;
use crate::i18n::fluent::I18n;

/// Last known badge state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BadgeState {
    pub count: u64,
}

impl BadgeState {
    #[must_use]
    pub fn visible(self) -> bool {
        self.count > 0
    }

    /// Accessible text for the badge.
    #[must_use]
    pub fn label(self, i18n: &I18n) -> String {
        if self.visible() {
            i18n.tr_with_args("badge-unread", &[("count", &self.count.to_string())])
        } else {
            i18n.tr("badge-none")
        }
    }
}

/// Badge driven by the unread-count endpoint.
pub struct PollingBadge {
    transport: Arc<dyn Transport>,
    state: watch::Sender<BadgeState>,
    diagnostics: DiagnosticsHandle,
}

impl std::fmt::Debug for PollingBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollingBadge")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl PollingBadge {
    /// Creates a hidden badge.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, diagnostics: DiagnosticsHandle) -> Self {
        let (state, _) = watch::channel(BadgeState::default());
        Self {
            transport,
            state,
            diagnostics,
        }
    }

    /// Receives every change of the badge state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<BadgeState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> BadgeState {
        *self.state.borrow()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state().visible()
    }

    /// Fetches the count once and updates the badge.
    ///
    /// On error the badge is left as it was and the failure is recorded.
    pub async fn poll_once(&self) -> Result<BadgeState, TransportError> {
        let request = RequestDescriptor::unread_count();
        let result = self
            .transport
            .execute(&request)
            .await
            .and_then(|raw| raw.json::<UnreadCount>());

        match result {
            Ok(UnreadCount { count }) => {
                let next = BadgeState { count };
                self.state.send_if_modified(|state| {
                    let changed = *state != next;
                    *state = next;
                    changed
                });
                Ok(next)
            }
            Err(err) => {
                self.diagnostics.log_poll_failure(err.to_string());
                Err(err)
            }
        }
    }

    /// Polls now and then every `interval` until the handle is dropped.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use = "polling stops when the handle is dropped"]
    pub fn start_polling(self: Arc<Self>, interval: PollInterval) -> PollingHandle {
        tracing::debug!(secs = interval.secs(), "badge polling started");
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval.as_duration());
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                // Errors are already recorded and must not stop the schedule.
                let _ = self.poll_once().await;
            }
        });
        PollingHandle { task }
    }
}

/// Keeps the polling task alive. Dropping it stops polling.
#[derive(Debug)]
pub struct PollingHandle {
    task: JoinHandle<()>,
}

impl Drop for PollingHandle {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("badge polling stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::RawResponse;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use futures_util::future::BoxFuture;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Replies with the scripted results in order, then repeats the last one.
    struct Script {
        replies: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
        calls: AtomicUsize,
    }

    impl Script {
        fn new(replies: Vec<Result<RawResponse, TransportError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl Transport for Script {
        fn execute<'a>(
            &'a self,
            _request: &'a RequestDescriptor,
        ) -> BoxFuture<'a, Result<RawResponse, TransportError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut replies = self.replies.lock().unwrap();
            let reply = if replies.len() > 1 {
                replies.pop_front().unwrap()
            } else {
                replies.front().cloned().unwrap()
            };
            Box::pin(async move { reply })
        }
    }

    fn count(n: u64) -> Result<RawResponse, TransportError> {
        Ok(RawResponse::ok(format!(r#"{{"count": {n}}}"#)))
    }

    #[tokio::test]
    async fn visibility_follows_count_and_survives_errors() {
        let mut collector = DiagnosticsCollector::default();
        let transport = Script::new(vec![
            count(0),
            count(3),
            Err(TransportError::Network("timeout".into())),
            count(0),
        ]);
        let badge = PollingBadge::new(transport, collector.handle());

        let mut seen = Vec::new();
        for _ in 0..4 {
            let _ = badge.poll_once().await;
            seen.push(badge.is_visible());
        }

        assert_eq!(seen, vec![false, true, true, false]);
        collector.process_pending();
        assert!(collector
            .iter()
            .any(|event| matches!(event.kind, DiagnosticEventKind::PollFailure { .. })));
    }

    #[tokio::test]
    async fn malformed_body_leaves_state_untouched() {
        let transport = Script::new(vec![count(2), Ok(RawResponse::ok("not json"))]);
        let badge = PollingBadge::new(transport, DiagnosticsHandle::detached());

        badge.poll_once().await.unwrap();
        assert!(matches!(badge.poll_once().await, Err(TransportError::Malformed(_))));
        assert_eq!(badge.state(), BadgeState { count: 2 });
    }

    #[tokio::test]
    async fn subscribers_only_wake_on_change() {
        let transport = Script::new(vec![count(0), count(4), count(4)]);
        let badge = PollingBadge::new(transport, DiagnosticsHandle::detached());
        let mut rx = badge.subscribe();

        badge.poll_once().await.unwrap();
        assert!(!rx.has_changed().unwrap());

        badge.poll_once().await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().count, 4);

        badge.poll_once().await.unwrap();
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn polls_immediately_then_on_interval_until_dropped() {
        let transport = Script::new(vec![count(1)]);
        let badge = Arc::new(PollingBadge::new(transport.clone(), DiagnosticsHandle::detached()));

        let handle = badge.clone().start_polling(PollInterval::from_secs(30));
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert!(badge.is_visible());

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);

        drop(handle);
        tokio::time::sleep(Duration::from_secs(90)).await;
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn failures_do_not_change_the_schedule() {
        let transport = Script::new(vec![Err(TransportError::Status(502))]);
        let badge = Arc::new(PollingBadge::new(transport.clone(), DiagnosticsHandle::detached()));

        let _handle = badge.clone().start_polling(PollInterval::from_secs(30));
        tokio::time::sleep(Duration::from_secs(61)).await;

        assert_eq!(transport.calls.load(Ordering::SeqCst), 3);
        assert!(!badge.is_visible());
    }

    #[test]
    fn label_reflects_count() {
        let i18n = I18n::new(Some("en-US".to_string()), &crate::config::Config::default());
        assert_eq!(BadgeState { count: 3 }.label(&i18n), "3 unread notifications");
        assert_eq!(BadgeState::default().label(&i18n), "No unread notifications");
    }
}
