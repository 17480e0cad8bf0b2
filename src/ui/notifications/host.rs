// SPDX-License-Identifier: MPL-2.0
//! Process-wide toast container handle.
//!
//! A `ToastHost` is created once when the page starts and shared by every
//! component that reports to the user. The container itself is created the
//! first time a toast is shown and lives until [`ToastHost::teardown`].
//! Each toast gets its own timer task that runs the two-phase removal.

use super::manager::{Manager, ToastEvent, ToastTiming};
use super::notification::{Toast, ToastId, ToastKind};
use crate::config::{FLASH_STAGGER_MS, TOAST_EVENT_CHANNEL_CAPACITY};
use crate::diagnostics::DiagnosticsHandle;
use crate::domain::feedback::ToastCapacity;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::{Duration, Instant};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Shared handle to the toast container. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ToastHost {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    /// `None` until the first toast is shown.
    container: Mutex<Option<Manager>>,
    timers: Mutex<Vec<JoinHandle<()>>>,
    events: broadcast::Sender<ToastEvent>,
    capacity: ToastCapacity,
    timing: ToastTiming,
    diagnostics: DiagnosticsHandle,
    closed: AtomicBool,
}

impl ToastHost {
    #[must_use]
    pub fn new(capacity: ToastCapacity, timing: ToastTiming, diagnostics: DiagnosticsHandle) -> Self {
        let (events, _) = broadcast::channel(TOAST_EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                container: Mutex::new(None),
                timers: Mutex::new(Vec::new()),
                events,
                capacity,
                timing,
                diagnostics,
                closed: AtomicBool::new(false),
            }),
        }
    }

    /// Shows a toast and schedules its removal.
    ///
    /// Never fails. Returns `None` only once the host has been torn down.
    pub fn show_toast(&self, message: impl Into<String>, kind: ToastKind) -> Option<ToastId> {
        self.show(kind, message.into(), Duration::ZERO)
    }

    pub fn info(&self, message: impl Into<String>) -> Option<ToastId> {
        self.show_toast(message, ToastKind::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> Option<ToastId> {
        self.show_toast(message, ToastKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> Option<ToastId> {
        self.show_toast(message, ToastKind::Error)
    }

    /// Shows a batch of server-rendered flash alerts.
    ///
    /// Alert `i` stays visible `i * 500` ms longer than the one before it, so
    /// the batch dismisses one by one.
    pub fn flash<I, S>(&self, alerts: I) -> Vec<ToastId>
    where
        I: IntoIterator<Item = (S, ToastKind)>,
        S: Into<String>,
    {
        alerts
            .into_iter()
            .zip(0u32..)
            .filter_map(|((message, kind), index)| {
                let stagger = Duration::from_millis(FLASH_STAGGER_MS) * index;
                self.show(kind, message.into(), stagger)
            })
            .collect()
    }

    fn show(&self, kind: ToastKind, message: String, extra: Duration) -> Option<ToastId> {
        if self.inner.closed.load(Ordering::Acquire) {
            tracing::debug!(%message, "toast dropped after teardown");
            return None;
        }

        let (toast, evicted) = {
            let mut container = self.inner.container();
            let manager = container.get_or_insert_with(|| {
                tracing::trace!("toast container created");
                Manager::new(self.inner.capacity, self.inner.timing)
            });
            manager.push_delayed_at(kind, message, Instant::now(), extra)
        };

        if let Some(evicted) = evicted {
            self.inner.diagnostics.log_toast_evicted(evicted.message());
            self.inner.emit(ToastEvent::Evicted(evicted.id()));
        }

        let id = toast.id();
        tracing::debug!(?id, kind = kind.as_str(), message = toast.message(), "toast shown");
        self.inner.emit(ToastEvent::Shown(toast));
        self.schedule_removal(id, self.inner.timing.display + extra);
        Some(id)
    }

    fn schedule_removal(&self, id: ToastId, display: Duration) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            // Without a runtime, expiry is driven by `tick`.
            return;
        };

        let exit_at = tokio::time::Instant::now() + display;
        let remove_at = exit_at + self.inner.timing.exit_transition;
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);

        let handle = runtime.spawn(async move {
            tokio::time::sleep_until(exit_at).await;
            let Some(inner) = weak.upgrade() else { return };
            inner.begin_exit(id);
            drop(inner);

            tokio::time::sleep_until(remove_at).await;
            if let Some(inner) = weak.upgrade() {
                inner.remove(id);
            }
        });

        let mut timers = self.inner.timers.lock().unwrap_or_else(PoisonError::into_inner);
        timers.retain(|timer| !timer.is_finished());
        timers.push(handle);
    }

    /// Advances toasts without a timer runtime. See [`Manager::tick`].
    pub fn tick(&self, now: Instant) {
        let events = match self.inner.container().as_mut() {
            Some(manager) => manager.tick(now),
            None => return,
        };
        for event in events {
            self.inner.emit(event);
        }
    }

    /// Subscribes to toast lifecycle events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ToastEvent> {
        self.inner.events.subscribe()
    }

    /// Returns a copy of the live toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.inner
            .container()
            .as_ref()
            .map(|manager| manager.toasts().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns whether the container has been created.
    #[must_use]
    pub fn has_container(&self) -> bool {
        self.inner.container().is_some()
    }

    /// Drops the container and cancels all pending removals.
    ///
    /// Toasts shown afterwards are ignored.
    pub fn teardown(&self) {
        self.inner.closed.store(true, Ordering::Release);
        let timers = std::mem::take(
            &mut *self.inner.timers.lock().unwrap_or_else(PoisonError::into_inner),
        );
        for timer in timers {
            timer.abort();
        }
        self.inner.container().take();
        tracing::debug!("toast container torn down");
    }
}

impl Inner {
    fn container(&self) -> MutexGuard<'_, Option<Manager>> {
        self.container.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: ToastEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    fn begin_exit(&self, id: ToastId) {
        let started = self
            .container()
            .as_mut()
            .is_some_and(|manager| manager.begin_exit(id));
        if started {
            self.emit(ToastEvent::Exiting(id));
        }
    }

    fn remove(&self, id: ToastId) {
        let removed = self
            .container()
            .as_mut()
            .and_then(|manager| manager.remove(id))
            .is_some();
        if removed {
            self.emit(ToastEvent::Removed(id));
        }
    }
}
