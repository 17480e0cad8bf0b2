// SPDX-License-Identifier: MPL-2.0
//! Toast container state.
//!
//! The `Manager` is the shared container's child list: toasts are appended
//! in creation order, never reordered, and leave either through their
//! two-phase expiry or by eviction when the container is full.

use super::notification::{Toast, ToastId, ToastKind};
use crate::config::{TOAST_DISPLAY_MS, TOAST_EXIT_TRANSITION_MS};
use crate::domain::feedback::ToastCapacity;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Display and exit-transition durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    /// Time fully visible before the exit transition starts.
    pub display: Duration,
    /// Exit transition length; the toast is detached when it ends.
    pub exit_transition: Duration,
}

impl ToastTiming {
    /// Total lifetime of a toast from creation to detachment.
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.display + self.exit_transition
    }
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            display: Duration::from_millis(TOAST_DISPLAY_MS),
            exit_transition: Duration::from_millis(TOAST_EXIT_TRANSITION_MS),
        }
    }
}

/// Lifecycle changes observable by renderers.
#[derive(Debug, Clone)]
pub enum ToastEvent {
    /// A toast was appended to the container.
    Shown(Toast),
    /// A toast started its exit transition.
    Exiting(ToastId),
    /// A toast was detached after its exit transition.
    Removed(ToastId),
    /// A toast was dropped because the container was full.
    Evicted(ToastId),
}

/// Ordered list of live toasts with a capacity bound.
#[derive(Debug)]
pub struct Manager {
    /// Live toasts, oldest first.
    toasts: VecDeque<Toast>,
    capacity: ToastCapacity,
    timing: ToastTiming,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(ToastCapacity::default(), ToastTiming::default())
    }
}

impl Manager {
    #[must_use]
    pub fn new(capacity: ToastCapacity, timing: ToastTiming) -> Self {
        Self {
            toasts: VecDeque::with_capacity(capacity.value()),
            capacity,
            timing,
        }
    }

    /// Appends a toast created at `now`.
    ///
    /// Returns the new toast and, when the container was full, the oldest
    /// toast that was evicted to make room.
    pub fn push_at(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        now: Instant,
    ) -> (Toast, Option<Toast>) {
        self.push_delayed_at(kind, message, now, Duration::ZERO)
    }

    /// Like [`Manager::push_at`], with `extra` added to the display time.
    pub fn push_delayed_at(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        now: Instant,
        extra: Duration,
    ) -> (Toast, Option<Toast>) {
        let evicted = if self.toasts.len() >= self.capacity.value() {
            self.toasts.pop_front()
        } else {
            None
        };
        let toast = Toast::new(kind, message, now, self.timing.display + extra);
        self.toasts.push_back(toast.clone());
        (toast, evicted)
    }

    /// Starts the exit transition of a toast.
    ///
    /// Returns `false` if the toast is gone or already exiting.
    pub fn begin_exit(&mut self, id: ToastId) -> bool {
        self.toasts
            .iter_mut()
            .find(|toast| toast.id() == id)
            .is_some_and(Toast::begin_exit)
    }

    /// Detaches a toast. Returns it if it was still in the container.
    pub fn remove(&mut self, id: ToastId) -> Option<Toast> {
        let pos = self.toasts.iter().position(|toast| toast.id() == id)?;
        self.toasts.remove(pos)
    }

    /// Advances every toast to where it should be at `now`.
    ///
    /// Used when no timer runtime drives the lifecycle. Toasts whose exit
    /// deadline has passed start exiting; toasts whose exit transition has
    /// also elapsed are removed.
    pub fn tick(&mut self, now: Instant) -> Vec<ToastEvent> {
        let mut events = Vec::new();
        let transition = self.timing.exit_transition;

        for toast in &mut self.toasts {
            if now >= toast.exit_at() && toast.begin_exit() {
                events.push(ToastEvent::Exiting(toast.id()));
            }
        }

        self.toasts.retain(|toast| {
            let expired = toast.is_exiting() && now >= toast.exit_at() + transition;
            if expired {
                events.push(ToastEvent::Removed(toast.id()));
            }
            !expired
        });

        events
    }

    /// Returns the live toasts, oldest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> ToastCapacity {
        self.capacity
    }

    #[must_use]
    pub fn timing(&self) -> ToastTiming {
        self.timing
    }

    /// Removes every toast.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Phase;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::default();
        assert_eq!(manager.len(), 0);
        assert!(manager.is_empty());
    }

    #[test]
    fn push_appends_in_chronological_order() {
        let mut manager = Manager::default();
        let now = Instant::now();
        manager.push_at(ToastKind::Info, "first", now);
        manager.push_at(ToastKind::Success, "second", now + ms(10));
        manager.push_at(ToastKind::Error, "third", now + ms(20));

        let messages: Vec<_> = manager.toasts().map(Toast::message).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn push_beyond_capacity_evicts_oldest() {
        let mut manager = Manager::new(ToastCapacity::new(2), ToastTiming::default());
        let now = Instant::now();
        let (first, _) = manager.push_at(ToastKind::Info, "first", now);
        manager.push_at(ToastKind::Info, "second", now);

        let (_, evicted) = manager.push_at(ToastKind::Info, "third", now);

        assert_eq!(evicted.map(|toast| toast.id()), Some(first.id()));
        let messages: Vec<_> = manager.toasts().map(Toast::message).collect();
        assert_eq!(messages, vec!["second", "third"]);
    }

    #[test]
    fn tick_before_display_ends_changes_nothing() {
        let mut manager = Manager::default();
        let now = Instant::now();
        manager.push_at(ToastKind::Info, "hello", now);

        assert!(manager.tick(now + ms(3999)).is_empty());
        assert_eq!(manager.toasts().next().unwrap().phase(), Phase::Visible);
    }

    #[test]
    fn tick_runs_two_phase_removal() {
        let mut manager = Manager::default();
        let now = Instant::now();
        let (toast, _) = manager.push_at(ToastKind::Info, "hello", now);

        let events = manager.tick(now + ms(4000));
        assert!(matches!(events.as_slice(), [ToastEvent::Exiting(id)] if *id == toast.id()));
        assert_eq!(manager.len(), 1);

        assert!(manager.tick(now + ms(4299)).is_empty());
        assert_eq!(manager.len(), 1);

        let events = manager.tick(now + ms(4300));
        assert!(matches!(events.as_slice(), [ToastEvent::Removed(id)] if *id == toast.id()));
        assert!(manager.is_empty());
    }

    #[test]
    fn late_tick_removes_in_one_step() {
        let mut manager = Manager::default();
        let now = Instant::now();
        manager.push_at(ToastKind::Success, "done", now);

        let events = manager.tick(now + ms(10_000));
        assert_eq!(events.len(), 2);
        assert!(manager.is_empty());
    }

    #[test]
    fn delayed_push_extends_display_time() {
        let mut manager = Manager::default();
        let now = Instant::now();
        let (toast, _) = manager.push_delayed_at(ToastKind::Info, "flash", now, ms(1000));
        assert_eq!(toast.exit_at(), now + ms(5000));

        assert!(manager.tick(now + ms(4999)).is_empty());
        assert_eq!(manager.tick(now + ms(5000)).len(), 1);
    }

    #[test]
    fn begin_exit_and_remove_by_id() {
        let mut manager = Manager::default();
        let (toast, _) = manager.push_at(ToastKind::Error, "oops", Instant::now());

        assert!(manager.begin_exit(toast.id()));
        assert!(!manager.begin_exit(toast.id()));
        assert!(manager.get(toast.id()).unwrap().is_exiting());

        assert!(manager.remove(toast.id()).is_some());
        assert!(manager.remove(toast.id()).is_none());
        assert!(!manager.begin_exit(toast.id()));
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::default();
        for i in 0..4 {
            manager.push_at(ToastKind::Info, format!("toast-{i}"), Instant::now());
        }
        manager.clear();
        assert!(manager.is_empty());
    }
}
