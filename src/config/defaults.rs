// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toasts**: Display lifecycle and container capacity
//! - **Polling**: Unread-count badge cadence
//! - **Clipboard**: Copied-state feedback on the trigger control
//! - **Network**: Server location, timeouts and CSRF names
//! - **Diagnostics**: Operator event buffer

use crate::domain::feedback::{buffer_capacity_bounds, poll_interval_bounds, toast_capacity_bounds};

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Time a toast stays fully visible before its exit transition starts.
pub const TOAST_DISPLAY_MS: u64 = 4000;

/// Length of the exit transition before the toast is detached.
pub const TOAST_EXIT_TRANSITION_MS: u64 = 300;

/// Extra delay added per flash alert so a batch dismisses one after another.
pub const FLASH_STAGGER_MS: u64 = 500;

/// Default number of toasts kept in the container.
pub const DEFAULT_TOAST_CAPACITY: usize = toast_capacity_bounds::DEFAULT;

/// Capacity of the toast lifecycle broadcast channel.
pub const TOAST_EVENT_CHANNEL_CAPACITY: usize = 64;

// ==========================================================================
// Polling Defaults
// ==========================================================================

/// Default unread-count polling interval (in seconds).
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = poll_interval_bounds::DEFAULT_SECS;

// ==========================================================================
// Clipboard Defaults
// ==========================================================================

/// How long a trigger control shows its "copied" label.
pub const COPIED_STATE_MS: u64 = 2500;

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Platform server used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default HTTP request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum HTTP request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum HTTP request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Hidden form field carrying the CSRF token.
pub const CSRF_FIELD_NAME: &str = "csrfmiddlewaretoken";

/// Cookie carrying the CSRF token.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Request header the server reads the CSRF token from.
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

/// Capacity of the channel between diagnostics handles and the collector.
pub const DIAGNOSTICS_CHANNEL_CAPACITY: usize = 256;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(TOAST_DISPLAY_MS > TOAST_EXIT_TRANSITION_MS);
    assert!(TOAST_EXIT_TRANSITION_MS > 0);
    assert!(FLASH_STAGGER_MS > 0);
    assert!(TOAST_EVENT_CHANNEL_CAPACITY > 0);

    assert!(COPIED_STATE_MS > 0);

    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MAX_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);

    assert!(DIAGNOSTICS_CHANNEL_CAPACITY > 0);
};
