// SPDX-License-Identifier: MPL-2.0
//! Feedback newtypes.
//!
//! Type-safe wrappers that keep configurable values inside their valid
//! ranges, so call sites never clamp by hand.

use std::fmt;
use std::time::Duration;

// =============================================================================
// Toast Capacity
// =============================================================================

/// Toast container capacity bounds (1 to 50 toasts).
pub mod toast_capacity_bounds {
    /// Minimum number of toasts kept in the container.
    pub const MIN: usize = 1;
    /// Maximum number of toasts kept in the container.
    pub const MAX: usize = 50;
    /// Default number of toasts kept in the container.
    pub const DEFAULT: usize = 5;
}

/// Maximum number of toasts living in the shared container at once.
///
/// Pushing past the capacity evicts the oldest toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastCapacity(usize);

impl ToastCapacity {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(toast_capacity_bounds::MIN, toast_capacity_bounds::MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for ToastCapacity {
    fn default() -> Self {
        Self(toast_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Poll Interval
// =============================================================================

/// Unread-count polling interval bounds, in seconds.
pub mod poll_interval_bounds {
    /// Shortest allowed interval.
    pub const MIN_SECS: u64 = 5;
    /// Longest allowed interval.
    pub const MAX_SECS: u64 = 3600;
    /// Default interval.
    pub const DEFAULT_SECS: u64 = 30;
}

/// Interval between two unread-count polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollInterval(u64);

impl PollInterval {
    /// Creates a new interval in seconds, clamping to the valid range.
    #[must_use]
    pub fn from_secs(secs: u64) -> Self {
        Self(secs.clamp(
            poll_interval_bounds::MIN_SECS,
            poll_interval_bounds::MAX_SECS,
        ))
    }

    /// Returns the interval in seconds.
    #[must_use]
    pub fn secs(self) -> u64 {
        self.0
    }

    /// Returns the interval as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for PollInterval {
    fn default() -> Self {
        Self(poll_interval_bounds::DEFAULT_SECS)
    }
}

// =============================================================================
// Buffer Capacity
// =============================================================================

/// Diagnostics buffer capacity bounds (10 to 10000 events).
pub mod buffer_capacity_bounds {
    /// Minimum buffer capacity.
    pub const MIN: usize = 10;
    /// Maximum buffer capacity.
    pub const MAX: usize = 10_000;
    /// Default buffer capacity.
    pub const DEFAULT: usize = 500;
}

/// Number of operator diagnostic events retained in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// ApplicationId
// =============================================================================

/// Identifier of a job application row, as it appears in request paths.
///
/// Always non-empty and made only of ASCII letters, digits, `-` and `_`, so
/// it is a single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Parses a raw identifier. Returns `None` when it is blank or holds
    /// anything that could leave its path segment.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let valid = !trimmed.is_empty()
            && trimmed
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        valid.then(|| Self(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
