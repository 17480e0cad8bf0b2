// SPDX-License-Identifier: MPL-2.0
//! Operator-facing diagnostics.
//!
//! Failures that must not be shown raw to the user (transport errors behind a
//! generic toast, suppressed polling failures) are recorded here instead. The
//! channel is separate from the toast path.
//!
//! # Architecture
//!
//! - [`DiagnosticsHandle`]: cloneable sender used by the feedback components
//! - [`DiagnosticsCollector`]: drains the channel into a [`CircularBuffer`]
//! - [`DiagnosticEvent`]: timestamped event with a [`DiagnosticEventKind`]

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
