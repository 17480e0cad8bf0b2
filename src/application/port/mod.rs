// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters and
//! page hosts implement. The feedback components depend only on these.
//!
//! # Available Ports
//!
//! - [`transport`]: Executes request descriptors against the platform server
//! - [`clipboard`]: System clipboard and legacy copy command
//! - [`page`]: Trigger controls, confirmation prompts and CSRF sources
//!
//! # Design Notes
//!
//! - Async methods return `BoxFuture` so the traits stay object-safe
//! - Traits are `Send + Sync` so implementations can be shared across tasks
//! - Methods return `Result` with per-port error types

pub mod clipboard;
pub mod page;
pub mod transport;

pub use clipboard::{ClipboardError, LegacyCopy, SystemClipboard};
pub use page::{ConfirmPrompt, CsrfSource, TriggerControl};
pub use transport::{
    ActionResponse, HttpMethod, RawResponse, RequestDescriptor, Transport, TransportError,
    UnreadCount,
};
