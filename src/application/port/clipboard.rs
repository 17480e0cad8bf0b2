// SPDX-License-Identifier: MPL-2.0
//! Clipboard port definitions.
//!
//! Copying has two paths: a [`SystemClipboard`] that writes text directly
//! (asynchronous, may be missing or refuse the write) and a [`LegacyCopy`]
//! command that copies the contents of an off-screen holder file.

use std::path::Path;

use futures_util::future::BoxFuture;
use thiserror::Error;

/// Errors raised by either clipboard path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard is reachable (headless session, missing tool...).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard was reachable but refused the write.
    #[error("clipboard rejected the write: {0}")]
    Rejected(String),

    /// The off-screen holder could not be prepared.
    #[error("clipboard holder error: {0}")]
    Holder(String),
}

/// Direct access to the platform clipboard.
pub trait SystemClipboard: Send + Sync {
    fn write_text<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<(), ClipboardError>>;
}

/// Legacy copy command fed from a holder file.
pub trait LegacyCopy: Send + Sync {
    /// Copies the full contents of `holder` to the clipboard.
    fn copy_from_holder(&self, holder: &Path) -> Result<(), ClipboardError>;
}
