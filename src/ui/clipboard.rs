// SPDX-License-Identifier: MPL-2.0
//! Copy-to-clipboard with toast feedback.
//!
//! The system clipboard is tried first. When it is missing or refuses the
//! write, the text is placed in an off-screen holder file and a legacy copy
//! command reads it from there. The holder is removed whatever happens.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use crate::application::port::{ClipboardError, LegacyCopy, SystemClipboard, TriggerControl};
use crate::config::COPIED_STATE_MS;
use crate::ui::feedback::Feedback;

/// Result of a copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Nothing to copy; an error toast was shown.
    Empty,
    /// Copied through the system clipboard.
    Copied,
    /// Copied through the legacy holder path.
    CopiedViaFallback,
    /// Both paths failed.
    Failed(ClipboardError),
}

impl CopyOutcome {
    #[must_use]
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied | Self::CopiedViaFallback)
    }
}

/// Copies text for the user and reports the result by toast.
#[derive(Clone)]
pub struct ClipboardHelper {
    feedback: Feedback,
    primary: Option<Arc<dyn SystemClipboard>>,
    legacy: Arc<dyn LegacyCopy>,
}

impl std::fmt::Debug for ClipboardHelper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipboardHelper")
            .field("has_primary", &self.primary.is_some())
            .finish_non_exhaustive()
    }
}

impl ClipboardHelper {
    #[must_use]
    pub fn new(
        feedback: Feedback,
        primary: Option<Arc<dyn SystemClipboard>>,
        legacy: Arc<dyn LegacyCopy>,
    ) -> Self {
        Self {
            feedback,
            primary,
            legacy,
        }
    }

    /// Copies `text`, showing exactly one toast.
    pub async fn copy_to_clipboard(&self, text: &str) -> CopyOutcome {
        if text.is_empty() {
            self.feedback.toasts.error(self.feedback.tr("clipboard-empty"));
            return CopyOutcome::Empty;
        }

        let outcome = match self.copy(text).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(error = %err, "copy to clipboard failed");
                CopyOutcome::Failed(err)
            }
        };

        if outcome.is_copied() {
            self.feedback.toasts.success(self.feedback.tr("clipboard-copied"));
        } else {
            self.feedback.toasts.error(self.feedback.tr("clipboard-failed"));
        }
        outcome
    }

    /// Like [`Self::copy_to_clipboard`]; on success `control` reads
    /// "Copied!" for a short while, then gets its label back.
    pub async fn copy_with_feedback<C>(&self, text: &str, control: Arc<C>) -> CopyOutcome
    where
        C: TriggerControl + 'static,
    {
        let outcome = self.copy_to_clipboard(text).await;
        if outcome.is_copied() {
            self.show_copied_state(control);
        }
        outcome
    }

    fn show_copied_state<C>(&self, control: Arc<C>)
    where
        C: TriggerControl + 'static,
    {
        let copied_label = self.feedback.tr("clipboard-copied-label");
        let original = control.label();
        if original == copied_label {
            // Already showing the copied state; its own timer restores it.
            return;
        }
        control.set_label(&copied_label);

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            control.set_label(&original);
            return;
        };
        runtime.spawn(async move {
            tokio::time::sleep(Duration::from_millis(COPIED_STATE_MS)).await;
            control.set_label(&original);
        });
    }

    async fn copy(&self, text: &str) -> Result<CopyOutcome, ClipboardError> {
        let reason = match &self.primary {
            Some(primary) => match primary.write_text(text).await {
                Ok(()) => return Ok(CopyOutcome::Copied),
                Err(err) => err.to_string(),
            },
            None => "no system clipboard".to_string(),
        };
        self.feedback.diagnostics.log_clipboard_fallback(reason);

        let legacy = Arc::clone(&self.legacy);
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || copy_via_holder(legacy.as_ref(), &text))
            .await
            .map_err(|err| ClipboardError::Holder(err.to_string()))??;
        Ok(CopyOutcome::CopiedViaFallback)
    }
}

/// Writes `text` to a temporary holder, runs the legacy copy from it and
/// removes the holder.
pub fn copy_via_holder(legacy: &dyn LegacyCopy, text: &str) -> Result<(), ClipboardError> {
    let holder_error = |err: std::io::Error| ClipboardError::Holder(err.to_string());

    let mut holder = tempfile::Builder::new()
        .prefix("hiredesk-clip-")
        .tempfile()
        .map_err(holder_error)?;
    holder.write_all(text.as_bytes()).map_err(holder_error)?;
    holder.flush().map_err(holder_error)?;

    let copied = legacy.copy_from_holder(holder.path());
    // The holder is also removed on drop; closing surfaces removal errors.
    if let Err(err) = holder.close() {
        tracing::warn!(error = %err, "failed to remove clipboard holder");
    }
    copied
}
