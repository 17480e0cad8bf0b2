// SPDX-License-Identifier: MPL-2.0
//! Confirmed, busy-guarded async actions.
//!
//! An action is triggered from a control (usually a button in a table row),
//! asks for confirmation, issues exactly one request and reports the result
//! by toast. While the request is in flight the control is disabled and
//! shows a busy label; [`BusyGuard`] puts the original label back and
//! re-enables the control on every exit path.

use std::sync::Arc;

use crate::application::port::{
    ActionResponse, ConfirmPrompt, RequestDescriptor, TriggerControl, Transport, TransportError,
};
use crate::domain::feedback::ApplicationId;
use crate::i18n::fluent::I18n;
use crate::ui::feedback::Feedback;

/// What to run when a control is triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpec {
    /// Identifier of the record the action applies to.
    pub action_id: String,
    /// Question shown in the confirmation prompt.
    pub confirm_prompt: String,
    /// `None` when `action_id` is blank.
    pub request: Option<RequestDescriptor>,
    /// Toast text when the server reports success without a message.
    pub success_fallback: String,
    /// Toast text when the server reports failure without a reason.
    pub failure_fallback: String,
}

impl ActionSpec {
    /// Builds an action around a caller-supplied request.
    ///
    /// The request is discarded when `action_id` is blank, so the action
    /// aborts before anything is sent.
    #[must_use]
    pub fn new(
        i18n: &I18n,
        action_id: impl Into<String>,
        confirm_prompt: impl Into<String>,
        request: RequestDescriptor,
    ) -> Self {
        let action_id = action_id.into().trim().to_string();
        let request = (!action_id.is_empty()).then_some(request);
        Self {
            action_id,
            confirm_prompt: confirm_prompt.into(),
            request,
            success_fallback: i18n.tr("toast-action-succeeded"),
            failure_fallback: i18n.tr("toast-generic-error"),
        }
    }

    /// The send-notification action for one application.
    #[must_use]
    pub fn send_notification(i18n: &I18n, raw_id: &str, csrf_token: &str) -> Self {
        let request = ApplicationId::parse(raw_id)
            .map(|id| RequestDescriptor::send_notification(&id, csrf_token));
        Self {
            action_id: raw_id.trim().to_string(),
            confirm_prompt: i18n.tr("action-confirm-send"),
            request,
            success_fallback: i18n.tr("toast-notification-sent"),
            failure_fallback: i18n.tr("toast-notification-failed"),
        }
    }
}

/// How one trigger ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// No identifier; an error toast was shown.
    MissingId,
    /// The user declined the prompt. Nothing was shown or sent.
    Cancelled,
    /// The control was already disabled; nothing happened.
    Busy,
    /// The server reported success.
    Succeeded(ActionResponse),
    /// The server reported failure.
    Rejected(ActionResponse),
    /// No structured result could be read.
    TransportFailed(TransportError),
}

/// Runs actions with toast feedback. Cheap to clone.
#[derive(Clone)]
pub struct ActionTrigger {
    feedback: Feedback,
    transport: Arc<dyn Transport>,
    confirm: Arc<dyn ConfirmPrompt>,
}

impl std::fmt::Debug for ActionTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionTrigger")
            .field("feedback", &self.feedback)
            .finish_non_exhaustive()
    }
}

impl ActionTrigger {
    #[must_use]
    pub fn new(
        feedback: Feedback,
        transport: Arc<dyn Transport>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            feedback,
            transport,
            confirm,
        }
    }

    /// Triggers `spec` from `control`.
    ///
    /// `on_success` runs with the server payload before the success toast
    /// is shown; it is the place to patch the row that owns the control.
    pub async fn perform<C, F>(&self, control: &C, spec: ActionSpec, on_success: F) -> ActionOutcome
    where
        C: TriggerControl + ?Sized,
        F: FnOnce(&ActionResponse) + Send,
    {
        if !control.is_enabled() {
            tracing::debug!(action_id = %spec.action_id, "trigger ignored, control busy");
            return ActionOutcome::Busy;
        }

        let Some(request) = spec.request.as_ref() else {
            self.feedback
                .toasts
                .error(self.feedback.tr("toast-missing-application"));
            return ActionOutcome::MissingId;
        };

        if !self.confirm.confirm(&spec.confirm_prompt) {
            tracing::debug!(action_id = %spec.action_id, "action cancelled");
            return ActionOutcome::Cancelled;
        }

        let Some(_guard) = BusyGuard::engage(control, &self.feedback.tr("action-busy-label")) else {
            return ActionOutcome::Busy;
        };

        let result = self
            .transport
            .execute(request)
            .await
            .and_then(|raw| raw.json::<ActionResponse>());

        match result {
            Ok(response) if response.success => {
                on_success(&response);
                let message = response
                    .message
                    .clone()
                    .unwrap_or_else(|| spec.success_fallback.clone());
                self.feedback.toasts.success(message);
                ActionOutcome::Succeeded(response)
            }
            Ok(response) => {
                let message = response
                    .error
                    .clone()
                    .or_else(|| response.message.clone())
                    .unwrap_or_else(|| spec.failure_fallback.clone());
                self.feedback.toasts.error(message);
                ActionOutcome::Rejected(response)
            }
            Err(err) => {
                self.feedback
                    .diagnostics
                    .log_transport_failure(request.path.clone(), err.to_string());
                self.feedback.toasts.error(self.feedback.tr("toast-generic-error"));
                ActionOutcome::TransportFailed(err)
            }
        }
    }
}

/// Holds a control in its busy state.
///
/// Dropping the guard restores the saved label and re-enables the control.
pub struct BusyGuard<'a, C: TriggerControl + ?Sized> {
    control: &'a C,
    saved_label: String,
}

impl<'a, C: TriggerControl + ?Sized> BusyGuard<'a, C> {
    /// Disables `control` and shows `busy_label`.
    ///
    /// Returns `None` if the control was already disabled.
    pub fn engage(control: &'a C, busy_label: &str) -> Option<Self> {
        if !control.try_disable() {
            return None;
        }
        let saved_label = control.label();
        control.set_label(busy_label);
        Some(Self {
            control,
            saved_label,
        })
    }
}

impl<C: TriggerControl + ?Sized> Drop for BusyGuard<'_, C> {
    fn drop(&mut self) {
        self.control.set_label(&self.saved_label);
        self.control.set_enabled(true);
    }
}

/// Confirmation marker written into the row once a notification went out.
#[must_use]
pub fn notified_marker(i18n: &I18n, notified_at: Option<&str>) -> String {
    match notified_at.map(str::trim).filter(|when| !when.is_empty()) {
        Some(when) => i18n.tr_with_args("action-notified-marker", &[("when", when)]),
        None => i18n.tr("action-notified-marker-now"),
    }
}
