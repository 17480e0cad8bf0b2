// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` wires together configuration, localization, the toast host,
//! operator diagnostics and the server transport, and hands out the
//! feedback components built on top of them. It is created once per page
//! (or CLI run) and torn down once; teardown stops polling, cancels pending
//! toast timers and returns the collected diagnostics.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::port::{ConfirmPrompt, LegacyCopy, SystemClipboard, Transport};
use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{ArboardClipboard, CommandCopy, HttpTransport};
use crate::ui::action::ActionTrigger;
use crate::ui::badge::{PollingBadge, PollingHandle};
use crate::ui::clipboard::ClipboardHelper;
use crate::ui::feedback::Feedback;
use crate::ui::notifications::{ToastHost, ToastTiming};

/// Startup options, usually from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override, e.g. `fr`.
    pub lang: Option<String>,
    /// Settings file to use instead of the per-user one.
    pub config_path: Option<PathBuf>,
    /// Server base URL override.
    pub base_url: Option<String>,
    /// `Cookie` header forwarded with every request.
    pub cookie: Option<String>,
}

/// Root state shared by the feedback components.
pub struct App {
    config: Config,
    feedback: Feedback,
    collector: DiagnosticsCollector,
    transport: Arc<dyn Transport>,
    badge: Arc<PollingBadge>,
    polling: Option<PollingHandle>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("feedback", &self.feedback)
            .field("polling", &self.polling.is_some())
            .finish_non_exhaustive()
    }
}

impl App {
    /// Loads the configuration and connects to the server over HTTP.
    pub fn new(flags: Flags) -> Result<Self> {
        let mut config = match &flags.config_path {
            Some(path) => config::load_from_path(path)?,
            None => config::load()?,
        };
        if let Some(base_url) = flags.base_url {
            config.base_url = Some(base_url);
        }

        let transport = HttpTransport::new(
            config.base_url(),
            config.request_timeout(),
            flags.cookie.as_deref(),
        )?;
        tracing::info!(base_url = %transport.base_url(), "connected transport");

        Ok(Self::with_transport(config, flags.lang, Arc::new(transport)))
    }

    /// Builds the app around an existing transport.
    #[must_use]
    pub fn with_transport(
        config: Config,
        lang: Option<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let collector = DiagnosticsCollector::new(config.diagnostics_capacity());
        let diagnostics = collector.handle();
        let i18n = Arc::new(I18n::new(lang, &config));
        let toasts = ToastHost::new(
            config.toast_capacity(),
            ToastTiming::default(),
            diagnostics.clone(),
        );
        let badge = Arc::new(PollingBadge::new(Arc::clone(&transport), diagnostics.clone()));

        Self {
            config,
            feedback: Feedback::new(toasts, i18n, diagnostics),
            collector,
            transport,
            badge,
            polling: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.feedback.i18n
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastHost {
        &self.feedback.toasts
    }

    #[must_use]
    pub fn action_trigger(&self, confirm: Arc<dyn ConfirmPrompt>) -> ActionTrigger {
        ActionTrigger::new(self.feedback.clone(), Arc::clone(&self.transport), confirm)
    }

    /// Clipboard helper over the platform clipboard and copy commands.
    #[must_use]
    pub fn clipboard(&self) -> ClipboardHelper {
        let primary = ArboardClipboard::detect()
            .map(|clipboard| Arc::new(clipboard) as Arc<dyn SystemClipboard>);
        self.clipboard_with(primary, Arc::new(CommandCopy::default()))
    }

    #[must_use]
    pub fn clipboard_with(
        &self,
        primary: Option<Arc<dyn SystemClipboard>>,
        legacy: Arc<dyn LegacyCopy>,
    ) -> ClipboardHelper {
        ClipboardHelper::new(self.feedback.clone(), primary, legacy)
    }

    #[must_use]
    pub fn badge(&self) -> &Arc<PollingBadge> {
        &self.badge
    }

    /// Starts badge polling at the configured interval. Does nothing if it
    /// is already running. Must be called from within a tokio runtime.
    pub fn start_polling(&mut self) {
        if self.polling.is_none() {
            let interval = self.config.poll_interval();
            self.polling = Some(Arc::clone(&self.badge).start_polling(interval));
        }
    }

    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.polling.is_some()
    }

    /// Moves pending operator events into the diagnostics buffer.
    pub fn diagnostics(&mut self) -> &DiagnosticsCollector {
        self.collector.process_pending();
        &self.collector
    }

    /// Stops polling, drops the toast container and returns the diagnostics.
    pub fn teardown(mut self) -> DiagnosticsCollector {
        self.polling.take();
        self.feedback.toasts.teardown();
        self.collector.process_pending();
        tracing::debug!(events = self.collector.len(), "app torn down");
        self.collector
    }
}
