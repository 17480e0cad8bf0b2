// SPDX-License-Identifier: MPL-2.0
//! Clipboard adapters.
//!
//! [`ArboardClipboard`] writes through the platform clipboard. [`CommandCopy`]
//! is the legacy path: it feeds the holder file to the first copy command
//! found on the system.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

use futures_util::future::BoxFuture;

use crate::application::port::{ClipboardError, LegacyCopy, SystemClipboard};

/// The platform clipboard through `arboard`.
#[derive(Debug, Clone, Copy)]
pub struct ArboardClipboard;

impl ArboardClipboard {
    /// Returns the clipboard if one can be opened in this session.
    #[must_use]
    pub fn detect() -> Option<Self> {
        match arboard::Clipboard::new() {
            Ok(_) => Some(Self),
            Err(err) => {
                tracing::debug!(error = %err, "system clipboard not available");
                None
            }
        }
    }
}

impl SystemClipboard for ArboardClipboard {
    fn write_text<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<(), ClipboardError>> {
        let text = text.to_owned();
        Box::pin(async move {
            tokio::task::spawn_blocking(move || {
                let mut clipboard = arboard::Clipboard::new()
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
                clipboard
                    .set_text(text)
                    .map_err(|e| ClipboardError::Rejected(e.to_string()))
            })
            .await
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?
        })
    }
}

/// Copy commands tried in order, with their arguments.
const COPY_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
    ("clip", &[]),
];

/// Legacy copy through a platform command reading the holder on stdin.
#[derive(Debug, Clone)]
pub struct CommandCopy {
    commands: Vec<(String, Vec<String>)>,
}

impl Default for CommandCopy {
    fn default() -> Self {
        Self::with_commands(COPY_COMMANDS.iter().map(|(program, args)| {
            (
                (*program).to_string(),
                args.iter().map(|arg| (*arg).to_string()).collect(),
            )
        }))
    }
}

impl CommandCopy {
    /// Uses `commands` instead of the platform list.
    pub fn with_commands<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        Self {
            commands: commands.into_iter().collect(),
        }
    }
}

impl LegacyCopy for CommandCopy {
    fn copy_from_holder(&self, holder: &Path) -> Result<(), ClipboardError> {
        let mut last_err = ClipboardError::Unavailable("no copy command found".to_string());
        for (program, args) in &self.commands {
            let input = File::open(holder).map_err(|e| ClipboardError::Holder(e.to_string()))?;
            let status = Command::new(program)
                .args(args)
                .stdin(Stdio::from(input))
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status();

            match status {
                Ok(status) if status.success() => {
                    tracing::debug!(%program, "copied through command");
                    return Ok(());
                }
                Ok(status) => {
                    tracing::debug!(%program, %status, "copy command failed, trying next");
                    last_err = ClipboardError::Rejected(format!("{program} exited with {status}"));
                }
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => {
                    tracing::debug!(%program, %err, "copy command did not start, trying next");
                    last_err = ClipboardError::Unavailable(format!("{program}: {err}"));
                }
            }
        }
        Err(last_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_commands_report_unavailable() {
        let holder = tempfile::NamedTempFile::new().unwrap();
        let copy = CommandCopy::with_commands([(
            "hiredesk-no-such-copy-tool".to_string(),
            Vec::new(),
        )]);

        let err = copy.copy_from_holder(holder.path()).unwrap_err();
        assert!(matches!(err, ClipboardError::Unavailable(_)));
    }

    #[test]
    fn missing_holder_is_a_holder_error() {
        let dir = tempfile::tempdir().unwrap();
        let copy = CommandCopy::with_commands([("cat".to_string(), Vec::new())]);

        let err = copy.copy_from_holder(&dir.path().join("gone")).unwrap_err();
        assert!(matches!(err, ClipboardError::Holder(_)));
    }

    #[cfg(unix)]
    #[test]
    fn first_available_command_reads_the_holder() {
        use std::io::Write;

        let mut holder = tempfile::NamedTempFile::new().unwrap();
        holder.write_all(b"link").unwrap();
        let copy = CommandCopy::with_commands([
            ("hiredesk-no-such-copy-tool".to_string(), Vec::new()),
            ("cat".to_string(), Vec::new()),
        ]);

        assert!(copy.copy_from_holder(holder.path()).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_is_a_rejection() {
        let holder = tempfile::NamedTempFile::new().unwrap();
        let copy = CommandCopy::with_commands([("false".to_string(), Vec::new())]);

        let err = copy.copy_from_holder(holder.path()).unwrap_err();
        assert!(matches!(err, ClipboardError::Rejected(_)));
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_falls_through_to_the_next() {
        let holder = tempfile::NamedTempFile::new().unwrap();
        let copy = CommandCopy::with_commands([
            ("false".to_string(), Vec::new()),
            ("cat".to_string(), Vec::new()),
        ]);

        assert!(copy.copy_from_holder(holder.path()).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn last_failure_is_reported_when_every_command_fails() {
        let holder = tempfile::NamedTempFile::new().unwrap();
        let copy = CommandCopy::with_commands([
            ("false".to_string(), Vec::new()),
            ("hiredesk-no-such-copy-tool".to_string(), Vec::new()),
        ]);

        let err = copy.copy_from_holder(holder.path()).unwrap_err();
        assert!(matches!(err, ClipboardError::Rejected(ref msg) if msg.starts_with("false")));
    }
}
