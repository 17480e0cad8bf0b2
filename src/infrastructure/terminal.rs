// SPDX-License-Identifier: MPL-2.0
//! Terminal host: prompts on stderr, toasts on stdout.

use std::io::{self, BufRead, Write};
use std::sync::{Mutex, PoisonError};

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

use crate::application::port::ConfirmPrompt;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::toast::render_line;
use crate::ui::notifications::ToastEvent;

/// Blocking yes/no prompt answered on a line of input.
pub struct TerminalConfirm {
    hint: String,
    input: Mutex<Box<dyn BufRead + Send>>,
}

impl std::fmt::Debug for TerminalConfirm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalConfirm")
            .field("hint", &self.hint)
            .finish_non_exhaustive()
    }
}

impl TerminalConfirm {
    /// Prompts on stderr and reads the answer from stdin.
    #[must_use]
    pub fn stdin(i18n: &I18n) -> Self {
        Self::with_input(i18n, Box::new(io::BufReader::new(io::stdin())))
    }

    #[must_use]
    pub fn with_input(i18n: &I18n, input: Box<dyn BufRead + Send>) -> Self {
        Self {
            hint: i18n.tr("cli-confirm-hint"),
            input: Mutex::new(input),
        }
    }
}

impl ConfirmPrompt for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let mut stderr = io::stderr().lock();
        // A prompt that cannot be shown still gets answered from input.
        let _ = write!(stderr, "{prompt} {} ", self.hint);
        let _ = stderr.flush();

        let mut line = String::new();
        let mut input = self.input.lock().unwrap_or_else(PoisonError::into_inner);
        match input.read_line(&mut line) {
            Ok(_) => is_affirmative(&line),
            Err(err) => {
                tracing::warn!(error = %err, "could not read confirmation");
                false
            }
        }
    }
}

/// Accepts English and French yes. Anything else, including an empty line,
/// declines.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "o" | "oui"
    )
}

/// Prints each toast on stdout as it is shown, until the host goes away.
pub fn print_toast_events(mut events: broadcast::Receiver<ToastEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(ToastEvent::Shown(toast)) => println!("{}", render_line(&toast)),
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "toast printer lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn affirmative_answers() {
        for answer in ["y", "Y\n", " yes ", "o", "OUI"] {
            assert!(is_affirmative(answer), "{answer:?}");
        }
        for answer in ["", "\n", "n", "no", "yep", "non"] {
            assert!(!is_affirmative(answer), "{answer:?}");
        }
    }

    #[test]
    fn confirm_reads_one_line_per_prompt() {
        let input = io::Cursor::new(b"yes\nno\n".to_vec());
        let confirm = TerminalConfirm::with_input(&i18n(), Box::new(input));

        assert!(confirm.confirm("Send?"));
        assert!(!confirm.confirm("Send?"));
        assert!(!confirm.confirm("Send?"), "end of input declines");
    }
}
