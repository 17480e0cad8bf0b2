// SPDX-License-Identifier: MPL-2.0
//! CSRF token lookup.
//!
//! The token is read from the hidden form field first, then from the
//! cookie. When neither holds a value the empty string is sent and the
//! server rejects the request.

use std::collections::HashMap;

use crate::application::port::CsrfSource;
use crate::config::{CSRF_COOKIE_NAME, CSRF_FIELD_NAME};

/// Resolves the CSRF token: hidden field, then cookie, then `""`.
///
/// Empty values count as absent.
pub fn resolve_csrf_token<S: CsrfSource + ?Sized>(source: &S) -> String {
    source
        .hidden_field(CSRF_FIELD_NAME)
        .filter(|value| !value.is_empty())
        .or_else(|| {
            source
                .cookie(CSRF_COOKIE_NAME)
                .filter(|value| !value.is_empty())
        })
        .unwrap_or_default()
}

/// Hidden fields and cookies of the current page.
#[derive(Debug, Clone, Default)]
pub struct PageCsrf {
    hidden_fields: HashMap<String, String>,
    cookies: HashMap<String, String>,
}

impl PageCsrf {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hidden_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.hidden_fields.insert(name.into(), value.into());
        self
    }

    /// Adds every cookie of a `Cookie` header value (`a=1; b=2`).
    ///
    /// Pairs without `=` are skipped; the first occurrence of a name wins.
    #[must_use]
    pub fn with_cookie_header(mut self, header: &str) -> Self {
        for pair in header.split(';') {
            if let Some((name, value)) = pair.split_once('=') {
                self.cookies
                    .entry(name.trim().to_string())
                    .or_insert_with(|| value.trim().to_string());
            }
        }
        self
    }
}

impl CsrfSource for PageCsrf {
    fn hidden_field(&self, name: &str) -> Option<String> {
        self.hidden_fields.get(name).cloned()
    }

    fn cookie(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }
}
