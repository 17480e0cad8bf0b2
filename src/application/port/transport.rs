// SPDX-License-Identifier: MPL-2.0
//! Transport port definition.
//!
//! Callers describe a request with a [`RequestDescriptor`] (method, path,
//! headers); a [`Transport`] executes it and hands back the raw body. Typed
//! decoding happens at the call site through [`RawResponse::json`].

use futures_util::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config::CSRF_HEADER_NAME;
use crate::domain::feedback::ApplicationId;

// =============================================================================
// TransportError
// =============================================================================

/// Errors that prevent a structured result from being read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, timeout...).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status and no readable body.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

// =============================================================================
// RequestDescriptor
// =============================================================================

/// HTTP method of a request descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Caller-supplied description of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    /// Path relative to the server base URL, starting with `/`.
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            headers: Vec::new(),
        }
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            headers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Returns the first header value with the given name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// `POST /applications/{id}/send-notification/` carrying the CSRF token.
    #[must_use]
    pub fn send_notification(id: &ApplicationId, csrf_token: &str) -> Self {
        Self::post(format!("/applications/{id}/send-notification/"))
            .with_header(CSRF_HEADER_NAME, csrf_token)
    }

    /// `GET /applications/notifications/unread-count/`.
    #[must_use]
    pub fn unread_count() -> Self {
        Self::get("/applications/notifications/unread-count/")
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// Decodes the body as JSON.
    ///
    /// A body that does not decode is reported as [`TransportError::Status`]
    /// when the status was not a success, and as
    /// [`TransportError::Malformed`] otherwise. A decodable body wins over
    /// the status, since the server reports `success: false` payloads with
    /// 4xx codes.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_str(&self.body).map_err(|err| {
            if (200..300).contains(&self.status) {
                TransportError::Malformed(err.to_string())
            } else {
                TransportError::Status(self.status)
            }
        })
    }
}

/// Structured result of an async action such as send-notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub notified_at: Option<String>,
}

/// Body of the unread-count endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UnreadCount {
    pub count: u64,
}

// =============================================================================
// Transport
// =============================================================================

/// Executes request descriptors against the platform server.
pub trait Transport: Send + Sync {
    /// Issues exactly one request. Any HTTP status is returned as a
    /// [`RawResponse`]; only failures to obtain a response are errors.
    fn execute<'a>(
        &'a self,
        request: &'a RequestDescriptor,
    ) -> BoxFuture<'a, Result<RawResponse, TransportError>>;
}
