// SPDX-License-Identifier: MPL-2.0
//! HTTP transport backed by `reqwest`.

use std::time::Duration;

use futures_util::future::BoxFuture;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};
use reqwest::{Client, Url};

use crate::application::port::{
    HttpMethod, RawResponse, RequestDescriptor, Transport, TransportError,
};
use crate::error::Error;

const USER_AGENT: &str = concat!("HireDesk/", env!("CARGO_PKG_VERSION"));

/// Sends request descriptors to the platform server.
///
/// Descriptor paths are resolved against the base URL, so a path starting
/// with `/` replaces any path the base URL carries.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Builds a transport for `base_url`.
    ///
    /// `cookie` is sent verbatim as the `Cookie` header of every request,
    /// which is how a session cookie reaches the server outside a browser.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        cookie: Option<&str>,
    ) -> crate::error::Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::InvalidArgument(format!("invalid base URL {base_url:?}: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(cookie) = cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| Error::InvalidArgument(format!("invalid cookie header: {e}")))?;
            headers.insert(COOKIE, value);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn send(&self, request: &RequestDescriptor) -> Result<RawResponse, TransportError> {
        let url = self
            .base_url
            .join(&request.path)
            .map_err(|e| TransportError::Network(format!("invalid request path: {e}")))?;

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        tracing::debug!(path = %request.path, status, "request completed");
        Ok(RawResponse { status, body })
    }
}

impl Transport for HttpTransport {
    fn execute<'a>(
        &'a self,
        request: &'a RequestDescriptor,
    ) -> BoxFuture<'a, Result<RawResponse, TransportError>> {
        Box::pin(self.send(request))
    }
}
