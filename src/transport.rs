// SPDX-License-Identifier: PMPL-1.0-or-later
// Outbound transport for registry submissions
//
// The submission client only knows the `Transport` trait; `HttpTransport`
// is the reqwest-backed implementation used in production.

use crate::error::TransportError;
use std::future::Future;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// A fully built POST request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl OutboundRequest {
    /// Value of the first header named `name` (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Sends one request and reports whether it went through
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: OutboundRequest,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;
}

/// HTTP transport client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: OutboundRequest) -> Result<(), TransportError> {
        let mut builder = self.client.post(request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.body(request.body).send().await?;
        let status = response.status();
        debug!(url = %request.url, status = status.as_u16(), "Registry responded");

        if status.is_success() {
            Ok(())
        } else {
            Err(TransportError::Status(status.as_u16()))
        }
    }
}
