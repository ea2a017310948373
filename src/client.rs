// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rate-limited submission client.
//!
//! Every call to [`SubmissionClient::submit`] first reserves a slot in the
//! shared [`RateLimiter`]. Only an admitted call builds and sends a request,
//! and it sends exactly one. The slot stays charged even when the request
//! later fails.

use crate::clock::{Clock, SystemClock};
use crate::config::RegistryConfig;
use crate::document::Document;
use crate::error::TransportError;
use crate::limiter::{Admission, RateLimiter};
use crate::transport::{OutboundRequest, Transport};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Outcome of one submission attempt.
#[derive(Debug)]
pub enum SubmissionResult {
    /// The registry accepted the request
    Submitted,
    /// The rate limit window is full; nothing was sent
    RateLimited {
        /// Time until a slot frees up
        retry_after: Duration,
    },
    /// The request could not be built (bad endpoint or header)
    RequestConstructionFailed(TransportError),
    /// Serialization or the network send failed
    TransportFailed(TransportError),
}

impl SubmissionResult {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionResult::Submitted)
    }

    fn from_error(err: TransportError) -> Self {
        match err {
            TransportError::InvalidEndpoint { .. } | TransportError::InvalidRequest(_) => {
                Self::RequestConstructionFailed(err)
            }
            other => Self::TransportFailed(other),
        }
    }
}

impl fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submitted => write!(f, "Document Posted"),
            Self::RateLimited { .. } => {
                write!(f, "Limit of requests is exceeded. Please try later.")
            }
            Self::RequestConstructionFailed(_) => write!(f, "URI syntax error"),
            Self::TransportFailed(_) => write!(f, "Error making request"),
        }
    }
}

/// Client that gates document submissions through a rate limiter.
pub struct SubmissionClient<T, C = SystemClock> {
    limiter: RateLimiter,
    transport: T,
    clock: C,
    registry: RegistryConfig,
}

impl<T: Transport> SubmissionClient<T> {
    /// Create a client driven by the system clock.
    pub fn new(limiter: RateLimiter, transport: T, registry: RegistryConfig) -> Self {
        Self::with_clock(limiter, transport, registry, SystemClock)
    }
}

impl<T: Transport, C: Clock> SubmissionClient<T, C> {
    /// Create a client that reads "now" from `clock`.
    pub fn with_clock(limiter: RateLimiter, transport: T, registry: RegistryConfig, clock: C) -> Self {
        Self {
            limiter,
            transport,
            clock,
            registry,
        }
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Submit a document, subject to the rate limit.
    ///
    /// Never panics and never retries; every failure is reported through
    /// the returned [`SubmissionResult`].
    pub async fn submit(&self, document: &Document, signature: &str) -> SubmissionResult {
        // The limiter lock is released before any I/O starts.
        if let Admission::Rejected { retry_after } = self.limiter.acquire(self.clock.now()) {
            debug!(doc_id = %document.doc_id, ?retry_after, "Submission rate limited");
            return SubmissionResult::RateLimited { retry_after };
        }

        let request = match self.build_request(document, signature) {
            Ok(request) => request,
            Err(err) => {
                warn!(doc_id = %document.doc_id, error = %err, "Could not build submission");
                return SubmissionResult::from_error(err);
            }
        };

        match self.transport.send(request).await {
            Ok(()) => {
                info!(doc_id = %document.doc_id, "Document submitted");
                SubmissionResult::Submitted
            }
            Err(err) => {
                warn!(doc_id = %document.doc_id, error = %err, "Submission failed");
                SubmissionResult::from_error(err)
            }
        }
    }

    fn build_request(
        &self,
        document: &Document,
        signature: &str,
    ) -> Result<OutboundRequest, TransportError> {
        let url = Url::parse(&self.registry.endpoint).map_err(|source| {
            TransportError::InvalidEndpoint {
                url: self.registry.endpoint.clone(),
                source,
            }
        })?;
        let body = document.to_wire()?;

        let mut headers = vec![(
            "Content-Type".to_string(),
            self.registry.content_type.clone(),
        )];
        if let Some(name) = &self.registry.signature_header {
            headers.push((name.clone(), signature.to_string()));
        }

        Ok(OutboundRequest { url, headers, body })
    }
}
