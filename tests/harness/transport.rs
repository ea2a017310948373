// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Transport double that records every request it is handed.

use registry_submitter::{OutboundRequest, Transport, TransportError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Records requests and answers with a fixed outcome.
///
/// Clones share their counters, so a test can keep one clone while the
/// client owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<OutboundRequest>>>,
    fail_with_status: Option<u16>,
    latency: Duration,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose every send fails with `status`.
    pub fn failing(status: u16) -> Self {
        Self {
            fail_with_status: Some(status),
            ..Self::default()
        }
    }

    /// Delay each send, simulating network time.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<OutboundRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: OutboundRequest) -> Result<(), TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match self.fail_with_status {
            Some(status) => Err(TransportError::Status(status)),
            None => Ok(()),
        }
    }
}
