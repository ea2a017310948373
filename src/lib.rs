// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Registry Submitter
//!
//! This crate submits documents to a remote registry while enforcing a
//! caller-configured rate limit:
//!
//! - At most `limit` submissions admitted in any rolling window
//! - Immediate rejection (with a retry hint) once the window is full
//! - One outbound POST per admitted submission, no retries
//! - Date-only (`YYYY-MM-DD`) wire format for document dates

pub mod client;
pub mod clock;
pub mod config;
pub mod document;
pub mod error;
pub mod limiter;
pub mod transport;

pub use client::{SubmissionClient, SubmissionResult};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use document::{Description, Document, Product};
pub use error::{ConfigError, TransportError};
pub use limiter::{Admission, RateLimiter};
pub use transport::{HttpTransport, OutboundRequest, Transport};
