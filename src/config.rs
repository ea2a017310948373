// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Configuration for the registry submitter.
//!
//! Defaults target the registry's document creation endpoint with a limit of
//! 10 submissions per second.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Remote registry configuration
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Rolling window admission settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Maximum submissions admitted per window (default: 10)
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Rolling window length, written as `window_ms` (default: 1000)
    #[serde(rename = "window_ms", default = "default_window", with = "millis")]
    pub window: Duration,
}

/// Where and how documents are sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Document creation endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Content-Type sent with every submission
    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Header carrying the document signature. Unset means the signature is
    /// accepted but not sent.
    #[serde(default)]
    pub signature_header: Option<String>,

    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// Default value functions
fn default_limit() -> u32 {
    10
}

fn default_window() -> Duration {
    Duration::from_secs(1)
}

fn default_endpoint() -> String {
    "https://ismp.crpt.ru/api/v3/lk/documents/create".to_string()
}

fn default_content_type() -> String {
    "text/plain;charset=UTF-8".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rate_limit: RateLimitConfig::default(),
            registry: RegistryConfig::default(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            window: default_window(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            content_type: default_content_type(),
            signature_header: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RateLimitConfig {
    /// Build a config from a limit and a window duration.
    pub fn new(limit: u32, window: Duration) -> Self {
        Self { limit, window }
    }

    /// Get the rolling window duration
    pub fn window_duration(&self) -> Duration {
        self.window
    }
}

impl RegistryConfig {
    /// Get the request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Whole-millisecond encoding for window durations.
///
/// Serializing a window that is not a whole number of milliseconds fails
/// instead of rounding.
mod millis {
    use serde::{ser, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(window: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(window.as_millis())
            .map_err(|_| ser::Error::custom("window too large"))?;
        if Duration::from_millis(ms) != *window {
            return Err(ser::Error::custom(
                "window is not a whole number of milliseconds",
            ));
        }
        serializer.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
