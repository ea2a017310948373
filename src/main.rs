// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Registry Submit
//!
//! Submits one document file to the registry through the rate-limited
//! client and reports the outcome.
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables:
//!
//! - `REGISTRY_URL`: Document creation endpoint
//! - `RATE_LIMIT`: Max submissions per window (default: 10)
//! - `RATE_WINDOW_MS`: Window length in milliseconds (default: 1000)
//! - `SIGNATURE_HEADER`: Header that carries the signature (default: unset)
//! - `REQUEST_TIMEOUT_SECS`: Per-request timeout (default: 30)

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use registry_submitter::{
    config::{Config, RateLimitConfig, RegistryConfig},
    Document, HttpTransport, RateLimiter, SubmissionClient,
};

#[derive(Parser)]
#[command(name = "registry-submit", about = "Submit a document to the registry")]
struct Args {
    /// Path to the document JSON (registry wire format)
    #[arg(long)]
    document: PathBuf,

    /// Pre-computed document signature
    #[arg(long)]
    signature: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().json())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();

    // Load configuration
    let config = load_config(|key| std::env::var(key).ok());
    info!(
        endpoint = %config.registry.endpoint,
        limit = config.rate_limit.limit,
        window_ms = config.rate_limit.window.as_millis() as u64,
        "Starting registry submitter"
    );

    let raw = std::fs::read(&args.document)?;
    let document: Document = serde_json::from_slice(&raw)?;

    let limiter = RateLimiter::new(config.rate_limit)?;
    let transport = HttpTransport::new(config.registry.timeout())?;
    let client = SubmissionClient::new(limiter, transport, config.registry);

    let result = client.submit(&document, &args.signature).await;
    info!(doc_id = %document.doc_id, result = %result, "Submission finished");
    println!("{result}");

    Ok(if result.is_submitted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Load configuration from environment variables.
///
/// `var` looks a variable up; empty values count as unset.
fn load_config(var: impl Fn(&str) -> Option<String>) -> Config {
    let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());
    let rate_defaults = RateLimitConfig::default();
    let registry_defaults = RegistryConfig::default();

    Config {
        rate_limit: RateLimitConfig {
            limit: var("RATE_LIMIT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(rate_defaults.limit),
            window: var("RATE_WINDOW_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(rate_defaults.window),
        },
        registry: RegistryConfig {
            endpoint: var("REGISTRY_URL").unwrap_or(registry_defaults.endpoint),
            signature_header: var("SIGNATURE_HEADER"),
            timeout_secs: var("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(registry_defaults.timeout_secs),
            ..registry_defaults
        },
    }
}
