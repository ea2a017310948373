// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rolling window rate limiter for registry submissions.
//!
//! Every admission is recorded in a ledger of timestamps. Before each
//! capacity check, entries that are `window` or more old are purged; a new
//! admission is granted only while fewer than `limit` entries remain.
//! Purge, check and append run under one lock.

use crate::config::RateLimitConfig;
use crate::error::ConfigError;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::debug;

/// Outcome of an admission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// A slot was reserved
    Admitted {
        /// Slots still free in the current window
        remaining: u32,
    },
    /// The window is full; nothing was reserved
    Rejected {
        /// Time until the oldest counted admission expires
        retry_after: Duration,
    },
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted { .. })
    }
}

/// Thread-safe rolling window rate limiter.
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    window: Duration,
    ledger: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the given configuration.
    pub fn new(config: RateLimitConfig) -> Result<Self, ConfigError> {
        if config.limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        let window = config.window_duration();
        if window.is_zero() {
            return Err(ConfigError::ZeroWindow);
        }

        Ok(Self {
            ledger: Mutex::new(VecDeque::with_capacity(config.limit as usize)),
            window,
            config,
        })
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Try to reserve a slot at `now`.
    ///
    /// Never blocks waiting for capacity: a full window is reported as
    /// `Rejected` straight away.
    pub fn acquire(&self, now: Instant) -> Admission {
        let mut ledger = self.lock();

        // An entry aged exactly `window` no longer counts.
        ledger.retain(|t| now.saturating_duration_since(*t) < self.window);

        let limit = self.config.limit as usize;
        if ledger.len() >= limit {
            let oldest_age = ledger
                .iter()
                .map(|t| now.saturating_duration_since(*t))
                .max()
                .unwrap_or_default();
            let retry_after = self.window.saturating_sub(oldest_age);
            debug!(in_window = ledger.len(), ?retry_after, "Admission rejected");
            return Admission::Rejected { retry_after };
        }

        ledger.push_back(now);
        let remaining = (limit - ledger.len()) as u32;
        debug!(in_window = ledger.len(), remaining, "Admission granted");
        Admission::Admitted { remaining }
    }

    /// Try to reserve a slot at the current system time.
    pub fn try_acquire(&self) -> Admission {
        self.acquire(Instant::now())
    }

    /// Number of admissions still counted against the window at `now`.
    pub fn admitted_in_window(&self, now: Instant) -> usize {
        self.lock()
            .iter()
            .filter(|t| now.saturating_duration_since(**t) < self.window)
            .count()
    }

    // The ledger is consistent after every statement that mutates it, so a
    // panic elsewhere while holding the lock cannot leave it half-updated.
    fn lock(&self) -> MutexGuard<'_, VecDeque<Instant>> {
        self.ledger.lock().unwrap_or_else(|e| e.into_inner())
    }
}
