// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Time sources for admission decisions.
//!
//! `SystemClock` is used in production. `ManualClock` only moves when told
//! to, which makes window expiry testable without sleeping.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Source of the "now" passed to the rate limiter.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Monotonic system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock.
///
/// Clones share the same underlying instant, so advancing one clone is
/// visible through all of them.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<Mutex<Instant>>,
}

impl ManualClock {
    /// Create a clock frozen at `start`.
    pub fn new(start: Instant) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += by;
    }

    /// Jump to a specific instant.
    pub fn set(&self, instant: Instant) {
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = instant;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}
