//! Retry policy for transient store failures.
//!
//! Applied only at the `request_booking` commit boundary; every other
//! operation surfaces `StoreUnavailable` to the caller on first failure.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Backoff strategy between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffStrategy {
    /// Fixed delay between retries
    Fixed,
    /// Exponential backoff: base * 2^attempt
    Exponential,
    /// Linear backoff: base * attempt
    Linear,
}

impl Default for BackoffStrategy {
    fn default() -> Self {
        Self::Exponential
    }
}

/// Bounded retry configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub strategy: BackoffStrategy,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(25),
            strategy: BackoffStrategy::Exponential,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries (single attempt).
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
            strategy: BackoffStrategy::Fixed,
        }
    }

    /// Delay before the given retry (attempt numbering starts at 1 for the
    /// first retry).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        match self.strategy {
            BackoffStrategy::Fixed => self.base_delay,
            BackoffStrategy::Linear => self.base_delay * attempt,
            BackoffStrategy::Exponential => {
                self.base_delay * 2u32.saturating_pow(attempt.saturating_sub(1))
            }
        }
    }
}
