//! Retry with exponential backoff for group-list loading.
//!
//! A retry repeats the whole load (all three reads), so a partial result is
//! never combined across attempts.

use std::time::Duration;

/// Configuration for retry behavior on transient fetch errors.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Initial delay before the first retry.
    pub base_delay: Duration,
    /// Maximum delay between retries (backoff is capped here).
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(2),
        }
    }
}

impl RetryConfig {
    /// `retries` extra attempts on top of the first one.
    #[must_use]
    pub fn with_retries(retries: u32) -> Self {
        Self {
            max_attempts: retries.saturating_add(1),
            ..Self::default()
        }
    }

    /// Delay after failed attempt number `attempt` (1-based).
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_makes_a_single_attempt() {
        assert_eq!(RetryConfig::default().max_attempts, 1);
        assert_eq!(RetryConfig::with_retries(2).max_attempts, 3);
        assert_eq!(RetryConfig::with_retries(u32::MAX).max_attempts, u32::MAX);
    }

    #[test]
    fn backoff_doubles_then_caps() {
        let retry = RetryConfig::default();
        assert_eq!(retry.delay_for(1), Duration::from_millis(200));
        assert_eq!(retry.delay_for(2), Duration::from_millis(400));
        assert_eq!(retry.delay_for(3), Duration::from_millis(800));
        assert_eq!(retry.delay_for(5), Duration::from_secs(2));
        assert_eq!(retry.delay_for(40), Duration::from_secs(2));
    }
}
