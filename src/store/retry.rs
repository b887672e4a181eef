//! Bounded fixed-interval retry for store connections.
//!
//! No backoff growth, no jitter, no circuit breaker: a fixed number of
//! attempts separated by a fixed delay. Parameterized so it can be tested
//! under tokio's paused clock.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Attempt count and inter-attempt delay for [`retry_acquire`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts before giving up (default: 10)
    #[serde(default = "default_attempts")]
    pub attempts: u32,

    /// Fixed delay between attempts (default: 2 s)
    #[serde(default = "default_delay", with = "duration_secs")]
    pub delay: Duration,
}

fn default_attempts() -> u32 {
    10
}

fn default_delay() -> Duration {
    Duration::from_secs(2)
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: default_attempts(),
            delay: default_delay(),
        }
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(d)?))
    }
}

/// Run `attempt` up to `policy.attempts` times, sleeping `policy.delay`
/// between failures. Returns the first success, or the last error once the
/// attempt budget is spent. Each failed-but-retried attempt is logged at
/// warn level.
///
/// The closure receives the 1-based attempt number.
pub async fn retry_acquire<T, E, F, Fut>(policy: RetryPolicy, mut attempt: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let max = policy.attempts.max(1);
    let mut n = 1;
    loop {
        match attempt(n).await {
            Ok(value) => return Ok(value),
            Err(e) if n < max => {
                warn!(
                    attempt = n,
                    max_attempts = max,
                    delay_secs = policy.delay.as_secs(),
                    error = %e,
                    "store not ready, retrying"
                );
                n += 1;
                tokio::time::sleep(policy.delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn policy(attempts: u32) -> RetryPolicy {
        RetryPolicy {
            attempts,
            delay: Duration::from_secs(2),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn first_attempt_success_does_not_sleep() {
        let start = tokio::time::Instant::now();
        let result: Result<u32, String> = retry_acquire(policy(10), |n| async move { Ok(n) }).await;
        assert_eq!(result.unwrap(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_on_a_later_attempt() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, String> = retry_acquire(policy(10), |n| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 4 {
                    Err("not ready".to_string())
                } else {
                    Ok(n)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 4);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_the_attempt_budget() {
        let calls = AtomicU32::new(0);
        let start = tokio::time::Instant::now();
        let result: Result<(), String> = retry_acquire(policy(10), |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err("still down".to_string()) }
        })
        .await;
        assert_eq!(result.unwrap_err(), "still down");
        assert_eq!(calls.load(Ordering::SeqCst), 10);
        // Nine sleeps of the fixed delay between ten attempts.
        assert_eq!(start.elapsed(), Duration::from_secs(18));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_attempts_still_tries_once() {
        let calls = AtomicU32::new(0);
        let result: Result<(), String> = retry_acquire(policy(0), |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err("down".to_string()) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn default_policy_matches_operational_contract() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.attempts, 10);
        assert_eq!(policy.delay, Duration::from_secs(2));
    }
}
