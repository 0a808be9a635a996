use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

// ============================================================================
// Exponential Backoff Retry
// ============================================================================
//
// Used for side effects that may fail transiently after the main work is
// already committed (e.g. the welcome e-mail after a subscription is stored).
//
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts including the first one
    pub max_attempts: u32,
    #[serde(rename = "initial_delay_ms", with = "duration_ms")]
    pub initial_delay: Duration,
    #[serde(rename = "max_delay_ms", with = "duration_ms")]
    pub max_delay: Duration,
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// More attempts, shorter first delay
    pub fn aggressive() -> Self {
        Self {
            max_attempts: 5,
            initial_delay: Duration::from_millis(50),
            max_delay: Duration::from_secs(30),
            multiplier: 2.0,
        }
    }

    pub fn conservative() -> Self {
        Self {
            max_attempts: 2,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
            multiplier: 2.0,
        }
    }

    /// Single attempt, no waiting
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            initial_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            multiplier: 1.0,
        }
    }

    /// Delay before retry number `retry` (1-based), capped at `max_delay`
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = self.multiplier.max(1.0).powi(retry.saturating_sub(1) as i32);
        let millis = (self.initial_delay.as_millis() as f64 * factor).min(self.max_delay.as_millis() as f64);
        Duration::from_millis(millis as u64)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{label} failed after {attempts} attempt(s): {last_error}")]
pub struct RetryExhausted<E: std::fmt::Display> {
    pub label: String,
    pub attempts: u32,
    pub last_error: E,
}

/// Run `operation` until it succeeds or `config.max_attempts` is reached.
/// The closure receives the 1-based attempt number.
pub async fn retry_with_backoff<F, Fut, T, E>(
    config: &RetryConfig,
    label: &str,
    mut operation: F,
) -> Result<T, RetryExhausted<E>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;

        match operation(attempt).await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::info!(operation = label, attempt, "Succeeded after retry");
                }
                return Ok(value);
            }
            Err(error) if attempt >= max_attempts => {
                return Err(RetryExhausted {
                    label: label.to_string(),
                    attempts: attempt,
                    last_error: error,
                });
            }
            Err(error) => {
                let delay = config.delay_for(attempt);
                tracing::warn!(
                    operation = label,
                    attempt,
                    error = %error,
                    delay_ms = delay.as_millis() as u64,
                    "Attempt failed, retrying after delay"
                );
                sleep(delay).await;
            }
        }
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn fast_config(max_attempts: u32) -> RetryConfig {
        RetryConfig {
            max_attempts,
            initial_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(5),
            multiplier: 2.0,
        }
    }

    #[tokio::test]
    async fn test_retry_succeeds_eventually() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let result = retry_with_backoff(&fast_config(3), "welcome e-mail", |_attempt| {
            let counter = counter_clone.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err("smtp timeout")
                } else {
                    Ok("sent")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "sent");
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_reports_last_error() {
        let result = retry_with_backoff(&fast_config(2), "welcome e-mail", |attempt| async move {
            Err::<(), _>(format!("failure #{attempt}"))
        })
        .await;

        let error = result.unwrap_err();
        assert_eq!(error.attempts, 2);
        assert_eq!(error.last_error, "failure #2");
        assert_eq!(error.to_string(), "welcome e-mail failed after 2 attempt(s): failure #2");
    }

    #[tokio::test]
    async fn test_zero_attempts_still_runs_once() {
        let result = retry_with_backoff(&fast_config(0), "noop", |_| async { Ok::<_, String>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn test_delay_grows_and_is_capped() {
        let config = RetryConfig::default();

        assert_eq!(config.delay_for(1), Duration::from_millis(100));
        assert_eq!(config.delay_for(2), Duration::from_millis(200));
        assert_eq!(config.delay_for(3), Duration::from_millis(400));
        assert_eq!(config.delay_for(20), Duration::from_secs(10));
    }

    #[test]
    fn test_config_from_json_uses_milliseconds() {
        let config: RetryConfig =
            serde_json::from_str(r#"{ "max_attempts": 4, "initial_delay_ms": 25 }"#).unwrap();

        assert_eq!(config.max_attempts, 4);
        assert_eq!(config.initial_delay, Duration::from_millis(25));
        assert_eq!(config.max_delay, RetryConfig::default().max_delay);
    }
}
