//! Retry policy for idle (query) fetches.
//!
//! Mutations never go through here; a failed mutation is reported once.

use std::future::Future;
use std::time::Duration;

use hl_client::ApiError;

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub retries: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
    /// Backoff is capped here.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 1,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    #[must_use]
    pub fn with_retries(retries: u32) -> Self {
        Self {
            retries,
            ..Self::default()
        }
    }

    /// No delay between attempts.
    #[must_use]
    pub const fn immediate(retries: u32) -> Self {
        Self {
            retries,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }
}

/// Auth failures are not retried: the token has already been cleared.
fn is_retryable(error: &ApiError) -> bool {
    !error.is_auth()
}

/// Run `op`, retrying retryable failures with exponential backoff.
pub(crate) async fn with_retry<T, F, Fut>(policy: &RetryPolicy, op: F) -> Result<T, ApiError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut delay = policy.base_delay;
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(error) if attempt < policy.retries && is_retryable(&error) => {
                attempt += 1;
                tracing::debug!(attempt, ?delay, %error, "fetch failed; retrying");
                tokio::time::sleep(delay).await;
                delay = std::cmp::min(delay * 2, policy.max_delay);
            }
            Err(error) => return Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn retries_once_then_succeeds() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result = with_retry(&RetryPolicy::immediate(1), move || async move {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(ApiError::from_status(503, None))
            } else {
                Ok(7)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn gives_up_after_budget() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result: Result<(), _> = with_retry(&RetryPolicy::immediate(1), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(ApiError::network("refused"))
        })
        .await;
        assert!(result.unwrap_err().is_network());
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn auth_errors_are_not_retried() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result: Result<(), _> = with_retry(&RetryPolicy::immediate(3), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(ApiError::from_status(401, None))
        })
        .await;
        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn default_policy_backs_off_one_second() {
        let start = tokio::time::Instant::now();
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let _ = with_retry(&RetryPolicy::default(), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>(ApiError::from_status(500, None))
        })
        .await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
