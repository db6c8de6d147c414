use crate::domain::model::FailedAttempt;
use crate::utils::error::{Result, TranslatorError};
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    Retry { delay: Option<Duration> },
    GiveUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Option<Duration>,
    /// Retry errors that `is_retryable` rejects as well.
    pub retry_all_errors: bool,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_RETRIES: u32 = 10;

    /// A zero delay means retrying immediately.
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self {
            max_retries,
            delay: (!delay.is_zero()).then_some(delay),
            retry_all_errors: false,
        }
    }

    pub fn retrying_all_errors(self) -> Self {
        Self {
            retry_all_errors: true,
            ..self
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// `attempt` is the 1-based number of the attempt that just failed.
    pub fn decide(&self, attempt: u32, error: &TranslatorError) -> RetryDecision {
        let retryable = self.retry_all_errors || error.is_retryable();
        if !retryable || attempt > self.max_retries {
            RetryDecision::GiveUp
        } else {
            RetryDecision::Retry { delay: self.delay }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_RETRIES, Duration::ZERO)
    }
}

#[derive(Debug)]
pub struct RetryOutcome<T> {
    /// The successful value, or the error of the last attempt.
    pub result: Result<T>,
    pub failures: Vec<FailedAttempt>,
}

/// Runs `op` with the attempt number until it succeeds or `policy` gives up.
pub async fn retry_with_policy<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> RetryOutcome<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut failures = Vec::new();
    let mut attempt = 1;

    loop {
        let err = match op(attempt).await {
            Ok(value) => {
                return RetryOutcome {
                    result: Ok(value),
                    failures,
                }
            }
            Err(err) => err,
        };

        tracing::warn!(
            "Attempt {}/{} failed: {}",
            attempt,
            policy.max_attempts(),
            err
        );
        failures.push(FailedAttempt {
            attempt,
            message: err.to_string(),
        });

        match policy.decide(attempt, &err) {
            RetryDecision::Retry { delay } => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                attempt += 1;
            }
            RetryDecision::GiveUp => {
                return RetryOutcome {
                    result: Err(err),
                    failures,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn api_error() -> TranslatorError {
        TranslatorError::ApiStatusError {
            status: 503,
            body: "unavailable".to_string(),
        }
    }

    #[test]
    fn test_default_policy_allows_eleven_attempts() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 11);
        assert_eq!(policy.delay, None);
        assert_eq!(
            policy.decide(10, &api_error()),
            RetryDecision::Retry { delay: None }
        );
        assert_eq!(policy.decide(11, &api_error()), RetryDecision::GiveUp);
    }

    #[test]
    fn test_policy_carries_delay() {
        let policy = RetryPolicy::new(2, Duration::from_millis(250));
        assert_eq!(
            policy.decide(1, &api_error()),
            RetryDecision::Retry {
                delay: Some(Duration::from_millis(250))
            }
        );
    }

    #[test]
    fn test_policy_gives_up_on_non_retryable_error() {
        let policy = RetryPolicy::default();
        let err = TranslatorError::MissingConfigError {
            field: "api_key".to_string(),
        };
        assert_eq!(policy.decide(1, &err), RetryDecision::GiveUp);
    }

    #[test]
    fn test_policy_retrying_all_errors_ignores_retryability() {
        let policy = RetryPolicy::default().retrying_all_errors();
        let err = TranslatorError::IoError(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "reset",
        ));
        assert_eq!(policy.decide(1, &err), RetryDecision::Retry { delay: None });
        assert_eq!(policy.decide(11, &err), RetryDecision::GiveUp);
    }

    #[tokio::test]
    async fn test_retry_succeeds_after_k_failures() {
        let policy = RetryPolicy::default();
        let calls = AtomicU32::new(0);

        let outcome = retry_with_policy(&policy, |attempt| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt <= 4 {
                    Err(api_error())
                } else {
                    Ok("done")
                }
            }
        })
        .await;

        assert_eq!(outcome.result.unwrap(), "done");
        assert_eq!(outcome.failures.len(), 4);
        assert_eq!(outcome.failures[3].attempt, 4);
        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_retry_gives_up_after_max_attempts() {
        let policy = RetryPolicy::default();
        let calls = AtomicU32::new(0);

        let outcome: RetryOutcome<()> = retry_with_policy(&policy, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(api_error()) }
        })
        .await;

        assert!(outcome.result.is_err());
        assert_eq!(outcome.failures.len(), 11);
        assert_eq!(outcome.failures.last().unwrap().attempt, 11);
        assert_eq!(calls.load(Ordering::SeqCst), 11);
    }

    #[tokio::test]
    async fn test_zero_retries_means_single_attempt() {
        let policy = RetryPolicy::new(0, Duration::ZERO);

        let outcome: RetryOutcome<()> = retry_with_policy(&policy, |_| async { Err(api_error()) }).await;

        assert_eq!(outcome.failures.len(), 1);
    }
}
