//! Whole-operation retry on top of the combinator
//!
//! The combinator itself never retries. Callers that want to re-run a failed
//! aggregation rebuild its inputs and run it again with exponential backoff.

use crate::combinator::{All, AllError};
use crate::config::FaninConfig;
use backon::{ExponentialBuilder, Retryable};
use std::fmt;
use std::time::Duration;
use tracing::warn;

/// Backoff settings for [`retry_all`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt. 0 runs the aggregation once.
    pub max_times: usize,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_times: 3,
            min_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_times: 0,
            ..Self::default()
        }
    }

    pub fn from_config(config: &FaninConfig) -> Self {
        Self {
            max_times: config.retry_max_times,
            min_delay: Duration::from_millis(config.retry_min_delay_ms),
            ..Self::default()
        }
    }

    fn backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(self.min_delay)
            .with_max_delay(self.max_delay)
            .with_max_times(self.max_times)
    }
}

/// Await the combinator built by `make_attempt`, building a fresh one after each failure.
///
/// `InvalidArgument` failures are returned without retrying.
pub async fn retry_all<T, E, M>(make_attempt: M, policy: RetryPolicy) -> Result<Vec<T>, AllError<E>>
where
    M: FnMut() -> All<T, E>,
    E: fmt::Display,
{
    make_attempt
        .retry(policy.backoff())
        .sleep(tokio::time::sleep)
        .when(|e: &AllError<E>| !e.is_invalid_argument())
        .notify(|e: &AllError<E>, delay: Duration| {
            warn!(
                error = %e,
                delay_ms = delay.as_millis(),
                "retry_all: aggregation failed, retrying in {:?}",
                delay
            );
        })
        .await
}
