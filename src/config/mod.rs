//! Environment-driven configuration
//!
//! Binaries load `.env` with `dotenvy` before reading any of these.

use std::env;
use std::str::FromStr;

/// Deployment environment name (`ENVIRONMENT`, default `sandbox`)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Combinator and timing defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaninConfig {
    pub abort_on_failure: bool,
    pub retry_max_times: usize,
    pub retry_min_delay_ms: u64,
    pub debounce_ms: u64,
    pub throttle_ms: u64,
}

impl Default for FaninConfig {
    fn default() -> Self {
        Self {
            abort_on_failure: false,
            retry_max_times: 0,
            retry_min_delay_ms: 100,
            debounce_ms: 1000,
            throttle_ms: 1000,
        }
    }
}

impl FaninConfig {
    /// Read overrides from the environment. Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read overrides through `lookup`, e.g. a map in tests
    pub fn from_lookup<L>(lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            abort_on_failure: parse_or(&lookup, "ALL_ABORT_ON_FAILURE", defaults.abort_on_failure),
            retry_max_times: parse_or(&lookup, "ALL_RETRY_MAX_TIMES", defaults.retry_max_times),
            retry_min_delay_ms: parse_or(
                &lookup,
                "ALL_RETRY_MIN_DELAY_MS",
                defaults.retry_min_delay_ms,
            ),
            debounce_ms: parse_or(&lookup, "DEBOUNCE_MS", defaults.debounce_ms),
            throttle_ms: parse_or(&lookup, "THROTTLE_MS", defaults.throttle_ms),
        }
    }

    pub fn all_options(&self) -> crate::combinator::AllOptions {
        crate::combinator::AllOptions::default().abort_on_failure(self.abort_on_failure)
    }
}

fn parse_or<L, T>(lookup: &L, key: &str, default: T) -> T
where
    L: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}
