//! Leading-edge throttle

use std::sync::{Mutex, PoisonError};
use tokio::time::{Duration, Instant};

/// Runs an action at most once per `delay`.
///
/// Calls arriving within `delay` of the last executed call return a clone of
/// that call's result instead of running the action. The first call always runs.
/// The action runs while the internal lock is held, so it must not call back
/// into the same throttle.
pub struct Throttle<F, R> {
    delay: Duration,
    action: F,
    state: Mutex<ThrottleState<R>>,
}

struct ThrottleState<R> {
    last_call: Option<Instant>,
    last_result: Option<R>,
}

impl<F, R: Clone> Throttle<F, R> {
    pub fn new<A>(delay: Duration, action: F) -> Self
    where
        F: Fn(A) -> R,
    {
        Self {
            delay,
            action,
            state: Mutex::new(ThrottleState {
                last_call: None,
                last_result: None,
            }),
        }
    }

    pub fn call<A>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();

        if let (Some(last_call), Some(result)) = (state.last_call, state.last_result.as_ref()) {
            if now.duration_since(last_call) < self.delay {
                return result.clone();
            }
        }

        let result = (self.action)(args);
        state.last_call = Some(now);
        state.last_result = Some(result.clone());
        result
    }

    /// Time left until the next call is allowed to run the action
    pub fn cooldown(&self) -> Duration {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state
            .last_call
            .map(|last_call| self.delay.saturating_sub(last_call.elapsed()))
            .unwrap_or(Duration::ZERO)
    }
}
