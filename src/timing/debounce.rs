//! Trailing-edge debouncer

use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};
use tracing::trace;

/// Delays an action until `delay` has passed without another call.
///
/// Each [`call`](Debouncer::call) cancels the previously scheduled invocation,
/// so only the arguments of the last call in a burst reach the action.
/// Dropping the debouncer cancels a scheduled invocation.
pub struct Debouncer<A> {
    delay: Duration,
    action: Arc<dyn Fn(A) + Send + Sync>,
    scheduled: Mutex<Option<JoinHandle<()>>>,
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new<F>(delay: Duration, action: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            delay,
            action: Arc::new(action),
            scheduled: Mutex::new(None),
        }
    }

    /// Schedule the action with `args`, replacing any pending invocation.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn call(&self, args: A) {
        let mut scheduled = self.scheduled.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = scheduled.take() {
            previous.abort();
            trace!("Debouncer: replaced pending invocation");
        }

        let action = self.action.clone();
        let delay = self.delay;
        *scheduled = Some(tokio::spawn(async move {
            sleep(delay).await;
            action(args);
        }));
    }

    /// Cancel the pending invocation. Returns whether one was still waiting.
    pub fn cancel(&self) -> bool {
        let mut scheduled = self.scheduled.lock().unwrap_or_else(PoisonError::into_inner);
        match scheduled.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        let scheduled = self.scheduled.lock().unwrap_or_else(PoisonError::into_inner);
        scheduled.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        let scheduled = self.scheduled.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = scheduled.take() {
            handle.abort();
        }
    }
}
