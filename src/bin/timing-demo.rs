//! Fanin timing-demo
//!
//! Shows a debounced and a throttled callback under a burst of calls.

use dotenvy::dotenv;
use fanin::config::FaninConfig;
use fanin::logging;
use fanin::timing::{Debouncer, Throttle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    let config = FaninConfig::from_env();
    let debounce_delay = Duration::from_millis(config.debounce_ms);
    let throttle_delay = Duration::from_millis(config.throttle_ms);

    info!(delay_ms = config.debounce_ms, "Debounce: three quick calls, then one later");
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    let debouncer = Debouncer::new(debounce_delay, move |label: &'static str| {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        info!(label, invocation = n, "Debounced function called");
    });

    debouncer.call("burst-1");
    debouncer.call("burst-2");
    debouncer.call("burst-3");
    sleep(debounce_delay + debounce_delay / 2).await;
    debouncer.call("late");
    sleep(debounce_delay + debounce_delay / 2).await;
    info!(invocations = fired.load(Ordering::SeqCst), "Debounce finished");

    info!(delay_ms = config.throttle_ms, "Throttle: a call every quarter delay");
    let runs = AtomicUsize::new(0);
    let throttle = Throttle::new(throttle_delay, |attempt: usize| {
        runs.fetch_add(1, Ordering::SeqCst);
        attempt
    });
    for attempt in 0..8 {
        let served_by = throttle.call(attempt);
        info!(attempt, served_by, "Throttled call");
        sleep(throttle_delay / 4).await;
    }
    info!(runs = runs.load(Ordering::SeqCst), "Throttle finished");

    Ok(())
}
