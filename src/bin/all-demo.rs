//! Fanin all-demo
//!
//! Runs a JSON scenario through the combinator and prints a report on stdout.
//!
//! Usage: `all-demo [scenario.json]`. Without a path the classic
//! `[3, 42, <"foo" after 100ms>]` scenario is used.

use chrono::{DateTime, Utc};
use dotenvy::dotenv;
use fanin::config::{get_environment, FaninConfig};
use fanin::format::format_list;
use fanin::logging;
use fanin::retry::{retry_all, RetryPolicy};
use fanin::scenario::{all_from_value_with, load_scenario};
use serde::Serialize;
use serde_json::{json, Value};
use std::env;
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Debug, Serialize)]
struct Report {
    started_at: DateTime<Utc>,
    elapsed_ms: u128,
    values: Vec<Value>,
    summary: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    let config = FaninConfig::from_env();
    info!(environment = %get_environment(), "Starting fanin all-demo");
    info!(
        abort_on_failure = config.abort_on_failure,
        retry_max_times = config.retry_max_times,
        "Combinator configuration"
    );

    let scenario = match env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "Loading scenario from {}", path);
            load_scenario(&path)?
        }
        None => json!([3, 42, { "after_ms": 100, "resolve": "foo" }]),
    };

    let started_at = Utc::now();
    let start = Instant::now();
    let options = config.all_options();
    let outcome = retry_all(
        || all_from_value_with(scenario.clone(), options),
        RetryPolicy::from_config(&config),
    )
    .await;
    let elapsed_ms = start.elapsed().as_millis();

    let values = match outcome {
        Ok(values) => values,
        Err(e) => {
            error!(
                error = %e,
                index = ?e.index(),
                elapsed_ms,
                "Aggregation failed after {}ms",
                elapsed_ms
            );
            return Err(format!("Aggregation failed: {}", e).into());
        }
    };

    let labels: Vec<String> = values.iter().map(label).collect();
    let report = Report {
        started_at,
        elapsed_ms,
        summary: format_list(labels.as_slice()),
        values,
    };
    info!(elapsed_ms, count = report.values.len(), "Aggregation fulfilled");

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
