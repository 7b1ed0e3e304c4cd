//! JSON scenarios: a dynamically-typed front end for the combinator
//!
//! A scenario is a JSON document describing an input sequence. Plain values are
//! literals. An object carrying `after_ms` is a timed element that settles after
//! that many milliseconds, rejecting with `reject` when present and otherwise
//! resolving with `resolve` (or `null`).
//!
//! ```json
//! [3, 42, { "after_ms": 100, "resolve": "foo" }]
//! ```

use crate::combinator::{all_with, All, AllError, AllOptions, Input};
use serde_json::Value;
use std::error::Error;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub const AFTER_MS: &str = "after_ms";
pub const RESOLVE: &str = "resolve";
pub const REJECT: &str = "reject";

/// Failure reason of a timed scenario element
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection(pub Value);

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(reason) => f.write_str(reason),
            other => write!(f, "{}", other),
        }
    }
}

impl Error for Rejection {}

/// Parse a scenario into combinator inputs.
///
/// Fails with `InvalidArgument` when `scenario` is not an array or a timed
/// element has a malformed `after_ms`.
pub fn parse_inputs(scenario: &Value) -> Result<Vec<Input<Value, Rejection>>, AllError<Rejection>> {
    let elements = scenario.as_array().ok_or_else(|| {
        AllError::invalid_argument(format!(
            "argument must be an array, got {}",
            kind_of(scenario)
        ))
    })?;

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| parse_element(index, element))
        .collect()
}

fn parse_element(index: usize, element: &Value) -> Result<Input<Value, Rejection>, AllError<Rejection>> {
    let Some(fields) = element.as_object() else {
        return Ok(Input::literal(element.clone()));
    };
    let Some(after) = fields.get(AFTER_MS) else {
        return Ok(Input::literal(element.clone()));
    };

    let after_ms = after.as_u64().ok_or_else(|| {
        AllError::invalid_argument(format!(
            "element {}: `{}` must be a non-negative integer, got {}",
            index, AFTER_MS, after
        ))
    })?;
    let delay = Duration::from_millis(after_ms);

    let outcome = match fields.get(REJECT) {
        Some(reason) => Err(Rejection(reason.clone())),
        None => Ok(fields.get(RESOLVE).cloned().unwrap_or(Value::Null)),
    };

    Ok(Input::future(async move {
        tokio::time::sleep(delay).await;
        outcome
    }))
}

/// Combine a scenario. A malformed scenario yields an already-failed combinator.
pub fn all_from_value(scenario: Value) -> All<Value, Rejection> {
    all_from_value_with(scenario, AllOptions::default())
}

pub fn all_from_value_with(scenario: Value, options: AllOptions) -> All<Value, Rejection> {
    match parse_inputs(&scenario) {
        Ok(inputs) => all_with(inputs, options),
        Err(e) => {
            debug!(error = %e, "Scenario: rejected before start");
            All::rejected(e)
        }
    }
}

/// Read and parse a scenario file
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Value, Box<dyn Error + Send + Sync>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read scenario {}: {}", path.display(), e))?;
    let scenario: Value = serde_json::from_str(&raw)
        .map_err(|e| format!("Invalid scenario JSON in {}: {}", path.display(), e))?;
    Ok(scenario)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
