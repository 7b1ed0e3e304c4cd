//! Unit tests for configuration

use fanin::combinator::AllOptions;
use fanin::config::FaninConfig;
use fanin::logging::is_production;
use std::collections::HashMap;

#[test]
fn test_config_default() {
    let config = FaninConfig::default();
    assert!(!config.abort_on_failure);
    assert_eq!(config.retry_max_times, 0);
    assert_eq!(config.retry_min_delay_ms, 100);
    assert_eq!(config.debounce_ms, 1000);
    assert_eq!(config.throttle_ms, 1000);
}

#[test]
fn test_config_overrides() {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("ALL_ABORT_ON_FAILURE", "true"),
        ("ALL_RETRY_MAX_TIMES", "4"),
        ("DEBOUNCE_MS", " 250 "),
    ]);
    let config = FaninConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
    assert!(config.abort_on_failure);
    assert_eq!(config.retry_max_times, 4);
    assert_eq!(config.debounce_ms, 250);
    assert_eq!(config.throttle_ms, 1000);
    assert_eq!(config.all_options(), AllOptions { abort_on_failure: true });
}

#[test]
fn test_unparsable_values_keep_defaults() {
    let config = FaninConfig::from_lookup(|key| match key {
        "ALL_RETRY_MAX_TIMES" => Some("many".to_string()),
        "THROTTLE_MS" => Some("-1".to_string()),
        _ => None,
    });
    assert_eq!(config, FaninConfig::default());
}

#[test]
fn test_is_production() {
    assert!(is_production("production"));
    assert!(is_production("prod"));
    assert!(!is_production("sandbox"));
}
