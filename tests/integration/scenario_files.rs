//! Scenario files loaded from disk and run end to end

use fanin::scenario::{all_from_value, load_scenario};
use serde_json::json;
use std::path::PathBuf;
use tokio::time::{Duration, Instant};

struct ScenarioFile(PathBuf);

impl ScenarioFile {
    fn write(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("fanin-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, contents).expect("write scenario file");
        Self(path)
    }
}

impl Drop for ScenarioFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

#[tokio::test(start_paused = true)]
async fn scenario_file_resolves_in_input_order() {
    let file = ScenarioFile::write(
        "ordered",
        r#"[
            { "after_ms": 30, "resolve": "slow" },
            { "after_ms": 10, "resolve": "fast" },
            "literal"
        ]"#,
    );

    let scenario = load_scenario(&file.0).expect("load scenario");
    let start = Instant::now();
    let values = all_from_value(scenario).await.expect("scenario fulfills");

    assert_eq!(values, vec![json!("slow"), json!("fast"), json!("literal")]);
    assert!(start.elapsed() >= Duration::from_millis(30));
}

#[tokio::test(start_paused = true)]
async fn scenario_file_fails_fast() {
    let file = ScenarioFile::write(
        "failing",
        r#"[{ "after_ms": 100, "resolve": 1 }, { "after_ms": 10, "reject": "boom" }]"#,
    );

    let scenario = load_scenario(&file.0).expect("load scenario");
    let start = Instant::now();
    let err = all_from_value(scenario).await.unwrap_err();

    assert_eq!(err.to_string(), "boom");
    assert_eq!(err.index(), Some(1));
    assert!(start.elapsed() < Duration::from_millis(100));
}

#[tokio::test]
async fn scenario_file_with_non_array_is_invalid() {
    let file = ScenarioFile::write("object", r#"{ "items": [1, 2, 3] }"#);

    let scenario = load_scenario(&file.0).expect("load scenario");
    let err = all_from_value(scenario).await.unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn missing_scenario_file_reports_path() {
    let path = std::env::temp_dir().join("fanin-does-not-exist.json");
    let err = load_scenario(&path).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read scenario"));
}

#[test]
fn malformed_scenario_file_is_rejected() {
    let file = ScenarioFile::write("malformed", "[1, 2,");
    let err = load_scenario(&file.0).unwrap_err();
    assert!(err.to_string().starts_with("Invalid scenario JSON"));
}
