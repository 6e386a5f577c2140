use smoke_report::output::formatter::render;
use smoke_report::report::generate;
use smoke_report::report::record::ProgressRecord;
use smoke_report::report::status::RunStatus;
use smoke_report::report::summary::{summarize_progress, Report};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_total_equals_sum_of_counters() {
    let value = serde_json::json!({
        "cases": {
            "r1": {"status": "completed"},
            "r2": {"status": "failed"},
            "r3": {"status": "skipped"},
            "r4": {"status": "running"},
            "r5": {"status": "mystery"},
            "r6": {"status": null},
            "r7": "not-an-object"
        }
    });
    let summary = summarize_progress(&ProgressRecord::from_value(value));

    let sum: usize = summary.counts.iter().map(|(_, n)| n).sum();
    assert_eq!(summary.total(), sum);
    assert_eq!(summary.total(), 7);
    assert_eq!(summary.counts.get(RunStatus::Unknown), 3);
}

#[test]
fn test_each_failed_case_listed_once() {
    let value = serde_json::json!({
        "cases": {
            "r1": {"status": "failed", "error": "a"},
            "r2": {"status": "failed"},
            "r3": {"status": "completed", "error": "ignored"}
        }
    });
    let summary = summarize_progress(&ProgressRecord::from_value(value));
    let text = render(&Report::Progress(summary));

    assert_eq!(text.matches("- r1 (a)\n").count(), 1);
    assert_eq!(text.matches("- r2\n").count(), 1);
    assert!(!text.contains("r3"));
}

#[test]
fn test_generate_does_not_modify_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("smoke_progress.json");
    let body = r#"{"cases": {"r1": {"status": "failed", "error": "x"}}}"#;
    fs::write(&path, body).unwrap();

    let first = render(&generate(dir.path()));
    let second = render(&generate(dir.path()));
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&path).unwrap(), body);
}

#[test]
fn test_error_suffix_only_for_non_empty_strings() {
    let value = serde_json::json!({
        "cases": {
            "z": {"status": "failed", "error": 0},
            "f": {"status": "failed", "error": false},
            "l": {"status": "failed", "error": []},
            "o": {"status": "failed", "error": {}},
            "n": {"status": "failed", "error": 42},
            "e": {"status": "failed", "error": ""},
            "s": {"status": "failed", "error": "timeout"}
        }
    });
    let text = render(&Report::Progress(summarize_progress(
        &ProgressRecord::from_value(value),
    )));

    assert!(text.ends_with(
        "Failed cases:\n- z\n- f\n- l\n- o\n- n\n- e\n- s (timeout)\n"
    ));
}
