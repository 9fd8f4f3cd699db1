//! Integration test: structured logging contract.
//!
//! Validates that:
//! 1. The structured_log module produces valid JSONL.
//! 2. The validation functions catch schema violations.
//! 3. LogEmitter writes correct JSONL to files.
//! 4. ArtifactIndex digests written artifacts with SHA-256.
//!
//! Run: cargo test -p scriptstr-harness --test structured_log_test

use std::path::PathBuf;

use scriptstr_harness::structured_log::{
    ArtifactIndex, LogEmitter, LogEntry, LogLevel, Outcome, sha256_hex, validate_log_file,
    validate_log_line,
};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("scriptstr_{}_{name}", std::process::id()))
}

#[test]
fn emitter_writes_validatable_jsonl() {
    let path = temp_path("emitter.jsonl");
    let _ = std::fs::remove_file(&path);

    {
        let mut emitter = LogEmitter::to_file(&path).expect("opens log file");
        let mut entry =
            LogEntry::new("2026-08-05T00:00:00Z", "run-42", LogLevel::Info, "case_verified");
        entry.operation = Some("setSplit".to_string());
        entry.slot = Some("array".to_string());
        entry.case_name = Some("split_o_first".to_string());
        entry.outcome = Some(Outcome::Pass);
        emitter.emit(&entry).expect("emits first line");

        let summary = LogEntry::new("2026-08-05T00:00:01Z", "run-42", LogLevel::Info, "run_complete");
        emitter.emit(&summary).expect("emits second line");
    }

    let entries = validate_log_file(&path).expect("file validates");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].operation.as_deref(), Some("setSplit"));
    assert_eq!(entries[0].outcome, Some(Outcome::Pass));
    assert_eq!(entries[1].event, "run_complete");

    std::fs::remove_file(&path).ok();
}

#[test]
fn invalid_lines_fail_with_line_numbers() {
    let path = temp_path("invalid.jsonl");
    std::fs::write(
        &path,
        concat!(
            r#"{"timestamp":"t","trace_id":"r","level":"info","event":"ok"}"#,
            "\n",
            r#"{"timestamp":"t","trace_id":"r","level":"info"}"#,
            "\n",
        ),
    )
    .expect("writes fixture file");

    let err = validate_log_file(&path).expect_err("second line is invalid");
    assert!(err.starts_with("line 2:"), "unexpected error: {err}");

    std::fs::remove_file(&path).ok();
}

#[test]
fn validate_line_requires_non_empty_trace_id() {
    let line = r#"{"timestamp":"t","trace_id":"","level":"warn","event":"e"}"#;
    assert!(validate_log_line(line).is_err());
}

#[test]
fn artifact_index_digests_written_files() {
    let artifact = temp_path("report.md");
    std::fs::write(&artifact, "# scriptstr Conformance Report\n").expect("writes artifact");

    let mut index = ArtifactIndex::new("run-42");
    index.add_file(&artifact).expect("indexes artifact");

    assert_eq!(index.artifacts.len(), 1);
    let expected = sha256_hex(b"# scriptstr Conformance Report\n");
    assert_eq!(index.artifacts[0].sha256, expected);
    assert_eq!(index.artifacts[0].sha256.len(), 64);

    let json = index.to_json();
    let parsed: ArtifactIndex = serde_json::from_str(&json).expect("index round trips");
    assert_eq!(parsed.run_id, "run-42");

    std::fs::remove_file(&artifact).ok();
}
