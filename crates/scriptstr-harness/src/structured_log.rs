//! Structured logging contract for harness workflows.
//!
//! Provides:
//! - [`LogEntry`]: canonical JSONL log record with required + optional fields.
//! - [`LogEmitter`]: writes JSONL lines to a file or stdout.
//! - [`validate_log_line`] / [`validate_log_file`]: schema validation.
//! - [`ArtifactIndex`]: links a run to its report artifacts with
//!   SHA-256 integrity digests.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::io::Write;
use std::path::Path;

// ---------------------------------------------------------------------------
// Log entry
// ---------------------------------------------------------------------------

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Test/verification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    Error,
}

/// Canonical structured log entry.
///
/// Required fields: `timestamp`, `trace_id`, `level`, `event`.
/// Optional fields carry per-case context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    // Required
    pub timestamp: String,
    pub trace_id: String,
    pub level: LogLevel,
    pub event: String,

    // Optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl LogEntry {
    /// Creates an entry with the required fields set and every
    /// optional field empty.
    #[must_use]
    pub fn new(
        timestamp: impl Into<String>,
        trace_id: impl Into<String>,
        level: LogLevel,
        event: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            trace_id: trace_id.into(),
            level,
            event: event.into(),
            operation: None,
            slot: None,
            case_name: None,
            family: None,
            outcome: None,
            detail: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Emitter
// ---------------------------------------------------------------------------

/// Writes JSONL log lines to a file or stdout.
pub struct LogEmitter {
    sink: Box<dyn Write>,
}

impl LogEmitter {
    /// Emitter appending to the file at `path` (created if absent).
    pub fn to_file(path: &Path) -> std::io::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self {
            sink: Box::new(file),
        })
    }

    /// Emitter writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            sink: Box::new(std::io::stdout()),
        }
    }

    /// Serializes `entry` as one JSONL line and flushes it.
    pub fn emit(&mut self, entry: &LogEntry) -> std::io::Result<()> {
        let line = serde_json::to_string(entry).map_err(std::io::Error::other)?;
        writeln!(self.sink, "{line}")?;
        self.sink.flush()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validates a single JSONL line against the [`LogEntry`] schema.
///
/// Required string fields must be present and non-empty.
pub fn validate_log_line(line: &str) -> Result<LogEntry, String> {
    let entry: LogEntry =
        serde_json::from_str(line).map_err(|err| format!("invalid log line: {err}"))?;
    if entry.timestamp.is_empty() {
        return Err("log entry field 'timestamp' is empty".to_string());
    }
    if entry.trace_id.is_empty() {
        return Err("log entry field 'trace_id' is empty".to_string());
    }
    if entry.event.is_empty() {
        return Err("log entry field 'event' is empty".to_string());
    }
    Ok(entry)
}

/// Validates an entire JSONL file, returning the parsed entries.
///
/// Blank lines are skipped; the first invalid line fails the file
/// with its 1-based line number.
pub fn validate_log_file(path: &Path) -> Result<Vec<LogEntry>, String> {
    let content =
        std::fs::read_to_string(path).map_err(|err| format!("cannot read log file: {err}"))?;
    let mut entries = Vec::new();
    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry =
            validate_log_line(line).map_err(|err| format!("line {}: {err}", number + 1))?;
        entries.push(entry);
    }
    Ok(entries)
}

// ---------------------------------------------------------------------------
// Artifact index
// ---------------------------------------------------------------------------

/// A report artifact referenced by a log, with its content digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactRef {
    /// Path the artifact was written to.
    pub path: String,
    /// Lowercase hex SHA-256 of the artifact contents.
    pub sha256: String,
}

/// Links a verification run to the artifacts it produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactIndex {
    /// Identifier of the run that produced the artifacts.
    pub run_id: String,
    /// Indexed artifacts.
    pub artifacts: Vec<ArtifactRef>,
}

impl ArtifactIndex {
    /// Creates an empty index for `run_id`.
    #[must_use]
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            artifacts: Vec::new(),
        }
    }

    /// Reads the file at `path`, digests it, and records the reference.
    pub fn add_file(&mut self, path: &Path) -> std::io::Result<()> {
        let contents = std::fs::read(path)?;
        self.artifacts.push(ArtifactRef {
            path: path.display().to_string(),
            sha256: sha256_hex(&contents),
        });
        Ok(())
    }

    /// Serializes the index as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| String::from("{}"))
    }
}

/// Lowercase hex SHA-256 digest of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    let mut out = String::with_capacity(64);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}
