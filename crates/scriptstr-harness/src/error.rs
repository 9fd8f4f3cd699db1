//! Harness-side error type.

use thiserror::Error;

/// Errors raised while loading or writing harness artifacts.
///
/// Engine-side failures never appear here: the runner records them as
/// case results, not harness errors.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Reading or writing a fixture, report, or log file failed.
    #[error("harness io error: {0}")]
    Io(#[from] std::io::Error),

    /// A fixture or log line was not valid JSON for its schema.
    #[error("harness parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
