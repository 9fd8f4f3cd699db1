//! Conformance testing harness for the scriptstr engine.
//!
//! This crate provides:
//! - Fixture schema: JSON reference cases pairing an operation with
//!   the slot observation it must produce
//! - Fixture runner: deploy a fresh engine per case, invoke, read,
//!   compare
//! - Builtin fixture catalogue capturing the reference scenarios
//! - Report generation: human-readable + machine-readable conformance
//!   reports
//! - Structured JSONL logging with SHA-256 artifact integrity

#![forbid(unsafe_code)]

pub mod builtin;
pub mod diff;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet, ReadSpec};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
