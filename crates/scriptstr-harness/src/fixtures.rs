//! Fixture loading and management.

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// Which result slot a case observes after its operation ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadSpec {
    /// Slot name: `string`, `uint`, `bool`, or `array`.
    pub slot: String,
    /// Element index for `array` reads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Wire name of the operation being tested.
    pub operation: String,
    /// ECMA-262 clause the behavior mirrors.
    pub spec_section: String,
    /// Named operation arguments (JSON object).
    pub inputs: serde_json::Value,
    /// Slot observation to make after the call.
    pub read: ReadSpec,
    /// Expected observation, stringified for comparison. Cases that
    /// expect the boundary layer to reject the call use the
    /// `error:`-prefixed rendering of the failure.
    pub expected_output: String,
}

/// A collection of fixture cases for an operation family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Operation family name (e.g. `string/case`).
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        Ok(set)
    }
}
