//! Test execution engine.

use scriptstr_engine::{StringOps, invoke, read};
use serde_json::Value;

use crate::diff;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::verify::VerificationResult;

/// Runs fixture sets and collects verification results.
///
/// Every case gets a freshly deployed engine instance, so cases are
/// order-independent and a case only observes its own operation.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| {
                let (actual, diff) = execute_case(case);
                VerificationResult {
                    family: fixture_set.family.clone(),
                    case_name: case.name.clone(),
                    spec_section: case.spec_section.clone(),
                    passed: actual == case.expected_output,
                    expected: case.expected_output.clone(),
                    actual,
                    diff,
                }
            })
            .collect()
    }
}

/// Deploy, invoke, read: one case against a fresh instance.
fn execute_case(case: &FixtureCase) -> (String, Option<String>) {
    let mut ops = StringOps::new();
    let observation = invoke(&mut ops, &case.operation, &case.inputs)
        .and_then(|()| read(&ops, &case.read.slot, case.read.index));

    let actual = match observation {
        Ok(value) => render_value(&value),
        Err(err) => format!("error:{err}"),
    };

    let diff_out = if actual == case.expected_output {
        None
    } else {
        Some(diff::render_diff(&case.expected_output, &actual))
    };
    (actual, diff_out)
}

/// Stringifies an observed slot value for fixture comparison.
///
/// Strings render unquoted; numbers and booleans use their JSON
/// rendering.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
