//! Verification results and summaries.

use serde::{Deserialize, Serialize};

/// Outcome of a single fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Operation family the case belongs to.
    pub family: String,
    /// Case identifier.
    pub case_name: String,
    /// ECMA-262 clause reference carried over from the fixture.
    pub spec_section: String,
    /// Whether the observed value matched the expectation.
    pub passed: bool,
    /// Expected observation.
    pub expected: String,
    /// Actual observation.
    pub actual: String,
    /// Rendered divergence, present only on mismatch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

/// Aggregate over a verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Total cases executed.
    pub total: usize,
    /// Cases whose observation matched.
    pub passed: usize,
    /// Cases whose observation diverged.
    pub failed: usize,
    /// Per-case results, in execution order.
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    /// Folds per-case results into a summary.
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total,
            passed,
            failed: total - passed,
            results,
        }
    }

    /// True when no case diverged.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, passed: bool) -> VerificationResult {
        VerificationResult {
            family: "string/search".to_string(),
            case_name: name.to_string(),
            spec_section: "String.prototype.indexOf".to_string(),
            passed,
            expected: "2".to_string(),
            actual: if passed { "2" } else { "3" }.to_string(),
            diff: None,
        }
    }

    #[test]
    fn summary_counts_pass_and_fail() {
        let summary =
            VerificationSummary::from_results(vec![result("a", true), result("b", false)]);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert!(!summary.all_passed());
    }

    #[test]
    fn empty_summary_passes() {
        let summary = VerificationSummary::from_results(Vec::new());
        assert!(summary.all_passed());
    }
}
