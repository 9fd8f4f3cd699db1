//! Conformance report generation.

use serde::{Deserialize, Serialize};

use crate::verify::VerificationSummary;

/// A complete verification run, renderable as markdown or JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Campaign label the runner carried.
    pub campaign: String,
    /// Timestamp string supplied by the caller (fixed timestamps keep
    /// golden reports reproducible).
    pub timestamp: String,
    /// Aggregated results.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Renders the report as markdown: a summary header plus one
    /// table row per case, with diffs inlined for failures.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Campaign: {}\n", self.campaign));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!(
            "- Results: {} total, {} passed, {} failed\n\n",
            self.summary.total, self.summary.passed, self.summary.failed
        ));

        out.push_str("| Status | Family | Case | Reference |\n");
        out.push_str("|---|---|---|---|\n");
        for result in &self.summary.results {
            let status = if result.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                status, result.family, result.case_name, result.spec_section
            ));
        }

        let failures: Vec<_> = self.summary.results.iter().filter(|r| !r.passed).collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n\n");
            for result in failures {
                out.push_str(&format!("### {}\n\n", result.case_name));
                if let Some(diff) = &result.diff {
                    out.push_str(&format!("```\n{diff}\n```\n\n"));
                }
            }
        }
        out
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| String::from("{}"))
    }
}
