//! CLI entrypoint for the scriptstr conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use scriptstr_engine::{StringOps, invoke, read};
use scriptstr_harness::structured_log::{ArtifactIndex, LogEmitter, LogEntry, LogLevel, Outcome};

/// Conformance tooling for the scriptstr engine.
#[derive(Debug, Parser)]
#[command(name = "scriptstr-harness")]
#[command(about = "Conformance testing harness for the scriptstr engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the builtin fixture catalogue as JSON files.
    GenFixtures {
        /// Output directory for fixture JSON files.
        #[arg(long)]
        output: PathBuf,
    },
    /// Verify the engine against fixture files.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown; a sibling .json is written too).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
        /// Optional structured JSONL log path (an artifact index is
        /// written next to it when a report is also requested).
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Deploy a fresh instance, apply one operation, read one slot.
    Invoke {
        /// Wire name of the operation (e.g. setSlice).
        #[arg(long)]
        operation: String,
        /// Operation arguments as a JSON object.
        #[arg(long)]
        inputs: String,
        /// Result slot to read back (string, uint, bool, array).
        #[arg(long)]
        read: String,
        /// Element index for array reads.
        #[arg(long)]
        index: Option<usize>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenFixtures { output } => {
            std::fs::create_dir_all(&output)?;
            for set in scriptstr_harness::builtin::builtin_fixture_sets() {
                let file_name = format!("{}.json", set.family.replace('/', "_"));
                let path = output.join(file_name);
                std::fs::write(&path, set.to_json()?)?;
                eprintln!("Wrote {} ({} cases)", path.display(), set.cases.len());
            }
        }
        Command::Verify {
            fixture,
            report,
            timestamp,
            log,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let mut fixture_sets = Vec::new();
            let mut fixture_paths: Vec<PathBuf> = std::fs::read_dir(&fixture)?
                .filter_map(|entry| entry.ok().map(|entry| entry.path()))
                .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
                .collect();
            fixture_paths.sort();

            for path in fixture_paths {
                match scriptstr_harness::FixtureSet::from_file(&path) {
                    Ok(set) => fixture_sets.push(set),
                    Err(err) => eprintln!("Skipping {}: {}", path.display(), err),
                }
            }
            if fixture_sets.is_empty() {
                return Err(format!("No fixture JSON files found in {}", fixture.display()).into());
            }

            let timestamp =
                timestamp.unwrap_or_else(|| format!("{:?}", std::time::SystemTime::now()));
            let runner = scriptstr_harness::TestRunner::new("fixture-verify");
            let mut results = Vec::new();
            for set in &fixture_sets {
                results.extend(runner.run(set));
            }

            // Stabilize report ordering for reproducible golden-output hashing.
            results.sort_by(|a, b| {
                a.family
                    .cmp(&b.family)
                    .then_with(|| a.case_name.cmp(&b.case_name))
            });

            if let Some(log_path) = &log {
                write_structured_log(log_path, &timestamp, &results)?;
            }

            let summary = scriptstr_harness::VerificationSummary::from_results(results);
            let report_doc = scriptstr_harness::ConformanceReport {
                title: String::from("scriptstr Conformance Report"),
                campaign: runner.campaign.clone(),
                timestamp,
                summary,
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;

                if let Some(log_path) = &log {
                    let mut index = ArtifactIndex::new(report_doc.timestamp.as_str());
                    index.add_file(&report_path)?;
                    index.add_file(&json_path)?;
                    let index_path = log_path.with_extension("artifacts.json");
                    std::fs::write(&index_path, index.to_json())?;
                    eprintln!("Wrote artifact index to {}", index_path.display());
                }
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::Invoke {
            operation,
            inputs,
            read: slot,
            index,
        } => {
            let inputs: serde_json::Value = serde_json::from_str(&inputs)?;
            let mut ops = StringOps::new();
            invoke(&mut ops, &operation, &inputs)?;
            let value = read(&ops, &slot, index)?;
            match value {
                serde_json::Value::String(s) => println!("{s}"),
                other => println!("{other}"),
            }
        }
    }

    Ok(())
}

/// Emits one JSONL line per case result, plus a run summary line.
fn write_structured_log(
    path: &std::path::Path,
    timestamp: &str,
    results: &[scriptstr_harness::VerificationResult],
) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut emitter = LogEmitter::to_file(path)?;
    let trace_id = format!("verify-{timestamp}");

    for result in results {
        let mut entry = LogEntry::new(timestamp, trace_id.as_str(), LogLevel::Info, "case_verified");
        entry.family = Some(result.family.clone());
        entry.case_name = Some(result.case_name.clone());
        entry.outcome = Some(if result.passed {
            Outcome::Pass
        } else {
            Outcome::Fail
        });
        if let Some(diff) = &result.diff {
            entry.level = LogLevel::Error;
            entry.detail = Some(diff.clone());
        }
        emitter.emit(&entry)?;
    }

    let failed = results.iter().filter(|r| !r.passed).count();
    let mut summary = LogEntry::new(timestamp, trace_id.as_str(), LogLevel::Info, "run_complete");
    summary.detail = Some(format!("total={}, failed={failed}", results.len()));
    emitter.emit(&summary)
}
