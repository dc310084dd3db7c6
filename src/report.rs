//! Output formatting for docfill runs.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::Serialize;

use crate::annotate::{FileReport, FileStatus, RunSummary};

// =============================================================================
// JSON Format
// =============================================================================

/// JSON report structure.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub version: String,
    pub path: String,
    pub strategy: String,
    pub detector: String,
    pub dry_run: bool,
    pub files_scanned: usize,
    pub files_updated: usize,
    pub files_vetoed: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub comments_added: usize,
    pub files: &'a [FileReport],
}

/// Build the JSON report for a run.
pub fn json_report<'a>(
    path: &str,
    strategy: &str,
    detector: &str,
    summary: &'a RunSummary,
) -> JsonReport<'a> {
    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        strategy: strategy.to_string(),
        detector: detector.to_string(),
        dry_run: summary.dry_run,
        files_scanned: summary.scanned(),
        files_updated: summary.count(FileStatus::Updated),
        files_vetoed: summary.count(FileStatus::Vetoed),
        files_skipped: summary.count(FileStatus::Skipped),
        files_failed: summary.count(FileStatus::Failed),
        comments_added: summary.comments_added(),
        files: &summary.files,
    }
}

/// Write results in JSON format.
pub fn write_json(
    path: &str,
    strategy: &str,
    detector: &str,
    summary: &RunSummary,
) -> anyhow::Result<()> {
    let report = json_report(path, strategy, detector, summary);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in human-readable form.
///
/// One line per updated, vetoed, skipped or failed file, then a summary.
pub fn write_pretty(summary: &RunSummary, verbose: bool) {
    for file in &summary.files {
        match file.status {
            FileStatus::Updated => {
                let verb = if summary.dry_run { "Would update" } else { "Updated" };
                println!(
                    "{}: {} {}",
                    verb.green(),
                    file.path,
                    format!("(+{} comments)", file.comments.len()).dimmed()
                );
                if verbose {
                    for c in &file.comments {
                        println!("    {}:{} {} {}", file.path, c.line, c.kind, c.name.bold());
                    }
                }
            }
            FileStatus::Vetoed => {
                println!(
                    "{} {}: {}",
                    "Skipping".yellow(),
                    file.path,
                    file.reason.as_deref().unwrap_or("vetoed")
                );
            }
            FileStatus::Skipped => {
                println!(
                    "{} {}: {}",
                    "Skipping".yellow(),
                    file.path,
                    file.reason.as_deref().unwrap_or("parse error")
                );
            }
            FileStatus::Failed => {
                println!(
                    "{} {}: {}",
                    "Failed".red(),
                    file.path,
                    file.reason.as_deref().unwrap_or("unknown error")
                );
            }
            FileStatus::Unchanged => {}
        }
    }

    println!();
    println!("{}", summary_line(summary));
}

/// One-line run summary.
pub fn summary_line(summary: &RunSummary) -> String {
    let updated = summary.count(FileStatus::Updated);
    let action = if summary.dry_run { "would add" } else { "added" };
    let mut line = format!(
        "{} files scanned, {} comments {} in {} files",
        summary.scanned(),
        summary.comments_added(),
        action,
        updated
    );

    let vetoed = summary.count(FileStatus::Vetoed);
    let skipped = summary.count(FileStatus::Skipped);
    let failed = summary.count(FileStatus::Failed);
    if vetoed > 0 {
        line.push_str(&format!(", {} vetoed", vetoed));
    }
    if skipped > 0 {
        line.push_str(&format!(", {} skipped", skipped));
    }
    if failed > 0 {
        line.push_str(&format!(", {} failed", failed));
    }
    line
}
