//! CLI formatted output
//!
//! Renders a `BatchReport` as the human-readable run log.

use std::io::{self, Write};

use decomment_api::{BatchReport, FileOutcome, FileStatus, InputKind};

/// Render the report as the lines printed to stdout
pub fn render_report(report: &BatchReport, extension: &str) -> Vec<String> {
    let mut lines = Vec::new();

    match report.kind {
        InputKind::File => {
            for outcome in &report.files {
                outcome_lines(outcome, &mut lines);
            }
        }
        InputKind::Directory => {
            if report.is_empty() {
                lines.push(format!(
                    "No .{} files found in {}",
                    extension,
                    report.root.display()
                ));
                return lines;
            }

            lines.push(format!(
                "Found {} .{} file(s) to process",
                report.files.len(),
                extension
            ));
            for outcome in &report.files {
                outcome_lines(outcome, &mut lines);
            }
            lines.push(String::new());
            lines.push("Processing complete:".to_string());
            lines.push(format!("  Successfully processed: {} files", report.succeeded()));
            lines.push(format!("  Errors: {} files", report.failed()));
            lines.push(format!("  Comments removed: {}", report.comments_removed()));
        }
    }

    lines
}

fn outcome_lines(outcome: &FileOutcome, lines: &mut Vec<String>) {
    match &outcome.status {
        FileStatus::Processed { output, backup, .. } => {
            if let Some(backup) = backup {
                lines.push(format!("Backup created: {}", backup.display()));
            }
            lines.push(format!(
                "Successfully processed: {} -> {}",
                outcome.source.display(),
                output.display()
            ));
        }
        FileStatus::Failed { message } => {
            lines.push(format!(
                "Error processing {}: {}",
                outcome.source.display(),
                message
            ));
        }
    }
}

/// Write the report to `out`, as text lines or pretty JSON
pub fn write_report<W: Write>(
    out: &mut W,
    report: &BatchReport,
    extension: &str,
    json: bool,
) -> io::Result<()> {
    if json {
        let text = report
            .to_json()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(out, "{}", text)?;
    } else {
        for line in render_report(report, extension) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
