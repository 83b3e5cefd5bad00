//! Status line formatting for stamp runs

use console::Style;

use crate::error::Result;
use crate::frontmatter::{FieldAssignment, MalformedReason, Outcome};
use crate::operations::RunSummary;

pub fn banner(title: &str, dry_run: bool) -> String {
    let title = Style::new().bold().apply_to(title);
    if dry_run {
        format!("[DRY RUN] {title}")
    } else {
        title.to_string()
    }
}

pub fn batch_heading(assignment: &FieldAssignment, files: usize) -> String {
    format!(
        "{} {} ({} {})",
        Style::new().bold().cyan().apply_to("Adding"),
        Style::new().bold().apply_to(assignment.line()),
        files,
        if files == 1 { "file" } else { "files" }
    )
}

pub fn file_status(assignment: &FieldAssignment, file: &str, result: &Result<Outcome>) -> String {
    let ok = Style::new().green().apply_to("✓");
    let warn = Style::new().yellow().apply_to("⚠");
    let fail = Style::new().red().apply_to("✗");

    match result {
        Ok(Outcome::Added) => format!("{ok} Added {} to {file}", assignment.line()),
        Ok(Outcome::WouldAdd) => format!("{ok} Would add {} to {file}", assignment.line()),
        Ok(Outcome::AlreadyPresent) => {
            format!("{warn} '{}' field already exists in {file}", assignment.field)
        }
        Ok(Outcome::NotFound) => format!("{warn} File not found: {file}"),
        Ok(Outcome::MalformedHeader(MalformedReason::MissingOpening)) => {
            format!("{fail} No YAML frontmatter in {file}")
        }
        Ok(Outcome::MalformedHeader(MalformedReason::Unterminated)) => {
            format!("{fail} Invalid YAML frontmatter in {file} (no closing ---)")
        }
        Err(e) => format!("{fail} Error processing {file}: {e}"),
    }
}

pub fn summary(summary: &RunSummary, dry_run: bool) -> String {
    let mut parts = Vec::new();
    if dry_run {
        parts.push(format!("{} would be added", summary.would_add));
    } else {
        parts.push(format!("{} added", summary.added));
    }
    for (count, label) in [
        (summary.already_present, "already present"),
        (summary.not_found, "not found"),
        (summary.malformed, "malformed"),
        (summary.failed, "failed"),
    ] {
        if count > 0 {
            parts.push(format!("{count} {label}"));
        }
    }

    format!(
        "{} {}",
        Style::new().bold().green().apply_to("Done!"),
        parts.join(", ")
    )
}
