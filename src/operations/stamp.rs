//! Stamp operation module
//!
//! Runs target lists through the frontmatter inserter, one note at a time,
//! in declaration order. A failure on one note never stops the run.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::Batch;
use crate::error::Result;
use crate::frontmatter::{FieldAssignment, InsertOptions, Outcome, insert_field};
use crate::ui::RunReporter;

/// Configuration options for a stamp run
#[derive(Debug, Clone, Copy, Default)]
pub struct StampOptions {
    pub dry_run: bool,
}

/// Notes that all receive the same field assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetList {
    pub assignment: FieldAssignment,
    pub files: Vec<String>,
}

impl TargetList {
    pub fn new(assignment: FieldAssignment, files: Vec<String>) -> Self {
        Self { assignment, files }
    }

    /// Build from a manifest batch, using `default_anchor` when the batch
    /// names no anchor.
    pub fn from_batch(batch: &Batch, default_anchor: Option<&str>) -> Self {
        Self::new(batch.assignment(default_anchor), batch.files.clone())
    }
}

/// Per-outcome counts for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub added: usize,
    pub would_add: usize,
    pub already_present: usize,
    pub not_found: usize,
    pub malformed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &Result<Outcome>) {
        match result {
            Ok(Outcome::Added) => self.added += 1,
            Ok(Outcome::WouldAdd) => self.would_add += 1,
            Ok(Outcome::AlreadyPresent) => self.already_present += 1,
            Ok(Outcome::NotFound) => self.not_found += 1,
            Ok(Outcome::MalformedHeader(_)) => self.malformed += 1,
            Err(_) => self.failed += 1,
        }
    }

    /// Number of notes processed
    pub fn total(&self) -> usize {
        self.added
            + self.would_add
            + self.already_present
            + self.not_found
            + self.malformed
            + self.failed
    }
}

/// High-level stamp operation
pub struct StampOperation {
    base_dir: PathBuf,
    options: StampOptions,
}

impl StampOperation {
    pub fn new(base_dir: impl Into<PathBuf>, options: StampOptions) -> Self {
        Self {
            base_dir: base_dir.into(),
            options,
        }
    }

    /// Process every list in order and report each note as it finishes
    pub fn execute(
        &self,
        title: &str,
        lists: &[TargetList],
        reporter: &mut dyn RunReporter,
    ) -> RunSummary {
        let insert_options = InsertOptions {
            dry_run: self.options.dry_run,
        };
        let mut summary = RunSummary::default();

        reporter.run_started(title);
        for list in lists {
            info!(
                field = %list.assignment.field,
                value = list.assignment.value,
                files = list.files.len(),
                "processing target list"
            );
            reporter.batch_started(&list.assignment, list.files.len());

            for file in &list.files {
                let path = self.base_dir.join(file);
                debug!(path = %path.display(), "processing note");
                let result = insert_field(&path, &list.assignment, insert_options);
                summary.record(&result);
                reporter.file_finished(&list.assignment, file, &result);
            }
        }
        reporter.run_finished(&summary);

        summary
    }
}
