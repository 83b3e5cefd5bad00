//! UI presentation layer
//!
//! All run output goes through the [`RunReporter`] trait so the stamp
//! operation does not print directly. [`ConsoleReporter`] writes the styled
//! human-readable report to stdout.

pub mod display;

use crate::error::Result;
use crate::frontmatter::{FieldAssignment, Outcome};
use crate::operations::RunSummary;

/// Receives progress events from a stamp run
pub trait RunReporter {
    /// Banner before anything is processed
    fn run_started(&mut self, title: &str);

    /// A target list is about to be processed
    fn batch_started(&mut self, assignment: &FieldAssignment, files: usize);

    /// One note has been processed
    fn file_finished(&mut self, assignment: &FieldAssignment, file: &str, result: &Result<Outcome>);

    /// Completion message
    fn run_finished(&mut self, summary: &RunSummary);
}

/// Reporter printing status lines to stdout
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    dry_run: bool,
}

impl ConsoleReporter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }
}

impl RunReporter for ConsoleReporter {
    fn run_started(&mut self, title: &str) {
        println!("{}", display::banner(title, self.dry_run));
        println!();
    }

    fn batch_started(&mut self, assignment: &FieldAssignment, files: usize) {
        println!("{}", display::batch_heading(assignment, files));
    }

    fn file_finished(&mut self, assignment: &FieldAssignment, file: &str, result: &Result<Outcome>) {
        println!("  {}", display::file_status(assignment, file, result));
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        println!();
        println!("{}", display::summary(summary, self.dry_run));
    }
}
