//! Set command implementation
//!
//! Runs a single target list taken from the command line, without a manifest.

use std::path::PathBuf;

use super::helpers;
use crate::cli::SetArgs;
use crate::error::Result;
use crate::frontmatter::FieldAssignment;
use crate::operations::{StampOperation, StampOptions, TargetList};
use crate::ui::ConsoleReporter;

/// Run set command
pub fn run(base_dir: Option<PathBuf>, args: SetArgs) -> Result<()> {
    let base_dir = match base_dir {
        Some(dir) => dir,
        None => helpers::current_dir()?,
    };

    let assignment = FieldAssignment::new(args.field, args.value).with_anchor(args.anchor);
    let title = format!(
        "Adding '{}' field to {} note(s)",
        assignment.field,
        args.files.len()
    );
    let lists = [TargetList::new(assignment, args.files)];

    let operation = StampOperation::new(base_dir, StampOptions {
        dry_run: args.dry_run,
    });
    let mut reporter = ConsoleReporter::new(args.dry_run);
    operation.execute(&title, &lists, &mut reporter);

    Ok(())
}
