//! Operations module
//!
//! High-level operations that the commands coordinate:
//! - StampOperation: insert a field into every note of a set of target lists
//!
//! Output goes through the `ui::RunReporter` trait.

pub mod stamp;

pub use stamp::{RunSummary, StampOperation, StampOptions, TargetList};
