//! Markdown frontmatter handling.

pub mod header;
pub mod inserter;

pub use header::MalformedReason;
pub use inserter::{FieldAssignment, InsertOptions, Outcome, insert_field};
