//! Idempotent insertion of one boolean field into a document's header.

use std::io;
use std::path::Path;

use tracing::debug;

use super::header::{Frontmatter, MalformedReason, unterminated_contains_key};
use crate::error::{self, Result};

/// A `field: value` line to add, optionally placed after an anchor field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAssignment {
    pub field: String,
    pub value: bool,
    pub anchor: Option<String>,
}

impl FieldAssignment {
    pub fn new(field: impl Into<String>, value: bool) -> Self {
        Self {
            field: field.into(),
            value,
            anchor: None,
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: Option<impl Into<String>>) -> Self {
        self.anchor = anchor.map(Into::into);
        self
    }

    /// The header line this assignment produces, without terminator.
    pub fn line(&self) -> String {
        format!("{}: {}", self.field, self.value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InsertOptions {
    /// Compute the edit but never write the file.
    pub dry_run: bool,
}

/// What happened to one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added,
    WouldAdd,
    AlreadyPresent,
    NotFound,
    MalformedHeader(MalformedReason),
}

/// Result of editing document text in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Inserted(String),
    AlreadyPresent,
    Malformed(MalformedReason),
}

/// Apply `assignment` to `content` without touching the filesystem.
pub fn edit_content(content: &str, assignment: &FieldAssignment) -> Edit {
    let mut frontmatter = match Frontmatter::parse(content) {
        Ok(fm) => fm,
        Err(MalformedReason::Unterminated)
            if unterminated_contains_key(content, &assignment.field) =>
        {
            return Edit::AlreadyPresent;
        }
        Err(reason) => return Edit::Malformed(reason),
    };

    if frontmatter.contains_key(&assignment.field) {
        return Edit::AlreadyPresent;
    }

    let value = assignment.value.to_string();
    let anchored = assignment
        .anchor
        .as_deref()
        .is_some_and(|anchor| frontmatter.insert_after(anchor, &assignment.field, &value));
    if !anchored {
        frontmatter.append(&assignment.field, &value);
    }
    debug!(
        field = %assignment.field,
        anchored,
        "inserted field into header"
    );

    Edit::Inserted(frontmatter.render())
}

/// Insert `assignment` into the header of the document at `path`.
///
/// The file is rewritten in place only when the field is actually added.
/// Missing files, malformed headers and already present fields are
/// outcomes; only I/O failures are errors.
pub fn insert_field(
    path: &Path,
    assignment: &FieldAssignment,
    options: InsertOptions,
) -> Result<Outcome> {
    if !path.exists() {
        debug!(path = %path.display(), "document does not exist");
        return Ok(Outcome::NotFound);
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Outcome::NotFound),
        Err(e) => {
            return Err(error::file_read_failed(
                path.display().to_string(),
                e.to_string(),
            ));
        }
    };

    match edit_content(&content, assignment) {
        Edit::Malformed(reason) => Ok(Outcome::MalformedHeader(reason)),
        Edit::AlreadyPresent => Ok(Outcome::AlreadyPresent),
        Edit::Inserted(_) if options.dry_run => Ok(Outcome::WouldAdd),
        Edit::Inserted(updated) => {
            std::fs::write(path, updated).map_err(|e| {
                error::file_write_failed(path.display().to_string(), e.to_string())
            })?;
            Ok(Outcome::Added)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotemarkError;
    use tempfile::TempDir;

    fn write_note(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_inserts_after_anchor() {
        let assignment = FieldAssignment::new("archive", true).with_anchor(Some("like"));
        let edit = edit_content("---\ntitle: x\nlike: true\n---\nbody", &assignment);
        assert_eq!(
            edit,
            Edit::Inserted("---\ntitle: x\nlike: true\narchive: true\n---\nbody".to_string())
        );
    }

    #[test]
    fn test_inserts_immediately_after_anchor_line() {
        let assignment = FieldAssignment::new("like", false).with_anchor(Some("archive"));
        let edit = edit_content(
            "---\narchive: true\nauthor: someone\n---\nbody\n",
            &assignment,
        );
        assert_eq!(
            edit,
            Edit::Inserted("---\narchive: true\nlike: false\nauthor: someone\n---\nbody\n".into())
        );
    }

    #[test]
    fn test_appends_without_anchor() {
        let assignment = FieldAssignment::new("like", true).with_anchor(Some("archive"));
        let edit = edit_content("---\ntitle: x\nplatform: x.com\n---\nbody", &assignment);
        assert_eq!(
            edit,
            Edit::Inserted("---\ntitle: x\nplatform: x.com\nlike: true\n---\nbody".into())
        );
    }

    #[test]
    fn test_anchor_must_match_whole_key() {
        let assignment = FieldAssignment::new("archive", true).with_anchor(Some("like"));
        let edit = edit_content("---\nunlike: 1\ntitle: x\n---\n", &assignment);
        assert_eq!(
            edit,
            Edit::Inserted("---\nunlike: 1\ntitle: x\narchive: true\n---\n".into())
        );
    }

    #[test]
    fn test_existing_field_is_left_alone() {
        let assignment = FieldAssignment::new("like", true);
        let edit = edit_content("---\nlike: false\n---\nbody", &assignment);
        assert_eq!(edit, Edit::AlreadyPresent);
    }

    #[test]
    fn test_malformed_content() {
        let assignment = FieldAssignment::new("like", true);
        assert_eq!(
            edit_content("# Just a note\n", &assignment),
            Edit::Malformed(MalformedReason::MissingOpening)
        );
        assert_eq!(
            edit_content("---\ntitle: x\n", &assignment),
            Edit::Malformed(MalformedReason::Unterminated)
        );
    }

    #[test]
    fn test_inserts_before_comment_after_anchor() {
        let assignment = FieldAssignment::new("like", false).with_anchor(Some("archive"));
        for (input, expected) in [
            (
                "---\narchive: true\n# meta\nauthor: x\n---\nbody",
                "---\narchive: true\nlike: false\n# meta\nauthor: x\n---\nbody",
            ),
            (
                "---\narchive: true\n\nauthor: x\n---\nbody",
                "---\narchive: true\nlike: false\n\nauthor: x\n---\nbody",
            ),
        ] {
            assert_eq!(edit_content(input, &assignment), Edit::Inserted(expected.into()));
        }
    }

    #[test]
    fn test_existing_field_wins_over_unterminated_header() {
        let like = FieldAssignment::new("like", true);
        assert_eq!(edit_content("---\nlike: true\nbody", &like), Edit::AlreadyPresent);

        let archive = FieldAssignment::new("archive", true);
        assert_eq!(
            edit_content("---\nlike: true\nbody", &archive),
            Edit::Malformed(MalformedReason::Unterminated)
        );
    }

    #[test]
    fn test_insert_field_writes_once() {
        let dir = TempDir::new().unwrap();
        let path = write_note(&dir, "note.md", "---\ntitle: x\n---\nbody\n");
        let assignment = FieldAssignment::new("archive", true);

        let first = insert_field(&path, &assignment, InsertOptions::default()).unwrap();
        assert_eq!(first, Outcome::Added);
        let after_first = std::fs::read_to_string(&path).unwrap();
        assert_eq!(after_first, "---\ntitle: x\narchive: true\n---\nbody\n");

        let second = insert_field(&path, &assignment, InsertOptions::default()).unwrap();
        assert_eq!(second, Outcome::AlreadyPresent);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), after_first);
    }

    #[test]
    fn test_insert_field_dry_run_does_not_write() {
        let dir = TempDir::new().unwrap();
        let original = "---\ntitle: x\n---\nbody\n";
        let path = write_note(&dir, "note.md", original);
        let assignment = FieldAssignment::new("like", false);

        let outcome = insert_field(&path, &assignment, InsertOptions { dry_run: true }).unwrap();
        assert_eq!(outcome, Outcome::WouldAdd);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_insert_field_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.md");
        let outcome =
            insert_field(&path, &FieldAssignment::new("like", true), InsertOptions::default())
                .unwrap();
        assert_eq!(outcome, Outcome::NotFound);
        assert!(!path.exists());
    }

    #[test]
    fn test_insert_field_malformed_file_untouched() {
        let dir = TempDir::new().unwrap();
        let original = "no frontmatter here\n";
        let path = write_note(&dir, "plain.md", original);
        let outcome =
            insert_field(&path, &FieldAssignment::new("like", true), InsertOptions::default())
                .unwrap();
        assert_eq!(
            outcome,
            Outcome::MalformedHeader(MalformedReason::MissingOpening)
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_insert_field_non_utf8_is_read_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.md");
        std::fs::write(&path, [0x2d, 0x2d, 0x2d, 0x0a, 0xff, 0xfe, 0x0a]).unwrap();
        let result =
            insert_field(&path, &FieldAssignment::new("like", true), InsertOptions::default());
        assert!(matches!(
            result,
            Err(NotemarkError::FileReadFailed { .. })
        ));
    }
}
