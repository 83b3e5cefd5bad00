//! Manifest (notemark.yaml) data structures
//!
//! The manifest lists which notes get which field, replacing per-field
//! scripts with hardcoded file lists.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{self, NotemarkError, Result};
use crate::frontmatter::FieldAssignment;

/// Default manifest file name, looked up in the current directory.
pub const MANIFEST_FILE: &str = "notemark.yaml";

/// Manifest (notemark.yaml)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Directory the note paths are relative to. Relative values resolve
    /// against the manifest's own directory; `~/` expands to the home dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,

    /// Target lists, processed in declaration order
    #[serde(default)]
    pub batches: Vec<Batch>,
}

/// One target list: a field assignment applied to an ordered list of notes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Batch {
    /// Header key to insert (e.g. "archive", "like")
    pub field: String,

    /// Value to insert
    pub value: bool,

    /// Existing key after which the field is placed, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,

    /// Note paths, relative to the base directory or absolute
    #[serde(default)]
    pub files: Vec<String>,
}

impl Batch {
    /// Field assignment for this batch, falling back to `default_anchor` when
    /// the batch names none.
    pub fn assignment(&self, default_anchor: Option<&str>) -> FieldAssignment {
        FieldAssignment::new(&self.field, self.value)
            .with_anchor(self.anchor.as_deref().or(default_anchor))
    }
}

impl Manifest {
    /// Parse manifest from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(yaml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load and validate the manifest at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let shown = path.display().to_string();
        if !path.is_file() {
            return Err(error::config_not_found(shown));
        }

        let yaml = std::fs::read_to_string(path)
            .map_err(|e| error::config_read_failed(&shown, e.to_string()))?;
        let manifest = Self::from_yaml(&yaml).map_err(|e| match e {
            NotemarkError::ConfigParseFailed { reason, .. } => {
                error::config_parse_failed(&shown, reason)
            }
            other => other,
        })?;

        tracing::debug!(
            manifest = %shown,
            batches = manifest.batches.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    /// Serialize manifest to YAML string
    #[cfg(test)]
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check field and anchor names of every batch
    pub fn validate(&self) -> Result<()> {
        for (idx, batch) in self.batches.iter().enumerate() {
            let n = idx + 1;
            validate_field_name(&batch.field)
                .map_err(|reason| error::config_invalid(format!("batch {n}: field {reason}")))?;
            if let Some(anchor) = &batch.anchor {
                validate_field_name(anchor).map_err(|reason| {
                    error::config_invalid(format!("batch {n}: anchor {reason}"))
                })?;
                if anchor == &batch.field {
                    return Err(error::config_invalid(format!(
                        "batch {n}: anchor '{anchor}' is the field itself"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Batches for `field` (all batches when `None`), in declaration order
    pub fn batches_for<'a>(&'a self, field: Option<&'a str>) -> impl Iterator<Item = &'a Batch> {
        self.batches
            .iter()
            .filter(move |b| field.is_none_or(|f| b.field == f))
    }

    /// Resolve the directory note paths are joined onto
    pub fn resolve_base_dir(&self, manifest_dir: &Path) -> PathBuf {
        match self.base_dir.as_deref() {
            Some(dir) => {
                let expanded = expand_home(dir);
                if expanded.is_absolute() {
                    expanded
                } else {
                    manifest_dir.join(expanded)
                }
            }
            None => manifest_dir.to_path_buf(),
        }
    }
}

/// Check that `name` can be written as a top-level `name: value` line.
///
/// Returns the reason as a phrase ("must not be empty", ...) on failure.
pub fn validate_field_name(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("must not be empty".to_string());
    }
    if name.trim() != name {
        return Err(format!("'{name}' must not have surrounding whitespace"));
    }
    if name.contains(['\n', '\r']) {
        return Err(format!("'{}' must be a single line", name.escape_debug()));
    }
    if name.contains(':') {
        return Err(format!("'{name}' must not contain ':'"));
    }
    if name.starts_with(['#', '-', '"', '\'']) {
        return Err(format!("'{name}' must not start with '{}'", &name[..1]));
    }
    Ok(())
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
