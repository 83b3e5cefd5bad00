//! Apply command implementation
//!
//! Loads the manifest and runs its batches, either all of them (`apply`) or
//! those for one field (`apply --field`, `archive`, `like`).

use std::path::PathBuf;

use tracing::debug;

use super::helpers;
use crate::cli::{ApplyArgs, PresetArgs};
use crate::config::Manifest;
use crate::error::Result;
use crate::operations::{StampOperation, StampOptions, TargetList};
use crate::ui::ConsoleReporter;

/// A field with a dedicated command and the anchor used when a batch
/// names none
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub field: &'static str,
    pub anchor: &'static str,
}

pub const ARCHIVE: Preset = Preset {
    field: "archive",
    anchor: "like",
};

pub const LIKE: Preset = Preset {
    field: "like",
    anchor: "archive",
};

const PRESETS: &[Preset] = &[ARCHIVE, LIKE];

/// Anchor used for `field` when a batch does not name one
pub fn default_anchor(field: &str) -> Option<&'static str> {
    PRESETS.iter().find(|p| p.field == field).map(|p| p.anchor)
}

/// Run apply command
pub fn run(manifest: Option<PathBuf>, base_dir: Option<PathBuf>, args: ApplyArgs) -> Result<()> {
    execute(manifest, base_dir, args.field.as_deref(), args.dry_run)
}

/// Run the archive or like command
pub fn run_preset(
    manifest: Option<PathBuf>,
    base_dir: Option<PathBuf>,
    preset: Preset,
    args: PresetArgs,
) -> Result<()> {
    execute(manifest, base_dir, Some(preset.field), args.dry_run)
}

fn execute(
    manifest: Option<PathBuf>,
    base_dir: Option<PathBuf>,
    field: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let manifest_path = helpers::resolve_manifest_path(manifest)?;
    let manifest = Manifest::load(&manifest_path)?;
    let base_dir =
        base_dir.unwrap_or_else(|| manifest.resolve_base_dir(helpers::manifest_dir(&manifest_path)));
    debug!(base_dir = %base_dir.display(), "resolved base directory");

    let lists = target_lists(&manifest, field);
    if lists.is_empty() {
        match field {
            Some(field) => println!(
                "No '{field}' batches in {}.",
                manifest_path.display()
            ),
            None => println!("No batches in {}.", manifest_path.display()),
        }
        return Ok(());
    }

    let title = match field {
        Some(field) => format!("Adding '{field}' field to notes in {}", base_dir.display()),
        None => format!(
            "Applying {} batch(es) to notes in {}",
            lists.len(),
            base_dir.display()
        ),
    };

    let operation = StampOperation::new(base_dir, StampOptions { dry_run });
    let mut reporter = ConsoleReporter::new(dry_run);
    operation.execute(&title, &lists, &mut reporter);

    Ok(())
}

/// Target lists for `field` (or all fields), in manifest order
fn target_lists(manifest: &Manifest, field: Option<&str>) -> Vec<TargetList> {
    manifest
        .batches_for(field)
        .map(|batch| TargetList::from_batch(batch, default_anchor(&batch.field)))
        .collect()
}
