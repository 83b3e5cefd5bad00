//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::config::MANIFEST_FILE;
use crate::error::{Result, io_error};

/// Current working directory as a notemark error
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| io_error(format!("Failed to get current directory: {e}")))
}

/// Resolve manifest path from optional argument
///
/// If a manifest path is provided, use it. Otherwise, look for
/// `notemark.yaml` in the current directory.
pub fn resolve_manifest_path(manifest: Option<PathBuf>) -> Result<PathBuf> {
    match manifest {
        Some(path) => Ok(path),
        None => Ok(current_dir()?.join(MANIFEST_FILE)),
    }
}

/// Directory containing the manifest, used to resolve relative base dirs
pub fn manifest_dir(manifest_path: &Path) -> &Path {
    match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_manifest_path_explicit() {
        let path = resolve_manifest_path(Some(PathBuf::from("/vault/notes.yaml"))).unwrap();
        assert_eq!(path, PathBuf::from("/vault/notes.yaml"));
    }

    #[test]
    fn test_resolve_manifest_path_default() {
        let path = resolve_manifest_path(None).unwrap();
        assert!(path.ends_with(MANIFEST_FILE));
        assert!(path.is_absolute());
    }

    #[test]
    fn test_manifest_dir() {
        assert_eq!(
            manifest_dir(Path::new("/vault/notemark.yaml")),
            Path::new("/vault")
        );
        assert_eq!(manifest_dir(Path::new("notemark.yaml")), Path::new("."));
    }
}
