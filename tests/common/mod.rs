//! Common test utilities for Notemark integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary vault of notes for integration tests
pub struct TestVault {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to vault root
    pub path: PathBuf,
}

impl TestVault {
    /// Create a new empty vault
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the vault, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write notemark.yaml at the vault root
    #[allow(dead_code)]
    pub fn write_manifest(&self, yaml: &str) {
        self.write_file("notemark.yaml", yaml);
    }

    /// Read a file from the vault
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the vault
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestVault {
    fn default() -> Self {
        Self::new()
    }
}

/// The notemark binary with developer environment overrides removed
#[allow(deprecated)]
pub fn notemark_cmd() -> Command {
    let mut cmd = Command::cargo_bin("notemark").expect("notemark binary should be built");
    cmd.env_remove("NOTEMARK_MANIFEST");
    cmd.env_remove("NOTEMARK_BASE_DIR");
    cmd.env_remove("NOTEMARK_LOG");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_file_operations() {
        let vault = TestVault::new();
        vault.write_file("X/2025/10/note.md", "hello");
        assert!(vault.file_exists("X/2025/10/note.md"));
        assert_eq!(vault.read_file("X/2025/10/note.md"), "hello");
    }
}
