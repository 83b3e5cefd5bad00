//! Error types and handling for Notemark
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Per-file problems during a run (missing note, malformed header, field
//! already present) are not errors: they are [`crate::frontmatter::Outcome`]s.
//! This type covers run-level failures and I/O failures on a single note.
//!
//! - [`config`]: Manifest errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;

#[allow(unused_imports)]
pub use config::{
    invalid as config_invalid, not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
#[allow(unused_imports)]
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Notemark operations
#[derive(Error, Diagnostic, Debug)]
pub enum NotemarkError {
    // Configuration errors
    #[error("Manifest not found: {path}")]
    #[diagnostic(
        code(notemark::config::not_found),
        help("Create a notemark.yaml or pass --manifest <PATH>")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read manifest: {path}: {reason}")]
    #[diagnostic(code(notemark::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse manifest: {path}: {reason}")]
    #[diagnostic(code(notemark::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid manifest: {message}")]
    #[diagnostic(
        code(notemark::config::invalid),
        help("Field names must be non-empty, single-line and must not contain ':'")
    )]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(notemark::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(notemark::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(notemark::fs::io_error))]
    IoError { message: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(notemark::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl From<std::io::Error> for NotemarkError {
    fn from(err: std::io::Error) -> Self {
        NotemarkError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for NotemarkError {
    fn from(err: serde_yaml::Error) -> Self {
        NotemarkError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, NotemarkError>;
