//! Manifest errors

use super::NotemarkError;

/// Creates a manifest not found error
pub fn not_found(path: impl Into<String>) -> NotemarkError {
    NotemarkError::ConfigNotFound { path: path.into() }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> NotemarkError {
    NotemarkError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid manifest error
pub fn invalid(message: impl Into<String>) -> NotemarkError {
    NotemarkError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a manifest read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> NotemarkError {
    NotemarkError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
