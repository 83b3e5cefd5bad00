//! Configuration for Notemark
//!
//! - [`manifest`]: notemark.yaml, the list of notes to stamp per field

pub mod manifest;

pub use manifest::{Batch, MANIFEST_FILE, Manifest, validate_field_name};
