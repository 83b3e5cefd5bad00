//! Command implementations for Notemark CLI

pub mod apply;
pub mod completions;
pub mod helpers;
pub mod set;
pub mod version;
