//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - apply: apply, archive and like command arguments
//! - set: set command arguments
//! - completions: completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod apply;
pub mod completions;
pub mod set;

pub use apply::{ApplyArgs, PresetArgs};
pub use completions::CompletionsArgs;
pub use set::SetArgs;

/// Notemark - frontmatter field stamper
///
/// Insert boolean fields into the YAML frontmatter of Markdown notes.
#[derive(Parser, Debug)]
#[command(
    name = "notemark",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Stamp boolean fields into Markdown frontmatter",
    long_about = "Notemark inserts a `field: true|false` line into the YAML frontmatter of \
                  Markdown notes listed in a manifest. Notes that already carry the field \
                  are left untouched, so runs can be repeated safely.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  notemark apply                          \x1b[90m# Run every batch in notemark.yaml\x1b[0m\n   \
                  notemark archive --dry-run              \x1b[90m# Preview the archive batches\x1b[0m\n   \
                  notemark like -m ~/vault/notemark.yaml  \x1b[90m# Run the like batches of another manifest\x1b[0m\n   \
                  notemark set pinned true notes/a.md     \x1b[90m# Ad-hoc: add pinned: true to one note\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Manifest listing the notes to stamp (defaults to ./notemark.yaml)
    #[arg(long, short = 'm', global = true, env = "NOTEMARK_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Directory note paths are relative to (overrides the manifest's base_dir)
    #[arg(long, short = 'b', global = true, env = "NOTEMARK_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run manifest batches
    Apply(ApplyArgs),

    /// Run the manifest's archive batches (placed after `like` by default)
    Archive(PresetArgs),

    /// Run the manifest's like batches (placed after `archive` by default)
    Like(PresetArgs),

    /// Add a field to notes given on the command line
    Set(SetArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_apply() {
        let cli = Cli::try_parse_from(["notemark", "apply"]).unwrap();
        match cli.command {
            Commands::Apply(args) => {
                assert_eq!(args.field, None);
                assert!(!args.dry_run);
            }
            _ => panic!("Expected Apply command"),
        }
    }

    #[test]
    fn test_cli_parsing_presets() {
        let cli = Cli::try_parse_from(["notemark", "archive", "--dry-run"]).unwrap();
        assert!(matches!(cli.command, Commands::Archive(PresetArgs { dry_run: true })));

        let cli = Cli::try_parse_from(["notemark", "like"]).unwrap();
        assert!(matches!(cli.command, Commands::Like(PresetArgs { dry_run: false })));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["notemark", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from([
            "notemark",
            "-v",
            "-m",
            "/tmp/notes/notemark.yaml",
            "apply",
            "-b",
            "/tmp/notes",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(
            cli.manifest,
            Some(PathBuf::from("/tmp/notes/notemark.yaml"))
        );
        assert_eq!(cli.base_dir, Some(PathBuf::from("/tmp/notes")));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["notemark"]).is_err());
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["notemark", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
