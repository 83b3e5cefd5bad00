use clap::Parser;

/// Arguments for the apply command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run every batch in ./notemark.yaml:\n    notemark apply\n\n\
                  Run only the batches for one field:\n    notemark apply --field like\n\n\
                  Preview without writing:\n    notemark apply --dry-run")]
pub struct ApplyArgs {
    /// Only run batches for this field
    #[arg(long, short = 'f', value_name = "FIELD")]
    pub field: Option<String>,

    /// Show what would be added without writing any note
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the archive and like commands
#[derive(Parser, Debug)]
pub struct PresetArgs {
    /// Show what would be added without writing any note
    #[arg(long)]
    pub dry_run: bool,
}
