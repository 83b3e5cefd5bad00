use clap::{ArgAction, Parser};

use crate::config::validate_field_name;

/// Arguments for the set command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Mark two notes as liked:\n    notemark set like true X/a.md X/b.md\n\n\
                  Place the field after an existing key:\n    notemark set archive true X/a.md --anchor like\n\n\
                  Resolve paths against a vault:\n    notemark set like false a.md -b ~/vault")]
pub struct SetArgs {
    /// Header key to insert
    #[arg(value_parser = parse_field_name)]
    pub field: String,

    /// Value to insert (true or false)
    #[arg(action = ArgAction::Set, value_parser = clap::value_parser!(bool))]
    pub value: bool,

    /// Notes to update, relative to the base directory (or absolute)
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<String>,

    /// Place the field right after this key when the note has it
    #[arg(long, short = 'a', value_name = "FIELD", value_parser = parse_field_name)]
    pub anchor: Option<String>,

    /// Show what would be added without writing any note
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_field_name(name: &str) -> Result<String, String> {
    validate_field_name(name).map(|()| name.to_string())
}
