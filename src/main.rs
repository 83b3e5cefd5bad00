//! Notemark - frontmatter field stamper
//!
//! Inserts boolean fields such as `archive` and `like` into the YAML
//! frontmatter of Markdown notes, leaving notes that already have the field
//! untouched.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod frontmatter;
mod logging;
mod operations;
mod ui;

use cli::{Cli, Commands};
use commands::apply::{ARCHIVE, LIKE};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    let result = match cli.command {
        Commands::Apply(args) => commands::apply::run(cli.manifest, cli.base_dir, args),
        Commands::Archive(args) => {
            commands::apply::run_preset(cli.manifest, cli.base_dir, ARCHIVE, args)
        }
        Commands::Like(args) => commands::apply::run_preset(cli.manifest, cli.base_dir, LIKE, args),
        Commands::Set(args) => commands::set::run(cli.base_dir, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
