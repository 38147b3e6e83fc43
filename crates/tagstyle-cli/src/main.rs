//! tagstyle CLI
//!
//! Command-line host for resolving and editing tag styles stored in a JSON
//! settings file.

mod cli;
mod commands;
mod context;
mod error;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Warnings (e.g. repaired settings) always reach stderr; debug only with -v
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(cli.verbose)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("{} tracing already initialized", "warning:".yellow().bold());
    }
    tracing::debug!("Verbose mode enabled");

    let Some(command) = cli.command else {
        println!("{} Tag style manager", "tagstyle".green().bold());
        println!();
        println!("Run {} for available commands.", "tagstyle --help".cyan());
        return Ok(());
    };

    let settings = context::resolve_settings_path(cli.settings.as_deref())?;
    tracing::debug!(settings = %settings.display(), "Using settings file");
    execute_command(&settings, command)
}

fn execute_command(settings: &Path, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve {
            tags,
            full_path,
            json,
        } => commands::run_resolve(settings, &tags, full_path, json),
        Commands::List { json } => commands::run_list(settings, json),
        Commands::Set { tag, style } => commands::run_set(settings, &tag, &style),
        Commands::Add { tag, style } => commands::run_add(settings, &tag, &style),
        Commands::Rename { from, to, style } => commands::run_rename(settings, &from, &to, &style),
        Commands::Duplicate { tag } => commands::run_duplicate(settings, &tag),
        Commands::Delete { tag } => commands::run_delete(settings, &tag),
        Commands::Copy { from, to } => commands::run_copy(settings, &from, &to),
        Commands::Default { style } => commands::run_default(settings, &style),
    }
}
