//! modlist CLI
//!
//! Scans a Vintage Story mods folder and writes a `modlist.json` manifest,
//! enriched with ModDB page and download links where a release matches.

mod cli_types;
mod commands;
mod error;
mod logging;
mod progress;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, ConfigAction, ScanArgs};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    let multi = match logging::init(cli.verbose, cli.quiet, cli.logfile.as_deref()) {
        Ok(multi) => multi,
        Err(e) => {
            eprintln!("Failed to open log file: {e}");
            std::process::exit(1);
        }
    };

    let result: Result<(), CliError> = match cli.command.unwrap_or_else(|| Commands::Scan(ScanArgs::default())) {
        Commands::Scan(args) => commands::scan::run_scan(args, &multi, cli.quiet),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::SetPath { path } => commands::config::run_config_set_path(path),
            ConfigAction::ClearPath => commands::config::run_config_clear_path(),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    };

    if let Err(e) = result {
        log::error!("{} {}", "\u{2718}".if_supports_color(Stdout, |t| t.red()), e);
        if let Some(hint) = e.hint() {
            log::error!("  {}", hint);
        }
        std::process::exit(1);
    }
}
