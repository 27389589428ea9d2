//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "modlist")]
#[command(
    about = "Generate a modlist.json manifest from a Vintage Story mods folder",
    long_about = None,
    version
)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Defaults to `scan` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Arguments for the scan command.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct ScanArgs {
    /// Mods folder to scan (overrides config.toml and saved settings)
    #[arg(short, long)]
    pub mods_dir: Option<PathBuf>,

    /// Where to write the manifest (default: ./modlist.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of concurrent workers (default: available CPU cores)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Skip ModDB lookups; every mod is listed as local only
    #[arg(long)]
    pub offline: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Scan the mods folder and write modlist.json
    Scan(ScanArgs),

    /// Manage the saved mods folder setting
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved configuration and where each value comes from
    Show,

    /// Save the mods folder to the user settings file
    SetPath {
        /// Path to the Vintage Story Mods folder
        path: PathBuf,
    },

    /// Remove the saved mods folder
    ClearPath,

    /// Print the user settings file path
    Path,
}
