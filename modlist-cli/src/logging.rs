//! Logger setup: console output through `log`, optional plain-text logfile.
//!
//! All user-facing output goes through `log::info!`/`log::warn!`, so
//! `--quiet` and `--logfile` apply to it uniformly. Writes are routed
//! through the shared `MultiProgress` so progress bars are not torn.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use indicatif::MultiProgress;
use log::LevelFilter;

/// Console writer that suspends progress bars while writing and tees
/// each line, ANSI-stripped, into the logfile.
struct ConsoleWriter {
    multi: MultiProgress,
    logfile: Option<File>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.multi.suspend(|| io::stdout().write_all(buf))?;
        if let Some(file) = self.logfile.as_mut() {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        if let Some(file) = self.logfile.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger and return the `MultiProgress` that progress
/// bars must be added to.
///
/// Only this workspace's crates log below `warn`; `RUST_LOG` can still
/// override per module.
pub(crate) fn init(verbose: bool, quiet: bool, logfile: Option<&Path>) -> io::Result<MultiProgress> {
    let multi = MultiProgress::new();
    let logfile = logfile.map(File::create).transpose()?;

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("modlist", level_for(verbose, quiet))
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(ConsoleWriter {
            multi: multi.clone(),
            logfile,
        })));

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    // A second init (tests) keeps the first logger
    let _ = builder.try_init();
    Ok(multi)
}
