use indicatif::MultiProgress;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use modlist_lib::async_util::run_with_events;
use modlist_lib::manifest::write_manifest;
use modlist_lib::util::{count_noun, default_manifest_path, default_worker_count, display_file_name};
use modlist_lib::{ScanReport, scanner, settings};
use modlist_moddb::{CatalogEndpoints, ModDbClient};

use crate::cli_types::ScanArgs;
use crate::error::CliError;
use crate::progress::ScanProgress;

/// Run the scan command: resolve the folder, reconcile every mod, write the manifest.
pub(crate) fn run_scan(args: ScanArgs, multi: &MultiProgress, quiet: bool) -> Result<(), CliError> {
    let cwd = std::env::current_dir()?;
    let mods_dir = settings::resolve_mods_dir(args.mods_dir, &cwd)?;
    scanner::validate_mods_dir(&mods_dir)?;

    let client = if args.offline {
        log::info!(
            "{} Offline: ModDB lookups skipped",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
        );
        None
    } else {
        let overrides = settings::load_catalog_overrides(&cwd)?;
        if !overrides.is_empty() {
            log::debug!("Catalog overrides: {:?}", overrides);
        }
        Some(ModDbClient::new(
            CatalogEndpoints::default().with_overrides(&overrides),
        )?)
    };
    let workers = args.threads.unwrap_or_else(default_worker_count).max(1);

    log::info!(
        "Scanning mods in: {}",
        mods_dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create async runtime: {e}")))?;

    let progress = ScanProgress::new(multi, quiet);
    let (event_tx, event_rx) = tokio::sync::mpsc::unbounded_channel();
    let result = rt.block_on(run_with_events(
        modlist_moddb::scan_mods(client, &mods_dir, workers, event_tx),
        event_rx,
        |e| progress.handle(&e),
    ));
    progress.finish();
    let report = result?;

    let output = args
        .output
        .map(|p| cwd.join(p))
        .unwrap_or_else(|| default_manifest_path(&cwd));
    write_manifest(&output, &report.manifest)?;
    log::info!(
        "{} {} has been created successfully.",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        output.display(),
    );

    print_summary(&report);
    print_invalid_files(&report);

    log::info!("Done. The {} file has been generated.", display_file_name(&output));
    Ok(())
}

fn print_summary(report: &ScanReport) {
    let stats = &report.stats;
    log::info!(
        "  {} {} listed ({} matched on ModDB, {} local only)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        count_noun(stats.resolved, "mod", "mods"),
        stats.matched,
        stats.local_only,
    );
    if stats.invalid > 0 {
        log::warn!(
            "  {} {} skipped",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            count_noun(stats.invalid, "file", "files"),
        );
    }
}

fn print_invalid_files(report: &ScanReport) {
    if report.invalid_files.is_empty() {
        log::info!("No invalid or corrupted files.");
        return;
    }
    log::warn!("Invalid or corrupted files:");
    for file in &report.invalid_files {
        log::warn!("- {}", file);
    }
}

