use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use modlist_lib::settings;
use modlist_moddb::CatalogEndpoints;

use crate::error::CliError;

fn file_status(label: &str, path: &Path) {
    let status = if path.exists() {
        format!("{}", "(exists)".if_supports_color(Stdout, |t| t.green()))
    } else {
        format!("{}", "(not found)".if_supports_color(Stdout, |t| t.dimmed()))
    };
    log::info!(
        "  {}: {} {}",
        label,
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status,
    );
}

/// Show the resolved mods folder and catalog endpoints, and where they come from.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let cwd = std::env::current_dir()?;

    log::info!("{}", "Modlist Configuration".if_supports_color(Stdout, |t| t.bold()));
    log::info!("");
    file_status("Project config", &settings::project_config_path(&cwd));
    file_status("Settings file", &settings::settings_path());
    log::info!("");

    match settings::resolve_mods_dir(None, &cwd) {
        Ok(dir) => {
            let marker = if dir.is_dir() {
                format!("{}", "\u{2714}".if_supports_color(Stdout, |t| t.green()))
            } else {
                format!("{}", "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()))
            };
            log::info!("  {} Mods folder: {}", marker, dir.display());
        }
        Err(e) => {
            log::warn!(
                "  {} Mods folder: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
        }
    }

    let overrides = settings::load_catalog_overrides(&cwd)?;
    let endpoints = CatalogEndpoints::default().with_overrides(&overrides);
    log::info!("  ModDB API:      {}", endpoints.api_base);
    log::info!("  ModDB pages:    {}", endpoints.page_base);
    log::info!("  Download host:  {}", endpoints.download_base);

    if let Some(contents) = settings::load_settings_string() {
        log::info!("");
        log::info!("{}", "settings.toml".if_supports_color(Stdout, |t| t.bold()));
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }
    Ok(())
}

/// Save the mods folder to the user settings file.
pub(crate) fn run_config_set_path(path: PathBuf) -> Result<(), CliError> {
    let path = std::env::current_dir()?.join(path);
    if !path.is_dir() {
        log::warn!(
            "{} '{}' is not an existing directory; saving anyway",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            path.display(),
        );
    }
    settings::save_mods_path(Some(&path))?;
    log::info!(
        "{} Mods folder saved: {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display(),
    );
    Ok(())
}

/// Remove the saved mods folder.
pub(crate) fn run_config_clear_path() -> Result<(), CliError> {
    settings::save_mods_path(None)?;
    log::info!(
        "{} Saved mods folder cleared",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}
