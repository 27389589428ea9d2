//! Configuration: where the mods folder is and which catalog to talk to.
//!
//! Two TOML files are consulted. A `config.toml` in the working directory
//! travels with a modpack checkout; the user settings file at
//! `~/.config/modlist/settings.toml` is managed by `modlist config`.
//! Both use the same layout:
//!
//! ```toml
//! [ModPath]
//! path = "/home/me/.config/VintagestoryData/Mods"
//!
//! [catalog]
//! api_base = "https://mods.vintagestory.at/api/mod/"
//! ```

use std::path::{Path, PathBuf};

use crate::error::SettingsError;

/// Per-directory config file name.
pub const PROJECT_CONFIG_FILE: &str = "config.toml";

const MOD_PATH_TABLE: &str = "ModPath";
const MOD_PATH_KEY: &str = "path";
const CATALOG_TABLE: &str = "catalog";

/// Canonical path to the user settings file: `~/.config/modlist/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("modlist").join("settings.toml")
}

/// Path of the per-directory config file under `cwd`.
pub fn project_config_path(cwd: &Path) -> PathBuf {
    cwd.join(PROJECT_CONFIG_FILE)
}

/// Resolve the mods directory using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `[ModPath] path` in `config.toml` under `cwd`
/// 3. `[ModPath] path` in the user settings file
///
/// Relative paths are taken relative to `cwd`. Nothing configured is an
/// error; the scan never guesses a folder.
pub fn resolve_mods_dir(cli_override: Option<PathBuf>, cwd: &Path) -> Result<PathBuf, SettingsError> {
    resolve_mods_dir_in(cli_override, cwd, &settings_path())
}

fn resolve_mods_dir_in(
    cli_override: Option<PathBuf>,
    cwd: &Path,
    user_settings: &Path,
) -> Result<PathBuf, SettingsError> {
    if let Some(p) = cli_override {
        return Ok(cwd.join(p));
    }

    let sources = [project_config_path(cwd), user_settings.to_path_buf()];
    for source in &sources {
        let Some(doc) = read_doc(source)? else {
            continue;
        };
        if let Some(p) = mods_path_in(&doc) {
            log::debug!("Mods directory from {}: {}", source.display(), p.display());
            return Ok(cwd.join(p));
        }
    }
    Err(SettingsError::NoModsDir(sources.to_vec()))
}

/// Read a TOML document. A missing file is `Ok(None)`; a file that exists
/// but does not parse is an error rather than silently ignored.
fn read_doc(path: &Path) -> Result<Option<toml::Value>, SettingsError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    contents
        .parse::<toml::Value>()
        .map(Some)
        .map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

fn mods_path_in(doc: &toml::Value) -> Option<PathBuf> {
    let path = doc.get(MOD_PATH_TABLE)?.get(MOD_PATH_KEY)?.as_str()?.trim();
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Catalog endpoint overrides from the `[catalog]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogOverrides {
    pub api_base: Option<String>,
    pub page_base: Option<String>,
    pub download_base: Option<String>,
}

impl CatalogOverrides {
    pub fn is_empty(&self) -> bool {
        self.api_base.is_none() && self.page_base.is_none() && self.download_base.is_none()
    }

    fn from_doc(doc: &toml::Value) -> Self {
        let field = |key: &str| {
            doc.get(CATALOG_TABLE)?
                .get(key)?
                .as_str()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };
        Self {
            api_base: field("api_base"),
            page_base: field("page_base"),
            download_base: field("download_base"),
        }
    }

    /// Fill unset fields from `fallback`.
    fn or(self, fallback: Self) -> Self {
        Self {
            api_base: self.api_base.or(fallback.api_base),
            page_base: self.page_base.or(fallback.page_base),
            download_base: self.download_base.or(fallback.download_base),
        }
    }
}

/// Load catalog overrides; `config.toml` under `cwd` wins over user settings, per key.
pub fn load_catalog_overrides(cwd: &Path) -> Result<CatalogOverrides, SettingsError> {
    load_catalog_overrides_in(cwd, &settings_path())
}

fn load_catalog_overrides_in(cwd: &Path, user_settings: &Path) -> Result<CatalogOverrides, SettingsError> {
    let project = read_doc(&project_config_path(cwd))?
        .map(|d| CatalogOverrides::from_doc(&d))
        .unwrap_or_default();
    let user = read_doc(user_settings)?
        .map(|d| CatalogOverrides::from_doc(&d))
        .unwrap_or_default();
    Ok(project.or(user))
}

/// Save (or clear) the mods directory in the user settings file.
///
/// Uses `toml::Value` for a surgical update so other tables (such as
/// `[catalog]`) are preserved.
pub fn save_mods_path(path: Option<&Path>) -> Result<(), SettingsError> {
    save_mods_path_to(&settings_path(), path)
}

fn save_mods_path_to(settings: &Path, path: Option<&Path>) -> Result<(), SettingsError> {
    let mut doc = read_doc(settings)?.unwrap_or_else(|| toml::Value::Table(Default::default()));

    let table = doc.as_table_mut().ok_or_else(|| SettingsError::Parse {
        path: settings.to_path_buf(),
        message: "root is not a table".into(),
    })?;
    let mod_path = table
        .entry(MOD_PATH_TABLE)
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let mod_path = mod_path.as_table_mut().ok_or_else(|| SettingsError::Parse {
        path: settings.to_path_buf(),
        message: format!("[{MOD_PATH_TABLE}] is not a table"),
    })?;

    match path {
        Some(p) => {
            mod_path.insert(
                MOD_PATH_KEY.to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            mod_path.remove(MOD_PATH_KEY);
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(std::io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the user settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let doc = read_doc(&settings_path()).ok()??;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(path: &Path, contents: &str) {
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_cli_override_wins() {
        let cwd = tempfile::tempdir().unwrap();
        write(&project_config_path(cwd.path()), "[ModPath]\npath = \"/from/config\"\n");
        let resolved =
            resolve_mods_dir_in(Some("/from/cli".into()), cwd.path(), &cwd.path().join("user.toml")).unwrap();
        assert_eq!(resolved, PathBuf::from("/from/cli"));
    }

    #[test]
    fn test_project_config_before_user_settings() {
        let cwd = tempfile::tempdir().unwrap();
        let user = cwd.path().join("user.toml");
        write(&project_config_path(cwd.path()), "[ModPath]\npath = \"/from/config\"\n");
        write(&user, "[ModPath]\npath = \"/from/user\"\n");
        assert_eq!(
            resolve_mods_dir_in(None, cwd.path(), &user).unwrap(),
            PathBuf::from("/from/config")
        );
    }

    #[test]
    fn test_falls_back_to_user_settings() {
        let cwd = tempfile::tempdir().unwrap();
        let user = cwd.path().join("user.toml");
        write(&project_config_path(cwd.path()), "[ModPath]\npath = \"  \"\n");
        write(&user, "[ModPath]\npath = \"/from/user\"\n");
        assert_eq!(
            resolve_mods_dir_in(None, cwd.path(), &user).unwrap(),
            PathBuf::from("/from/user")
        );
    }

    #[test]
    fn test_relative_path_is_joined_to_cwd() {
        let cwd = tempfile::tempdir().unwrap();
        write(&project_config_path(cwd.path()), "[ModPath]\npath = \"Mods\"\n");
        let resolved = resolve_mods_dir_in(None, cwd.path(), &cwd.path().join("user.toml")).unwrap();
        assert_eq!(resolved, cwd.path().join("Mods"));
    }

    #[test]
    fn test_nothing_configured() {
        let cwd = tempfile::tempdir().unwrap();
        let err = resolve_mods_dir_in(None, cwd.path(), &cwd.path().join("user.toml")).unwrap_err();
        match err {
            SettingsError::NoModsDir(looked) => assert_eq!(looked.len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let cwd = tempfile::tempdir().unwrap();
        write(&project_config_path(cwd.path()), "[ModPath\npath = ");
        let err = resolve_mods_dir_in(None, cwd.path(), &cwd.path().join("user.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn test_save_and_clear_preserves_other_tables() {
        let dir = tempfile::tempdir().unwrap();
        let settings = dir.path().join("nested").join("settings.toml");
        fs::create_dir_all(settings.parent().unwrap()).unwrap();
        write(&settings, "[catalog]\napi_base = \"http://localhost/api/mod/\"\n");

        save_mods_path_to(&settings, Some(Path::new("/games/Mods"))).unwrap();
        let doc = read_doc(&settings).unwrap().unwrap();
        assert_eq!(mods_path_in(&doc), Some(PathBuf::from("/games/Mods")));
        assert_eq!(
            CatalogOverrides::from_doc(&doc).api_base.as_deref(),
            Some("http://localhost/api/mod/")
        );

        save_mods_path_to(&settings, None).unwrap();
        let doc = read_doc(&settings).unwrap().unwrap();
        assert_eq!(mods_path_in(&doc), None);
        assert!(!CatalogOverrides::from_doc(&doc).is_empty());
    }

    #[test]
    fn test_save_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = dir.path().join("a").join("b").join("settings.toml");
        save_mods_path_to(&settings, Some(Path::new("Mods"))).unwrap();
        assert!(settings.exists());
        assert!(!settings.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_catalog_overrides_merge_per_key() {
        let cwd = tempfile::tempdir().unwrap();
        let user = cwd.path().join("user.toml");
        write(
            &project_config_path(cwd.path()),
            "[catalog]\napi_base = \"http://project/api/\"\n",
        );
        write(
            &user,
            "[catalog]\napi_base = \"http://user/api/\"\ndownload_base = \"http://user/cdn/\"\n",
        );

        let overrides = load_catalog_overrides_in(cwd.path(), &user).unwrap();
        assert_eq!(overrides.api_base.as_deref(), Some("http://project/api/"));
        assert_eq!(overrides.download_base.as_deref(), Some("http://user/cdn/"));
        assert_eq!(overrides.page_base, None);
    }

    #[test]
    fn test_no_overrides_without_files() {
        let cwd = tempfile::tempdir().unwrap();
        let overrides = load_catalog_overrides_in(cwd.path(), &cwd.path().join("user.toml")).unwrap();
        assert!(overrides.is_empty());
    }
}
