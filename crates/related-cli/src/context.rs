//! Settings discovery
//!
//! Finds the settings document for a query. This mirrors how editors scope
//! per-project settings: an explicit path wins, then a project file found by
//! walking up from the file being edited, then the user-wide file.

use std::path::{Path, PathBuf};

use related_core::{ConfigurationSet, Settings};
use related_fs::NormalizedPath;

use crate::error::{CliError, Result};

/// Environment variable naming a settings file.
pub const SETTINGS_ENV: &str = "GOTO_RELATED_SETTINGS";

/// Project-local settings file name.
pub const PROJECT_SETTINGS: &str = ".goto-related.toml";

/// Where the settings in use came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    /// `--settings` or the environment variable
    Explicit(PathBuf),
    /// `.goto-related.toml` in the start directory or an ancestor
    Project(PathBuf),
    /// `<config dir>/goto-related/settings.toml`
    User(PathBuf),
}

impl SettingsSource {
    pub fn path(&self) -> &Path {
        match self {
            SettingsSource::Explicit(path)
            | SettingsSource::Project(path)
            | SettingsSource::User(path) => path,
        }
    }

    /// Load and validate the enabled configurations.
    pub fn load(&self) -> Result<ConfigurationSet> {
        let settings = Settings::load(&NormalizedPath::new(self.path()))?;
        Ok(ConfigurationSet::from_settings(&settings)?)
    }
}

impl std::fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            SettingsSource::Explicit(_) => "explicit",
            SettingsSource::Project(_) => "project",
            SettingsSource::User(_) => "user",
        };
        write!(f, "{} ({})", self.path().display(), kind)
    }
}

/// Directory to start the project search from: the directory of `file`, or
/// `cwd` when there is no file or it is empty.
pub fn start_dir(cwd: &Path, file: Option<&Path>) -> PathBuf {
    match file {
        Some(file) if !file.as_os_str().is_empty() => {
            let absolute = cwd.join(file);
            absolute
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or(absolute)
        }
        _ => cwd.to_path_buf(),
    }
}

/// Find the settings file, first hit wins.
pub fn discover_settings(explicit: Option<&Path>, start: &Path) -> Option<SettingsSource> {
    if let Some(path) = explicit {
        return Some(SettingsSource::Explicit(path.to_path_buf()));
    }
    if let Some(path) = find_project_settings(start) {
        return Some(SettingsSource::Project(path));
    }
    user_settings_path()
        .filter(|path| path.is_file())
        .map(SettingsSource::User)
}

/// Like [`discover_settings`], but a missing settings file is an error.
pub fn require_settings(explicit: Option<&Path>, start: &Path) -> Result<SettingsSource> {
    let source = discover_settings(explicit, start).ok_or_else(|| {
        CliError::user(format!(
            "No settings found. Pass --settings, set {SETTINGS_ENV}, or create {PROJECT_SETTINGS}."
        ))
    })?;
    tracing::debug!(settings = %source, "using settings");
    Ok(source)
}

/// Walk up from `start` looking for [`PROJECT_SETTINGS`].
pub fn find_project_settings(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        let candidate = dir.join(PROJECT_SETTINGS);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = dir.parent();
    }
    None
}

/// `<config dir>/goto-related/settings.toml`, if the platform has a config
/// directory.
pub fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("goto-related").join("settings.toml"))
}
