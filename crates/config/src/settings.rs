// Application settings
// Loaded from <config_dir>/stencil/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// User settings, shared by every window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub appearance: AppearanceSettings,
}

/// Appearance settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    /// Id of the active theme (see the app's builtin theme list)
    pub theme_id: String,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme_id: "graphite-dark".to_string(),
        }
    }
}

/// Get the path to the user settings file
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("stencil").join("settings.json"))
}

/// Load user settings from disk
///
/// Returns default settings if the file doesn't exist or can't be parsed.
/// This is intentional - settings errors must not prevent app startup.
pub fn load_settings() -> Settings {
    settings_path()
        .map(|p| load_settings_from(&p))
        .unwrap_or_default()
}

/// Load settings from an explicit path (default on any failure)
pub fn load_settings_from(path: &Path) -> Settings {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

/// Save user settings to disk
///
/// Creates the config directory if it doesn't exist. The caller decides
/// whether a failure is worth surfacing; settings are not critical for
/// operation.
pub fn save_settings(settings: &Settings) -> io::Result<()> {
    let Some(path) = settings_path() else {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "no config directory on this platform",
        ));
    };
    save_settings_to(&path, settings)
}

/// Save settings to an explicit path
pub fn save_settings_to(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("nope.json"));
        assert_eq!(settings.appearance.theme_id, "graphite-dark");
    }

    #[test]
    fn round_trip_preserves_theme_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.appearance.theme_id = "paper-light".to_string();
        save_settings_to(&path, &settings).unwrap();

        let loaded = load_settings_from(&path);
        assert_eq!(loaded.appearance.theme_id, "paper-light");
    }

    #[test]
    fn garbage_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not even close to json {").unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings.appearance.theme_id, "graphite-dark");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{}").unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings.appearance.theme_id, "graphite-dark");
    }
}
