//! Application settings for Booklist.
//!
//! Read once at start-up from a JSON file at an OS-appropriate location.
//! Settings are never written; edit the file by hand.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Colour scheme of the main window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn to_theme(self) -> iced::Theme {
        match self {
            Self::Dark => iced::Theme::Dark,
            Self::Light => iced::Theme::Light,
        }
    }
}

/// Persisted application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Catalog file to seed the list from; the bundled sample is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub theme: ThemeChoice,
}

/// Returns the path to the settings JSON file.
///
/// - macOS / Linux: `~/.config/booklist/settings.json`
/// - Windows: `%APPDATA%/Booklist/settings.json`
pub fn settings_file_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("Booklist").join("settings.json")
    }
    #[cfg(not(target_os = "windows"))]
    {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("booklist").join("settings.json")
    }
}

/// Loads settings from the default location.
pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_file_path())
}

/// Loads settings from `path`; returns defaults if the file is missing or corrupt.
pub fn load_settings_from(path: &Path) -> AppSettings {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::debug!("no settings at {}: {e}", path.display());
            return AppSettings::default();
        }
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        log::warn!("ignoring corrupt settings file {}: {e}", path.display());
        AppSettings::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("settings.json"));
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.theme, ThemeChoice::Dark);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_settings_from(&path), AppSettings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"theme":"light"}"#).unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert!(settings.catalog_path.is_none());
    }

    #[test]
    fn catalog_path_uses_camel_case() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"catalogPath":"/tmp/books.json"}"#).unwrap();
        assert_eq!(settings.catalog_path, Some(PathBuf::from("/tmp/books.json")));
    }

    #[test]
    fn settings_path_ends_with_file_name() {
        assert!(settings_file_path().ends_with("settings.json"));
    }
}
