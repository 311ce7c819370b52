//! User settings loaded from `settings.json` in the config directory.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use thiserror::Error;

use crate::paths;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),
    #[error("invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Dashboard settings.
///
/// Every field has a default, so a partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rows per table page.
    pub page_size: usize,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
    /// Tab selected when the General Settings page opens.
    pub default_tab: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: datatable::table::DEFAULT_PAGE_SIZE,
            log_level: "debug".to_string(),
            default_tab: "organization-type".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the platform config directory.
    ///
    /// Returns defaults when the directory cannot be determined or the file
    /// does not exist.
    pub fn load() -> Result<Self, SettingsError> {
        match paths::settings_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&contents)?)
    }

    /// Page size, never zero.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Parsed log level, falling back to `Debug` for unknown names.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.page_size(), 10);
        assert_eq!(settings.default_tab, "organization-type");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "page_size": 4 }"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.page_size, 4);
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ page_size: ").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let settings = Settings {
            page_size: 0,
            ..Settings::default()
        };
        assert_eq!(settings.page_size(), 1);
    }

    #[test]
    fn test_level_filter() {
        let mut settings = Settings {
            log_level: "warn".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.level_filter(), LevelFilter::Warn);

        settings.log_level = "loud".to_string();
        assert_eq!(settings.level_filter(), LevelFilter::Debug);
    }
}
