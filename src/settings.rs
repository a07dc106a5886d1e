//! Flat JSON settings file.
//!
//! The settings file carries the provider credentials and generation
//! limits. A missing or unreadable file falls back to defaults so a
//! fresh checkout works without setup (the API key can still be
//! supplied on the command line).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

/// Default settings file name, next to the working directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Accepted `max_tokens` range.
const MAX_TOKENS_RANGE: std::ops::RangeInclusive<u32> = 1..=32000;

/// Provider settings persisted as a small JSON object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// API key for the generation provider.
    pub api_key: String,
    /// Token budget for the keyword-extraction call.
    pub max_tokens: u32,
    /// Provider selector ("Gemini" is the only implemented provider).
    pub api_type: String,
    /// Model identifier passed to the provider.
    pub model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_key: String::new(),
            max_tokens: 2048,
            api_type: "Gemini".to_string(),
            model: "gemini-2.0-flash".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// A missing file yields defaults. A file that cannot be read or
    /// parsed also yields defaults, with a warning, so a corrupt
    /// settings file never blocks generation.
    pub fn load(path: &Path) -> Settings {
        if !path.exists() {
            return Settings::default();
        }
        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| serde_json::from_str::<Settings>(&text).map_err(|e| e.to_string()));
        match parsed {
            Ok(settings) => settings.clamped(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load settings, using defaults");
                Settings::default()
            }
        }
    }

    /// Write settings to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Clamp `max_tokens` to the accepted range.
    fn clamped(mut self) -> Settings {
        self.max_tokens = self
            .max_tokens
            .clamp(*MAX_TOKENS_RANGE.start(), *MAX_TOKENS_RANGE.end());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.api_key.is_empty());
        assert_eq!(settings.max_tokens, 2048);
        assert_eq!(settings.api_type, "Gemini");
        assert_eq!(settings.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let settings = Settings::load(&dir.path().join("settings.json"));
        assert_eq!(settings.max_tokens, 2048);
    }

    #[test]
    fn test_load_corrupt_file_yields_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        let settings = Settings::load(&path);
        assert_eq!(settings.api_type, "Gemini");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"api_key": "secret"}"#).unwrap();
        let settings = Settings::load(&path);
        assert_eq!(settings.api_key, "secret");
        assert_eq!(settings.max_tokens, 2048);
    }

    #[test]
    fn test_max_tokens_clamped() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"max_tokens": 9999999}"#).unwrap();
        assert_eq!(Settings::load(&path).max_tokens, 32000);

        fs::write(&path, r#"{"max_tokens": 0}"#).unwrap();
        assert_eq!(Settings::load(&path).max_tokens, 1);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.api_key = "key-123".to_string();
        settings.max_tokens = 4096;
        settings.save(&path).unwrap();

        let reloaded = Settings::load(&path);
        assert_eq!(reloaded.api_key, "key-123");
        assert_eq!(reloaded.max_tokens, 4096);
    }
}
