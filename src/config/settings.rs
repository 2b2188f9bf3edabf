//! User settings for jciphers
//!
//! Manages terminal preferences and the default log level. Cipher results
//! are never stored here.

use serde::{Deserialize, Serialize};

use super::paths::CipherPaths;
use crate::error::CipherError;

/// User settings for jciphers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Clear the terminal between menu screens
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    /// Show the title banner on the main menu
    #[serde(default = "default_true")]
    pub show_banner: bool,

    /// Default tracing filter (e.g. "warn", "jciphers=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            clear_screen: true,
            show_banner: true,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use default settings if the file doesn't exist
    pub fn load_or_create(paths: &CipherPaths) -> Result<Self, CipherError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| CipherError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CipherError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CipherPaths) -> Result<(), CipherError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CipherError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CipherError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.clear_screen);
        assert!(settings.show_banner);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CipherPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CipherPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            clear_screen: false,
            log_level: "debug".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.clear_screen);
        assert_eq!(loaded.log_level, "debug");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CipherPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"clear_screen": false}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.clear_screen);
        assert!(loaded.show_banner);
        assert_eq!(loaded.schema_version, 1);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CipherPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, CipherError::Config(_)));
    }
}
