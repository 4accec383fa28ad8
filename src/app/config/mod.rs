// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Photo API endpoint and user agent
//! - `[display]` - Grid columns and thumbnail size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config;
//!
//! fn switch_to_portuguese() -> iced_gallery::error::Result<()> {
//!     let (mut settings, _warning) = config::load();
//!     settings.general.language = Some("pt-BR".to_string());
//!     config::save_with_override(&settings, None)
//! }
//! # let _ = switch_to_portuguese;
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "pt-BR").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Photo API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

/// Grid display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Tiles per row.
    #[serde(default = "default_columns", skip_serializing_if = "Option::is_none")]
    pub columns: Option<u16>,

    /// Thumbnail edge length in pixels.
    #[serde(
        default = "default_thumbnail_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_size: Option<u32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            thumbnail_size: default_thumbnail_size(),
        }
    }
}

impl DisplayConfig {
    /// Column count clamped to the supported range.
    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
            .unwrap_or(DEFAULT_COLUMNS)
            .clamp(MIN_COLUMNS, MAX_COLUMNS)
    }

    /// Thumbnail size clamped to the supported range.
    #[must_use]
    pub fn thumbnail_size(&self) -> u32 {
        self.thumbnail_size
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_columns() -> Option<u16> {
    Some(DEFAULT_COLUMNS)
}

fn default_thumbnail_size() -> Option<u32> {
    Some(DEFAULT_THUMBNAIL_SIZE)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::info!("Loaded settings from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!("Ignoring unreadable settings {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to `base_dir`, or to the resolved config
/// directory when `None`.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("pt-BR".to_string()),
                theme_mode: ThemeMode::Light,
            },
            api: ApiConfig {
                base_url: "http://localhost:8080".to_string(),
                user_agent: "tests".to_string(),
            },
            display: DisplayConfig {
                columns: Some(2),
                thumbnail_size: Some(256),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is not = = toml").expect("write file");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[display]\ncolumns = 4\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("load config");
        assert_eq!(loaded.display.columns(), 4);
        assert_eq!(loaded.display.thumbnail_size(), DEFAULT_THUMBNAIL_SIZE);
        assert_eq!(loaded.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let loaded: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_display_values_are_clamped() {
        let display = DisplayConfig {
            columns: Some(40),
            thumbnail_size: Some(1),
        };
        assert_eq!(display.columns(), MAX_COLUMNS);
        assert_eq!(display.thumbnail_size(), MIN_THUMBNAIL_SIZE);
    }

    #[test]
    fn load_with_override_missing_file_returns_default_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_corrupted_file_warns() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;

        save_with_override(&config, Some(temp_dir.path().to_path_buf())).expect("save");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }
}
