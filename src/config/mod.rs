// SPDX-License-Identifier: MPL-2.0
//! User preferences, loaded from and saved to `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[cloud]` - Hosted service account, upload preset and endpoints
//! - `[display]` - Preview size and initial compare slider position
//! - `[download]` - Target directory, file name and size limit
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `CLOUD_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use cloud_lens::config::{self, Config};
//!
//! let (config, _warning) = config::load();
//! println!("uploading to {}", config.cloud.cloud_name);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::cloud::UrlStyle;
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
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Hosted service account settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CloudConfig {
    /// Account name; used to derive the default upload and delivery URLs.
    #[serde(default = "default_cloud_name")]
    pub cloud_name: String,

    /// Unsigned upload preset sent with every upload.
    #[serde(default = "default_upload_preset")]
    pub upload_preset: String,

    /// Full upload endpoint, overriding the one derived from `cloud_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_url: Option<String>,

    /// Delivery base URL, overriding the one derived from `cloud_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_url: Option<String>,

    /// How transformation parameters are encoded in delivery URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_style: Option<UrlStyle>,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            cloud_name: default_cloud_name(),
            upload_preset: default_upload_preset(),
            upload_url: None,
            delivery_url: None,
            url_style: Some(UrlStyle::default()),
        }
    }
}

/// Preview settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Edge length requested for preview images, in pixels.
    #[serde(
        default = "default_preview_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub preview_size: Option<u32>,

    /// Initial divider position of the compare slider (0.0 to 1.0).
    #[serde(
        default = "default_slider_position",
        skip_serializing_if = "Option::is_none"
    )]
    pub slider_position: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview_size: default_preview_size(),
            slider_position: default_slider_position(),
        }
    }
}

impl DisplayConfig {
    /// Preview size clamped to [`MIN_PREVIEW_SIZE`]..=[`MAX_PREVIEW_SIZE`].
    #[must_use]
    pub fn preview_size(&self) -> u32 {
        self.preview_size
            .unwrap_or(DEFAULT_PREVIEW_SIZE)
            .clamp(MIN_PREVIEW_SIZE, MAX_PREVIEW_SIZE)
    }

    /// Slider position clamped to 0.0..=1.0; NaN falls back to the default.
    #[must_use]
    pub fn slider_position(&self) -> f32 {
        match self.slider_position {
            Some(value) if value.is_finite() => value.clamp(0.0, 1.0),
            _ => DEFAULT_SLIDER_POSITION,
        }
    }
}

/// Download settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadConfig {
    /// Target directory; the platform downloads directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// File stem of downloaded images.
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Largest payload accepted for uploads and fetches, in bytes.
    #[serde(default = "default_max_bytes", skip_serializing_if = "Option::is_none")]
    pub max_bytes: Option<u64>,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: default_file_name(),
            max_bytes: default_max_bytes(),
        }
    }
}

impl DownloadConfig {
    /// Effective download directory.
    #[must_use]
    pub fn directory(&self) -> PathBuf {
        self.directory
            .clone()
            .unwrap_or_else(paths::default_download_dir)
    }

    /// File stem; blank or path-like values fall back to the default.
    #[must_use]
    pub fn file_name(&self) -> &str {
        let name = self.file_name.trim();
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            DEFAULT_DOWNLOAD_FILE_NAME
        } else {
            name
        }
    }

    /// Size limit, never below [`MIN_MAX_BYTES`].
    #[must_use]
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
            .unwrap_or(DEFAULT_MAX_BYTES)
            .max(MIN_MAX_BYTES)
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
    pub cloud: CloudConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub download: DownloadConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_cloud_name() -> String {
    DEFAULT_CLOUD_NAME.to_string()
}

fn default_upload_preset() -> String {
    DEFAULT_UPLOAD_PRESET.to_string()
}

fn default_preview_size() -> Option<u32> {
    Some(DEFAULT_PREVIEW_SIZE)
}

fn default_slider_position() -> Option<f32> {
    Some(DEFAULT_SLIDER_POSITION)
}

fn default_file_name() -> String {
    DEFAULT_DOWNLOAD_FILE_NAME.to_string()
}

fn default_max_bytes() -> Option<u64> {
    Some(DEFAULT_MAX_BYTES)
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
/// default config with the i18n key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
///
/// A missing file is created with the defaults so there is something to edit.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        let config = Config::default();
        if let Err(err) = save_to_path(&config, &path) {
            tracing::warn!(path = %path.display(), error = %err, "cannot write default configuration");
        }
        return (config, None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "configuration loaded");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid configuration, using defaults");
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
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

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "configuration saved");
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            cloud: CloudConfig {
                cloud_name: "my-cloud".to_string(),
                upload_preset: "unsigned".to_string(),
                upload_url: Some("http://localhost:9000/upload".to_string()),
                delivery_url: None,
                url_style: Some(UrlStyle::Path),
            },
            display: DisplayConfig {
                preview_size: Some(600),
                slider_position: Some(0.25),
            },
            download: DownloadConfig {
                directory: Some(PathBuf::from("/tmp/downloads")),
                file_name: "result".to_string(),
                max_bytes: Some(1_000_000),
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
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_file_falls_back_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[cloud\nbroken")
            .expect("failed to write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().join("fresh");

        load_with_override(Some(base_dir.clone()));

        let written = load_from_path(&base_dir.join(CONFIG_FILE)).expect("default file written");
        assert_eq!(written, Config::default());
    }

    #[test]
    fn partial_sections_use_defaults_for_missing_keys() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[cloud]\ncloud_name = \"acme\"\n").expect("write");

        let config = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(config.cloud.cloud_name, "acme");
        assert_eq!(config.cloud.upload_preset, DEFAULT_UPLOAD_PRESET);
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn url_style_parses_kebab_case() {
        let config: Config = toml::from_str("[cloud]\nurl_style = \"path\"\n").expect("parse");
        assert_eq!(config.cloud.url_style, Some(UrlStyle::Path));
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.cloud.cloud_name, DEFAULT_CLOUD_NAME);
        assert_eq!(config.cloud.url_style, Some(UrlStyle::Query));
        assert_eq!(config.display.preview_size(), DEFAULT_PREVIEW_SIZE);
        assert_eq!(config.download.file_name(), "image");
        assert_eq!(config.download.max_bytes(), DEFAULT_MAX_BYTES);
    }

    #[test]
    fn preview_size_is_clamped() {
        let small = DisplayConfig {
            preview_size: Some(1),
            ..DisplayConfig::default()
        };
        let large = DisplayConfig {
            preview_size: Some(100_000),
            ..DisplayConfig::default()
        };
        assert_eq!(small.preview_size(), MIN_PREVIEW_SIZE);
        assert_eq!(large.preview_size(), MAX_PREVIEW_SIZE);
    }

    #[test]
    fn slider_position_is_clamped() {
        let display = DisplayConfig {
            slider_position: Some(3.0),
            ..DisplayConfig::default()
        };
        assert!((display.slider_position() - 1.0).abs() < f32::EPSILON);

        let display = DisplayConfig {
            slider_position: Some(f32::NAN),
            ..DisplayConfig::default()
        };
        assert!((display.slider_position() - DEFAULT_SLIDER_POSITION).abs() < f32::EPSILON);
    }

    #[test]
    fn path_like_file_names_are_rejected() {
        let download = DownloadConfig {
            file_name: "../escape".to_string(),
            ..DownloadConfig::default()
        };
        assert_eq!(download.file_name(), DEFAULT_DOWNLOAD_FILE_NAME);

        let download = DownloadConfig {
            file_name: "  ".to_string(),
            ..DownloadConfig::default()
        };
        assert_eq!(download.file_name(), DEFAULT_DOWNLOAD_FILE_NAME);
    }

    #[test]
    fn max_bytes_has_a_floor() {
        let download = DownloadConfig {
            max_bytes: Some(10),
            ..DownloadConfig::default()
        };
        assert_eq!(download.max_bytes(), MIN_MAX_BYTES);
    }

    #[test]
    fn configured_directory_wins_over_platform_default() {
        let download = DownloadConfig {
            directory: Some(PathBuf::from("/srv/images")),
            ..DownloadConfig::default()
        };
        assert_eq!(download.directory(), PathBuf::from("/srv/images"));
    }
}
