//! Tint configuration system
//!
//! This crate provides centralized configuration management for Tint,
//! loading settings from `tint.toml` with environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for Tint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TintConfig {
    /// Display and form-factor settings
    pub device: DeviceConfig,
    /// Locations of bundled resources
    pub resources: ResourcesConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Device configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Screen density in dots per inch (120, 160, 240, 320 map to known tiers)
    pub density_dpi: Option<u32>,
    /// Use the tablet layout
    pub tablet: bool,
}

/// Resource locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    /// Background frame drawn behind favicons on application buttons
    pub button_frame: PathBuf,
    /// Drawable whose intrinsic size defines bookmark thumbnail dimensions
    pub bookmark_thumbnail: PathBuf,
    /// Plain-text changelog shown on upgrade
    pub changelog: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// env_logger filter string (e.g. "info,tint_utils=debug")
    pub filter: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            density_dpi: None,
            tablet: false,
        }
    }
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            button_frame: PathBuf::from("res/bookmark_list_favicon_bg.png"),
            bookmark_thumbnail: PathBuf::from("res/browser_thumbnail.png"),
            changelog: PathBuf::from("res/changelog.txt"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

fn parse_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl TintConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the tint.toml configuration file
    ///
    /// # Returns
    /// * `Ok(TintConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (tint.toml in the current directory)
    /// or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("tint.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        // Device settings
        if let Ok(val) = std::env::var("TINT_DENSITY_DPI") {
            if let Ok(dpi) = val.parse::<u32>() {
                self.device.density_dpi = Some(dpi);
            }
        }
        if let Ok(val) = std::env::var("TINT_TABLET") {
            self.device.tablet = parse_flag(&val);
        }

        // Resource settings
        if let Ok(path) = std::env::var("TINT_BUTTON_FRAME") {
            self.resources.button_frame = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("TINT_BOOKMARK_THUMBNAIL") {
            self.resources.bookmark_thumbnail = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("TINT_CHANGELOG") {
            self.resources.changelog = PathBuf::from(path);
        }

        if let Ok(filter) = std::env::var("TINT_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from tint.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
