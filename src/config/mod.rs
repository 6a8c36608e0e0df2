// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use logo_stamp::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.export.prefer_downloads = true;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub base_height: f32,
    pub initial_scale: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            base_height: DEFAULT_BASE_OVERLAY_HEIGHT,
            initial_scale: DEFAULT_SCALE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub track_length: f32,
    pub knob_size: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            track_length: DEFAULT_TRACK_LENGTH,
            knob_size: DEFAULT_KNOB_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f32,
    pub height_ratio: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: REFERENCE_SCREEN_WIDTH - CANVAS_HORIZONTAL_MARGIN,
            height_ratio: DEFAULT_CANVAS_HEIGHT_RATIO,
        }
    }
}

impl CanvasConfig {
    /// Canvas height derived from the reference screen width.
    #[must_use]
    pub fn height(&self) -> f32 {
        (REFERENCE_SCREEN_WIDTH * self.height_ratio).round()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub file_name: String,
    /// Offer the native save dialog when a display is available.
    pub native_dialog: bool,
    /// Write into the user's downloads directory instead of the cache.
    pub prefer_downloads: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_SHARE_FILE_NAME.to_string(),
            native_dialog: true,
            prefer_downloads: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub dial_code: String,
    pub city_id: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            dial_code: DEFAULT_DIAL_CODE.to_string(),
            city_id: DEFAULT_CITY_ID,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
