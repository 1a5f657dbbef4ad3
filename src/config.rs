// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences to a `settings.toml` file.
//!
//! All fields are optional so a partially written or older config file still
//! loads; missing values fall back to the defaults below.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedStrip";

/// Pixels of horizontal travel per wheel "line" of vertical scroll.
pub const DEFAULT_LINE_SCROLL_STEP: f32 = 120.0;

/// Delay before the dismissed lightbox image is cleared, in milliseconds.
pub const DEFAULT_DISMISS_DELAY_MS: u64 = 300;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub line_scroll_step: Option<f32>,
    #[serde(default)]
    pub dismiss_delay_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_scroll_step: Some(DEFAULT_LINE_SCROLL_STEP),
            dismiss_delay_ms: Some(DEFAULT_DISMISS_DELAY_MS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
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

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_values() {
        let config = Config {
            line_scroll_step: Some(80.0),
            dismiss_delay_ms: Some(150),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.line_scroll_step, config.line_scroll_step);
        assert_eq!(loaded.dismiss_delay_ms, config.dismiss_delay_ms);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.line_scroll_step, Some(DEFAULT_LINE_SCROLL_STEP));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config {
            line_scroll_step: Some(60.0),
            dismiss_delay_ms: None,
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn missing_fields_fall_back_to_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "line_scroll_step = 42.0").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.line_scroll_step, Some(42.0));
        assert_eq!(loaded.dismiss_delay_ms, None);
    }

    #[test]
    fn default_config_sets_step_and_delay() {
        let config = Config::default();
        assert_eq!(config.line_scroll_step, Some(DEFAULT_LINE_SCROLL_STEP));
        assert_eq!(config.dismiss_delay_ms, Some(DEFAULT_DISMISS_DELAY_MS));
    }
}
