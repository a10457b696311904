/// User settings loaded from `settings.toml`
///
/// The file lives in the platform config directory:
/// - Linux: ~/.config/botaniq/settings.toml
/// - macOS: ~/Library/Application Support/botaniq/settings.toml
/// - Windows: %APPDATA%\botaniq\settings.toml
///
/// Every field is optional; missing values fall back to the defaults below.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

const CONFIG_FILE: &str = "settings.toml";
const APP_DIR: &str = "botaniq";

pub const DEFAULT_TRANSITION_MS: u64 = 1000;
pub const DEFAULT_IMAGE_MAX_SIZE: u32 = 512;
pub const DEFAULT_BLURHASH: &str = "LEHV6nWB2yk8pyo0adR*.7kCMdnj";

/// Light or dark application theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeChoice,
    /// Placeholder to image cross-fade, in milliseconds
    #[serde(default)]
    pub image_transition_ms: Option<u64>,
    /// Longest edge, in pixels, that fetched photos are downscaled to
    #[serde(default)]
    pub image_max_size: Option<u32>,
    #[serde(default)]
    pub placeholder_blurhash: Option<String>,
}

impl Config {
    pub fn image_transition(&self) -> Duration {
        Duration::from_millis(self.image_transition_ms.unwrap_or(DEFAULT_TRANSITION_MS))
    }

    pub fn image_max_size(&self) -> u32 {
        self.image_max_size.unwrap_or(DEFAULT_IMAGE_MAX_SIZE).max(1)
    }

    pub fn placeholder_blurhash(&self) -> &str {
        self.placeholder_blurhash
            .as_deref()
            .unwrap_or(DEFAULT_BLURHASH)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        path
    })
}

/// Load settings from the default location.
/// On first run the defaults are written out so they can be edited.
pub fn load() -> Result<Config> {
    let Some(path) = default_config_path() else {
        return Ok(Config::default());
    };
    if path.exists() {
        return load_from_path(&path);
    }

    let config = Config::default();
    match save_to_path(&config, &path) {
        Ok(()) => tracing::info!("📝 Wrote default settings to {}", path.display()),
        Err(err) => tracing::warn!("Could not write default settings: {}", err),
    }
    Ok(config)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
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
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.image_transition(), Duration::from_millis(1000));
        assert_eq!(config.image_max_size(), DEFAULT_IMAGE_MAX_SIZE);
        assert_eq!(config.placeholder_blurhash(), DEFAULT_BLURHASH);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let config = Config {
            theme: ThemeChoice::Dark,
            image_transition_ms: Some(250),
            image_max_size: Some(128),
            placeholder_blurhash: None,
        };
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &path).unwrap();
        let loaded = load_from_path(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "theme = \"dark\"\n").unwrap();

        let loaded = load_from_path(&path).unwrap();

        assert_eq!(loaded.theme, ThemeChoice::Dark);
        assert_eq!(loaded.image_transition(), Duration::from_millis(DEFAULT_TRANSITION_MS));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "not = valid = toml").unwrap();

        let result = load_from_path(&path);
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_zero_max_size_is_clamped() {
        let config = Config {
            image_max_size: Some(0),
            ..Config::default()
        };
        assert_eq!(config.image_max_size(), 1);
    }
}
