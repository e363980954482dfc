use super::keymap::KeyConfig;
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_ENV: &str = "CHIPSEARCH_CONFIG";
const DEFAULT_DROPDOWN_HEIGHT: u16 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub theme: PaletteType,
    pub keymap: KeyConfig,
    /// TOML user list replacing the built-in demo catalog.
    pub catalog_path: Option<PathBuf>,
    /// Maximum number of suggestion rows shown at once.
    pub dropdown_height: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: PaletteType::default(),
            keymap: KeyConfig::default(),
            catalog_path: None,
            dropdown_height: DEFAULT_DROPDOWN_HEIGHT,
        }
    }
}

impl Config {
    /// Loads the config from `CHIPSEARCH_CONFIG` or
    /// `~/.config/chipsearch/config.toml`. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.dropdown_height = config.dropdown_height.max(1);
        if let Some(catalog) = &config.catalog_path {
            // Relative catalog paths are resolved next to the config file
            if catalog.is_relative() {
                if let Some(parent) = path.parent() {
                    config.catalog_path = Some(parent.join(catalog));
                }
            }
        }

        Ok(config)
    }
}

pub fn get_config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("chipsearch");
        path
    })
}

pub fn get_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    get_config_dir().map(|dir| dir.join("config.toml"))
}
