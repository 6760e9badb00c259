//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::{default_store_path, expand_home, get_app_dir, DEFAULT_CATEGORY};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Category used when no `-category` selector is given
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Task file location; `~/` is expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<String>,

    /// Listing a missing category prints a notice instead of failing
    #[serde(default)]
    pub lenient_list: bool,

    /// Keep a copy of the previous task file as `<file>.bak`
    #[serde(default = "default_true")]
    pub backup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            store_path: None,
            lenient_list: false,
            backup: true,
        }
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_true() -> bool {
    true
}

pub fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Malformed config file {}", path.display()))?;
        if config.default_category.trim().is_empty() {
            config.default_category = default_category();
        }
        Ok(config)
    }

    /// Resolved task file location.
    pub fn store_path(&self) -> Result<PathBuf> {
        match &self.store_path {
            Some(path) => expand_home(path),
            None => default_store_path(),
        }
    }
}
