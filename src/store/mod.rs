//! Task storage: the in-memory store, its YAML file, and user configuration

pub mod config;
pub mod storage;
pub mod tasks;

pub use config::Config;
pub use storage::Storage;
pub use tasks::TaskStore;

use anyhow::Result;
use std::path::PathBuf;

pub const DEFAULT_CATEGORY: &str = "misc";

const STORE_FILE_NAME: &str = ".todo.yaml";
const APP_DIR_NAME: &str = "todo";

/// Directory holding `config.toml` (`$XDG_CONFIG_HOME/todo` or `~/.config/todo`).
pub fn get_app_dir() -> Result<PathBuf> {
    let config_dir =
        dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?;
    Ok(config_dir.join(APP_DIR_NAME))
}

/// `~/.todo.yaml`
pub fn default_store_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
    Ok(home.join(STORE_FILE_NAME))
}

/// Expand a leading `~/` against the home directory.
pub fn expand_home(path: &str) -> Result<PathBuf> {
    if path == "~" {
        return dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"));
    }
    if let Some(rest) = path.strip_prefix("~/") {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        return Ok(home.join(rest));
    }
    Ok(PathBuf::from(path))
}
