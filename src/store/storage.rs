//! Task storage - YAML file persistence

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::TaskStore;
use crate::error::{Result, TodoError};

pub struct Storage {
    path: PathBuf,
    backup: bool,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup: true,
        }
    }

    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }

    /// Read the whole store. A missing or blank file is an empty store; a
    /// category with a null value loads as an empty list.
    pub fn load(&self) -> Result<TaskStore> {
        if !self.path.exists() {
            debug!("No task file at {}, starting empty", self.path.display());
            return Ok(TaskStore::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(TaskStore::new());
        }

        let raw: Option<BTreeMap<String, Option<Vec<String>>>> = serde_yaml::from_str(&content)
            .map_err(|source| TodoError::MalformedStore {
                path: self.path.clone(),
                source,
            })?;

        let categories: BTreeMap<String, Vec<String>> = raw
            .unwrap_or_default()
            .into_iter()
            .map(|(name, tasks)| (name, tasks.unwrap_or_default()))
            .collect();

        debug!(
            "Loaded {} categories from {}",
            categories.len(),
            self.path.display()
        );
        Ok(TaskStore::from_map(categories))
    }

    /// Prune empty categories, then rewrite the whole file through a temporary
    /// file in the same directory.
    pub fn save(&self, store: &mut TaskStore) -> Result<()> {
        let pruned = store.prune();
        if pruned > 0 {
            debug!("Pruned {} empty categories", pruned);
        }

        if self.backup && self.path.exists() {
            if let Err(e) = fs::copy(&self.path, self.backup_path()) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let content = serde_yaml::to_string(&*store)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!("Saved tasks to {}", self.path.display());
        Ok(())
    }
}
