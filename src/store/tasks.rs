//! Category to task-list mapping and the operations on it

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{Result, TodoError};

/// All task lists, keyed by category name.
///
/// Categories come into existence with their first task. A category whose list
/// has become empty stays in the map until [`TaskStore::prune`] runs, which
/// happens as part of every save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskStore {
    categories: BTreeMap<String, Vec<String>>,
}

fn check_index(category: &str, len: usize, index: usize) -> Result<()> {
    if index >= len {
        return Err(TodoError::IndexOutOfRange {
            category: category.to_string(),
            index,
            len,
        });
    }
    Ok(())
}

/// Collapse line breaks so every task renders as one `N) text` line.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_indexed(out: &mut String, tasks: &[String], indent: &str) {
    for (i, task) in tasks.iter().enumerate() {
        out.push_str(&format!("{}{}) {}\n", indent, i, task));
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(categories: BTreeMap<String, Vec<String>>) -> Self {
        Self { categories }
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub fn tasks(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    fn tasks_mut(&mut self, category: &str) -> Result<&mut Vec<String>> {
        self.categories
            .get_mut(category)
            .ok_or_else(|| TodoError::NoSuchCategory(category.to_string()))
    }

    /// Categories that still hold tasks, in name order.
    pub fn non_empty(&self) -> BTreeMap<&str, &[String]> {
        self.categories
            .iter()
            .filter(|(_, tasks)| !tasks.is_empty())
            .map(|(name, tasks)| (name.as_str(), tasks.as_slice()))
            .collect()
    }

    /// Write the category's tasks as `N) text` lines into `out`.
    pub fn list(&self, category: &str, out: &mut String) -> Result<()> {
        let tasks = self
            .tasks(category)
            .ok_or_else(|| TodoError::NoSuchCategory(category.to_string()))?;
        write_indexed(out, tasks, "");
        Ok(())
    }

    /// Render every non-empty category, in name order, with its indexed tasks.
    pub fn list_all(&self) -> String {
        let mut out = String::new();
        for (category, tasks) in self.non_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("{}:\n", category));
            write_indexed(&mut out, tasks, "  ");
        }
        out
    }

    /// Append a task, creating the category if needed. Returns its index.
    pub fn add(&mut self, category: &str, text: &str) -> Result<usize> {
        let text = single_line(text);
        if text.is_empty() {
            return Err(TodoError::EmptyTask);
        }
        let tasks = self.categories.entry(category.to_string()).or_default();
        tasks.push(text);
        Ok(tasks.len() - 1)
    }

    /// Remove the tasks at `ids`, all interpreted against the list as it was
    /// before the call. Order and duplicates in `ids` do not matter. Nothing is
    /// removed unless every id is valid. Returns the removed texts in list order.
    pub fn remove(&mut self, category: &str, ids: &[usize]) -> Result<Vec<String>> {
        let tasks = self.tasks_mut(category)?;

        let mut ids = ids.to_vec();
        ids.sort_unstable();
        ids.dedup();
        for &id in &ids {
            check_index(category, tasks.len(), id)?;
        }

        let mut removed: Vec<String> = ids.iter().rev().map(|&id| tasks.remove(id)).collect();
        removed.reverse();
        Ok(removed)
    }

    /// Move a task up by `count` steps, stopping at the top. Returns its new index.
    pub fn move_up(&mut self, category: &str, id: usize, count: usize) -> Result<usize> {
        let tasks = self.tasks_mut(category)?;
        check_index(category, tasks.len(), id)?;
        if id == 0 {
            return Err(TodoError::AlreadyAtTop(id));
        }

        let mut pos = id;
        for _ in 0..count {
            if pos == 0 {
                break;
            }
            tasks.swap(pos, pos - 1);
            pos -= 1;
        }
        Ok(pos)
    }

    /// Move a task down by `count` steps, stopping at the bottom. Returns its new index.
    pub fn move_down(&mut self, category: &str, id: usize, count: usize) -> Result<usize> {
        let tasks = self.tasks_mut(category)?;
        check_index(category, tasks.len(), id)?;
        let last = tasks.len() - 1;
        if id == last {
            return Err(TodoError::AlreadyAtBottom(id));
        }

        let mut pos = id;
        for _ in 0..count {
            if pos == last {
                break;
            }
            tasks.swap(pos, pos + 1);
            pos += 1;
        }
        Ok(pos)
    }

    /// Swap two tasks. Both indices must be valid.
    pub fn exchange(&mut self, category: &str, i: usize, j: usize) -> Result<()> {
        let tasks = self.tasks_mut(category)?;
        check_index(category, tasks.len(), i)?;
        check_index(category, tasks.len(), j)?;
        tasks.swap(i, j);
        Ok(())
    }

    /// Move a task to the end of `target`, creating it if needed.
    /// Returns the task text.
    pub fn move_task(&mut self, category: &str, id: usize, target: &str) -> Result<String> {
        let tasks = self.tasks_mut(category)?;
        check_index(category, tasks.len(), id)?;
        let text = tasks.remove(id);

        self.categories
            .entry(target.to_string())
            .or_default()
            .push(text.clone());
        Ok(text)
    }

    /// Replace a task's text. Returns the previous text.
    pub fn change(&mut self, category: &str, id: usize, text: &str) -> Result<String> {
        let text = single_line(text);
        if text.is_empty() {
            return Err(TodoError::EmptyTask);
        }
        let tasks = self.tasks_mut(category)?;
        check_index(category, tasks.len(), id)?;
        Ok(std::mem::replace(&mut tasks[id], text))
    }

    /// Drop every task in the category. Returns how many were dropped.
    pub fn clear(&mut self, category: &str) -> Result<usize> {
        let tasks = self.tasks_mut(category)?;
        let count = tasks.len();
        tasks.clear();
        Ok(count)
    }

    pub fn top(&self, category: &str) -> Option<&str> {
        self.tasks(category)
            .and_then(|tasks| tasks.first())
            .map(String::as_str)
    }

    /// Names of all categories that still hold tasks, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.non_empty().into_keys().collect()
    }

    /// Remove categories whose task list is empty. Returns how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.categories.len();
        self.categories.retain(|_, tasks| !tasks.is_empty());
        before - self.categories.len()
    }
}
