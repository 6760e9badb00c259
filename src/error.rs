//! Error types for todo operations

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced to the user as a single printed message.
#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Malformed task file {}: {source}", path.display())]
    MalformedStore {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unknown command: {0} (try 'todo help')")]
    UnknownCommand(String),

    #[error("'{command}' needs at least {required} argument(s)")]
    InsufficientArguments {
        command: &'static str,
        required: usize,
    },

    #[error("Index {index} out of range for '{category}' ({len} tasks)")]
    IndexOutOfRange {
        category: String,
        index: usize,
        len: usize,
    },

    #[error("Task {0} is already at the top")]
    AlreadyAtTop(usize),

    #[error("Task {0} is already at the bottom")]
    AlreadyAtBottom(usize),

    #[error("No such category: {0}")]
    NoSuchCategory(String),

    #[error("Task text cannot be empty")]
    EmptyTask,

    #[error("Not a valid number: {0}")]
    InvalidNumber(String),

    #[error("Failed to serialize tasks: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TodoError>;
