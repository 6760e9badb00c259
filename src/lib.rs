//! todo library - categorized task lists persisted to a YAML file

pub mod cli;
pub mod error;
pub mod store;

pub use error::{Result, TodoError};
