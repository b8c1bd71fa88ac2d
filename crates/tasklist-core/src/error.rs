use std::path::PathBuf;
use thiserror::Error;

/// Failures of the surfaces around the task list (terminal, config file).
///
/// Task list operations themselves never fail: invalid input is absorbed
/// as a no-op by the store.
#[derive(Error, Debug)]
pub enum TaskListError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskListError {
    pub fn config(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Config {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
