use crate::TaskListStore;

pub mod edit_commands;
pub mod task_commands;

pub use edit_commands::*;
pub use task_commands::*;

/// A user intent applied to the task list.
/// One command type exists per intent the front-end can issue.
pub trait Command: Send + Sync {
    /// Apply this command to the store. Returns `false` when the store
    /// absorbed it as a no-op.
    fn execute(&self, store: &mut TaskListStore) -> bool;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}
