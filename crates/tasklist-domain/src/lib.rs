pub mod commands;
pub mod edit_cursor;
pub mod stats;
pub mod store;
pub mod task;

pub use edit_cursor::EditCursor;
pub use stats::TaskStats;
pub use store::TaskListStore;
pub use task::{Task, TaskId};
