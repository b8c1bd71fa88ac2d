use crate::error::TaskListError;

pub type TaskListResult<T> = Result<T, TaskListError>;
