use super::Command;
use crate::{TaskId, TaskListStore};

/// Submit the text of a new task
pub struct AddTask {
    pub text: String,
}

impl Command for AddTask {
    fn execute(&self, store: &mut TaskListStore) -> bool {
        store.add_task(&self.text).is_some()
    }

    fn description(&self) -> String {
        format!("Add task: '{}'", self.text.trim())
    }
}

pub struct DeleteTask {
    pub id: TaskId,
}

impl Command for DeleteTask {
    fn execute(&self, store: &mut TaskListStore) -> bool {
        store.delete_task(self.id)
    }

    fn description(&self) -> String {
        format!("Delete task {}", self.id)
    }
}

pub struct ToggleTask {
    pub id: TaskId,
}

impl Command for ToggleTask {
    fn execute(&self, store: &mut TaskListStore) -> bool {
        store.toggle_complete(self.id)
    }

    fn description(&self) -> String {
        format!("Toggle task {}", self.id)
    }
}
