use super::Command;
use crate::{TaskId, TaskListStore};

/// Open the edit cursor on a task
pub struct StartEditing {
    pub id: TaskId,
}

impl Command for StartEditing {
    fn execute(&self, store: &mut TaskListStore) -> bool {
        store.start_editing(self.id)
    }

    fn description(&self) -> String {
        format!("Start editing task {}", self.id)
    }
}

pub struct UpdateDraft {
    pub text: String,
}

impl Command for UpdateDraft {
    fn execute(&self, store: &mut TaskListStore) -> bool {
        store.update_draft_text(self.text.clone())
    }

    fn description(&self) -> String {
        "Update draft".to_string()
    }
}

pub struct SaveEdit;

impl Command for SaveEdit {
    fn execute(&self, store: &mut TaskListStore) -> bool {
        store.save_edit()
    }

    fn description(&self) -> String {
        "Save edit".to_string()
    }
}

pub struct CancelEdit;

impl Command for CancelEdit {
    fn execute(&self, store: &mut TaskListStore) -> bool {
        store.cancel_edit()
    }

    fn description(&self) -> String {
        "Cancel edit".to_string()
    }
}
