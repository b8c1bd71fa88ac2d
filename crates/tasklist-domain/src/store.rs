use crate::task::normalize_text;
use crate::{EditCursor, Task, TaskId, TaskStats};

/// Owns the ordered task collection and the single edit cursor.
///
/// Every operation is total: empty text and unknown ids are absorbed as
/// no-ops. The return values only report whether anything changed.
#[derive(Debug, Clone)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    edit_cursor: Option<EditCursor>,
    next_id: u64,
}

impl TaskListStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            edit_cursor: None,
            next_id: 1,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn edit_cursor(&self) -> Option<&EditCursor> {
        self.edit_cursor.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit_cursor.is_some()
    }

    pub fn is_editing_task(&self, id: TaskId) -> bool {
        self.edit_cursor.as_ref().is_some_and(|c| c.targets(id))
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// Append a task with the trimmed text. Returns the new id, or `None`
    /// when the text is blank.
    pub fn add_task(&mut self, raw_text: &str) -> Option<TaskId> {
        let text = normalize_text(raw_text)?;
        let id = self.allocate_id();
        self.tasks.push(Task::new(id, text));
        Some(id)
    }

    /// Remove the task. Deleting the task under edit also closes the edit.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.tasks.remove(index);
        if self.is_editing_task(id) {
            self.edit_cursor = None;
        }
        true
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.toggle();
                true
            }
            None => false,
        }
    }

    /// Point the edit cursor at `id`, seeding the draft with the task's
    /// current text. Any draft already in progress is discarded.
    pub fn start_editing(&mut self, id: TaskId) -> bool {
        let Some(task) = self.get(id) else {
            return false;
        };
        self.edit_cursor = Some(EditCursor::new(id, task.text.clone()));
        true
    }

    /// Replace the draft verbatim. Ignored while no edit is open.
    pub fn update_draft_text(&mut self, text: impl Into<String>) -> bool {
        match self.edit_cursor.as_mut() {
            Some(cursor) => {
                cursor.draft_text = text.into();
                true
            }
            None => false,
        }
    }

    /// Commit the trimmed draft to the target task and close the edit. A
    /// blank draft is rejected and the edit stays open.
    pub fn save_edit(&mut self) -> bool {
        let Some(cursor) = self.edit_cursor.as_ref() else {
            return false;
        };
        let Some(text) = normalize_text(&cursor.draft_text) else {
            return false;
        };
        let target_id = cursor.target_id;
        self.edit_cursor = None;

        match self.find_mut(target_id) {
            Some(task) => {
                task.update_text(text);
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) -> bool {
        self.edit_cursor.take().is_some()
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}
