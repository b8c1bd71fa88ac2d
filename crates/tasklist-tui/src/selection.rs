/// Highlighted row of the task list, independent of the edit cursor.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    pub fn auto_select_first_if_empty(&mut self, has_items: bool) {
        if self.selected_index.is_none() && has_items {
            self.selected_index = Some(0);
        }
    }

    pub fn jump_to_first(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(0);
        }
    }

    pub fn jump_to_last(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(len - 1);
        }
    }

    /// Keep the index inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        self.selected_index = match self.selected_index {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => None,
        };
    }
}
