use crate::TaskId;

/// An edit in progress. The store holds at most one, as an `Option`, so the
/// target and its draft always appear and disappear together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCursor {
    pub target_id: TaskId,
    pub draft_text: String,
}

impl EditCursor {
    pub fn new(target_id: TaskId, draft_text: impl Into<String>) -> Self {
        Self {
            target_id,
            draft_text: draft_text.into(),
        }
    }

    pub fn targets(&self, id: TaskId) -> bool {
        self.target_id == id
    }
}
