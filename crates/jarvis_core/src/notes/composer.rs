//! "New note" form state.

use crate::clock::Clock;
use crate::model::note::NoteId;
use crate::notes::store::{NoteError, NoteStore};

/// Drafts and visibility of the note creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteComposer {
    is_open: bool,
    title: String,
    content: String,
}

impl NoteComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Hides the form; drafts survive until the next successful save.
    pub fn cancel(&mut self) {
        self.is_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Creates a note from the drafts, then clears them and closes the form.
    ///
    /// On [`NoteError::EmptyTitle`] the form stays open with drafts intact.
    pub fn save<C: Clock>(&mut self, store: &mut NoteStore<C>) -> Result<NoteId, NoteError> {
        let id = store
            .create_note(self.title.as_str(), self.content.as_str())?
            .id;
        self.title.clear();
        self.content.clear();
        self.is_open = false;
        Ok(id)
    }
}
