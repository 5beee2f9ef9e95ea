//! In-memory note list.

use crate::clock::{Clock, IdAllocator};
use crate::model::note::{Note, NoteId};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const WELCOME_NOTE_TITLE: &str = "Bem-vindo ao Jarvis Notes";
pub const WELCOME_NOTE_CONTENT: &str = "Aqui você pode criar e organizar suas anotações.";

/// Why a note was not created. State is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteError {
    /// Title trims to nothing.
    EmptyTitle,
}

impl Display for NoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title is empty"),
        }
    }
}

impl Error for NoteError {}

/// Newest-first note list for one session.
pub struct NoteStore<C: Clock> {
    clock: C,
    ids: IdAllocator,
    notes: Vec<Note>,
}

impl<C: Clock> NoteStore<C> {
    /// Creates an empty store.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            ids: IdAllocator::new(),
            notes: Vec::new(),
        }
    }

    /// Creates a store holding the welcome note.
    pub fn seeded(clock: C) -> Self {
        let mut store = Self::new(clock);
        store.insert(WELCOME_NOTE_TITLE.to_string(), WELCOME_NOTE_CONTENT.to_string());
        store
    }

    /// Prepends a new note.
    ///
    /// # Errors
    /// - [`NoteError::EmptyTitle`] when `title` trims to empty.
    pub fn create_note(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<&Note, NoteError> {
        let title = title.into();
        if title.trim().is_empty() {
            debug!("event=note_create module=notes status=rejected reason=empty_title");
            return Err(NoteError::EmptyTitle);
        }
        let note = self.insert(title, content.into());
        info!(
            "event=note_create module=notes status=ok note_id={} title_chars={} content_chars={}",
            note.id,
            note.title.chars().count(),
            note.content.chars().count()
        );
        Ok(note)
    }

    /// Removes the note with `id`. Returns whether one was removed.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        let Some(index) = self.notes.iter().position(|note| note.id == id) else {
            debug!("event=note_delete module=notes status=noop note_id={id}");
            return false;
        };
        self.notes.remove(index);
        info!("event=note_delete module=notes status=ok note_id={id}");
        true
    }

    /// Notes, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn insert(&mut self, title: String, content: String) -> &Note {
        let now = self.clock.now_ms();
        // Keep the front note the newest if the wall clock steps back.
        let created_at = self
            .notes
            .first()
            .map_or(now, |newest| now.max(newest.created_at));
        let id = self.ids.next(created_at);
        self.notes.insert(
            0,
            Note {
                id,
                title,
                content,
                created_at,
            },
        );
        &self.notes[0]
    }
}
