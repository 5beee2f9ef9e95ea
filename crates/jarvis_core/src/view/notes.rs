//! Notes screen view model.

use crate::model::note::NoteId;
use serde::Serialize;

pub const NOTES_TITLE: &str = "Notas";
pub const EMPTY_NOTES_HINT: &str = "Nenhuma nota ainda";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteItem {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// `dd/mm/yyyy HH:MM`.
    pub created_label: String,
}

/// New-note form as shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComposerView {
    pub is_open: bool,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotesView {
    pub title: &'static str,
    /// Newest first.
    pub notes: Vec<NoteItem>,
    /// Set only when there are no notes.
    pub empty_hint: Option<&'static str>,
    pub composer: ComposerView,
}
