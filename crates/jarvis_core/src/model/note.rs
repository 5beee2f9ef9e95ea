//! Note record.

use crate::clock::EpochMs;
use serde::{Deserialize, Serialize};

/// Unique within one note store; derived from creation time.
pub type NoteId = i64;

/// A note as listed on the notes screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Non-blank when created; stored as typed.
    pub title: String,
    /// May be empty.
    pub content: String,
    pub created_at: EpochMs,
}
