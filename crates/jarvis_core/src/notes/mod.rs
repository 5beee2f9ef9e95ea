//! Session notes.
//!
//! # Responsibility
//! - Keep notes newest-first and hand out stable ids.
//! - Track the "new note" form drafts.
//!
//! # Invariants
//! - Notes are never edited; only created (prepended) or deleted by id.
//! - Deleting an unknown id is a no-op, not an error.

pub mod composer;
pub mod store;
