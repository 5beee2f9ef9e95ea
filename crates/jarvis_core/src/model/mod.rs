//! Session-scoped domain records.
//!
//! # Responsibility
//! - Define the records rendered by the chat, notes and home screens.
//!
//! # Invariants
//! - Records are immutable once created; stores only append, prepend or remove.
//! - Nothing here outlives the process.

pub mod message;
pub mod note;
pub mod screen;
