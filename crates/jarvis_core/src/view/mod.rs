//! Render-ready view models.
//!
//! # Responsibility
//! - Turn shell state into plain data a front-end draws verbatim.
//! - Own every user-visible string and display label format.
//!
//! # Invariants
//! - View models are snapshots; mutating them never touches shell state.

pub mod chat;
pub mod home;
pub mod labels;
pub mod nav;
pub mod notes;
