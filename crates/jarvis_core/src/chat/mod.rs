//! Simulated assistant chat.
//!
//! # Responsibility
//! - Own the append-only transcript and the single pending reply.
//! - Pick canned replies; there is no real assistant behind this.
//!
//! # Invariants
//! - At most one reply is outstanding at any time.
//! - A rejected send leaves the transcript and waiting state untouched.

pub mod composer;
pub mod replies;
pub mod session;
