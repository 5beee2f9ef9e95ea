//! Core state and behavior for the Jarvis assistant shell.
//! Front-ends render the view models produced here and feed user input back.

pub mod chat;
pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod notes;
pub mod router;
pub mod shell;
pub mod view;

pub use chat::composer::ChatComposer;
pub use chat::replies::{CannedReplies, ReplySource, CANNED_REPLIES, GREETING};
pub use chat::session::{ChatSession, ChatSessionOptions, SendError, DEFAULT_REPLY_DELAY_MS};
pub use clock::{Clock, EpochMs, IdAllocator, ManualClock, SystemClock};
pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::message::{Message, MessageId, MessageRole};
pub use model::note::{Note, NoteId};
pub use model::screen::Screen;
pub use notes::composer::NoteComposer;
pub use notes::store::{NoteError, NoteStore};
pub use router::{Navigator, Router};
pub use shell::{Page, Shell, ShellFrame};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
