//! Chat transcript with one simulated, delayed reply.
//!
//! # Responsibility
//! - Append user messages on send and schedule one assistant reply.
//! - Resolve the reply when the injected clock reaches its due time.
//!
//! # Invariants
//! - Transcript is append-only; timestamps never decrease along it.
//! - A due reply is appended exactly once and cannot be cancelled.

use crate::chat::replies::{CannedReplies, ReplySource, GREETING};
use crate::clock::{Clock, EpochMs, IdAllocator};
use crate::model::message::{Message, MessageId, MessageRole};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reply latency of the simulated assistant.
pub const DEFAULT_REPLY_DELAY_MS: EpochMs = 1_000;

/// Why a send was refused. State is unchanged in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendError {
    /// Input trims to nothing.
    EmptyMessage,
    /// A previous send still waits for its reply.
    ReplyPending,
}

impl Display for SendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "message is empty"),
            Self::ReplyPending => write!(f, "assistant reply still pending"),
        }
    }
}

impl Error for SendError {}

/// Options for a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatSessionOptions {
    pub reply_delay_ms: EpochMs,
    /// Start with the assistant greeting.
    pub seeded: bool,
}

impl Default for ChatSessionOptions {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            seeded: true,
        }
    }
}

/// In-memory chat session.
pub struct ChatSession<C: Clock, R: ReplySource = CannedReplies> {
    clock: C,
    replies: R,
    ids: IdAllocator,
    messages: Vec<Message>,
    reply_delay_ms: EpochMs,
    reply_due_at: Option<EpochMs>,
}

impl<C: Clock, R: ReplySource> ChatSession<C, R> {
    pub fn new(clock: C, replies: R, options: ChatSessionOptions) -> Self {
        let mut session = Self {
            clock,
            replies,
            ids: IdAllocator::new(),
            messages: Vec::new(),
            reply_delay_ms: options.reply_delay_ms.max(0),
            reply_due_at: None,
        };
        if options.seeded {
            session.append(MessageRole::Assistant, GREETING.to_string());
        }
        session
    }

    /// Appends the user message and schedules the assistant reply.
    ///
    /// # Errors
    /// - [`SendError::EmptyMessage`] when `text` trims to empty.
    /// - [`SendError::ReplyPending`] while a previous reply is outstanding;
    ///   the send is dropped, not queued.
    pub fn send_message(&mut self, text: impl Into<String>) -> Result<&Message, SendError> {
        let text = text.into();
        if text.trim().is_empty() {
            debug!("event=chat_send module=chat status=rejected reason=empty");
            return Err(SendError::EmptyMessage);
        }
        if self.reply_due_at.is_some() {
            debug!("event=chat_send module=chat status=rejected reason=reply_pending");
            return Err(SendError::ReplyPending);
        }

        let len = text.chars().count();
        let (id, sent_at) = {
            let message = self.append(MessageRole::User, text);
            (message.id, message.timestamp)
        };
        let due_at = sent_at.saturating_add(self.reply_delay_ms);
        self.reply_due_at = Some(due_at);
        info!(
            "event=chat_send module=chat status=ok message_id={} chars={} reply_due_at={}",
            id, len, due_at
        );
        Ok(self.last())
    }

    /// Appends the pending reply if its due time has been reached.
    ///
    /// Returns the appended reply, or `None` when nothing was due.
    pub fn poll(&mut self) -> Option<&Message> {
        let due_at = self.reply_due_at?;
        if self.clock.now_ms() < due_at {
            return None;
        }

        let content = self.replies.next_reply();
        self.reply_due_at = None;
        let reply = self.append(MessageRole::Assistant, content);
        info!(
            "event=chat_reply module=chat status=ok message_id={} due_at={}",
            reply.id, due_at
        );
        Some(self.last())
    }

    /// Transcript, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|message| message.id == id)
    }

    /// Whether a reply is outstanding (typing indicator).
    pub fn is_waiting(&self) -> bool {
        self.reply_due_at.is_some()
    }

    pub fn reply_due_at(&self) -> Option<EpochMs> {
        self.reply_due_at
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn append(&mut self, role: MessageRole, content: String) -> &Message {
        let now = self.clock.now_ms();
        // Keep timestamps monotonic if the wall clock steps back.
        let timestamp = self
            .messages
            .last()
            .map_or(now, |previous| now.max(previous.timestamp));
        let id = self.ids.next(timestamp);
        self.messages.push(Message::new(id, role, content, timestamp));
        self.last()
    }

    fn last(&self) -> &Message {
        // Only called right after a push.
        &self.messages[self.messages.len() - 1]
    }
}
