//! Chat input draft.

use crate::chat::replies::ReplySource;
use crate::chat::session::{ChatSession, SendError};
use crate::clock::Clock;
use crate::model::message::MessageId;

/// Text typed into the chat input, not yet sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatComposer {
    draft: String,
}

impl ChatComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Send button enabled state.
    pub fn can_send<C: Clock, R: ReplySource>(&self, session: &ChatSession<C, R>) -> bool {
        !self.draft.trim().is_empty() && !session.is_waiting()
    }

    /// Sends the draft; clears it only when the session accepted it.
    pub fn submit<C: Clock, R: ReplySource>(
        &mut self,
        session: &mut ChatSession<C, R>,
    ) -> Result<MessageId, SendError> {
        let id = session.send_message(self.draft.as_str())?.id;
        self.draft.clear();
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::ChatComposer;
    use crate::chat::replies::CannedReplies;
    use crate::chat::session::{ChatSession, ChatSessionOptions, SendError};
    use crate::clock::ManualClock;

    #[test]
    fn draft_is_kept_on_rejection_and_cleared_on_send() {
        let clock = ManualClock::new(0);
        let mut session = ChatSession::new(
            clock.clone(),
            CannedReplies::seeded(3),
            ChatSessionOptions::default(),
        );
        let mut composer = ChatComposer::new();

        composer.set_draft("   ");
        assert!(!composer.can_send(&session));
        assert_eq!(composer.submit(&mut session), Err(SendError::EmptyMessage));
        assert_eq!(composer.draft(), "   ");

        composer.set_draft("hello");
        assert!(composer.can_send(&session));
        composer.submit(&mut session).unwrap();
        assert_eq!(composer.draft(), "");

        composer.set_draft("again");
        assert!(!composer.can_send(&session));
        assert_eq!(composer.submit(&mut session), Err(SendError::ReplyPending));
        assert_eq!(composer.draft(), "again");
    }
}
