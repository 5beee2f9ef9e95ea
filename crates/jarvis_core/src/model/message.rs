//! Chat message record.

use crate::clock::EpochMs;
use serde::{Deserialize, Serialize};

/// Unique within one chat session; derived from creation time.
pub type MessageId = i64;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One entry of the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: MessageRole,
    /// Stored exactly as sent; only the emptiness check trims.
    pub content: String,
    /// Creation time in epoch milliseconds.
    pub timestamp: EpochMs,
}

impl Message {
    pub fn new(
        id: MessageId,
        role: MessageRole,
        content: impl Into<String>,
        timestamp: EpochMs,
    ) -> Self {
        Self {
            id,
            role,
            content: content.into(),
            timestamp,
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.role == MessageRole::User
    }
}

#[cfg(test)]
mod tests {
    use super::{Message, MessageRole};

    #[test]
    fn role_serializes_in_snake_case() {
        let message = Message::new(7, MessageRole::Assistant, "oi", 7);
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["id"], 7);
        assert!(!message.is_from_user());
    }
}
