//! Chat screen view model.

use crate::model::message::{MessageId, MessageRole};
use serde::Serialize;

pub const CHAT_TITLE: &str = "Jarvis Chat";
pub const CHAT_PLACEHOLDER: &str = "Digite sua mensagem...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageItem {
    pub id: MessageId,
    pub role: MessageRole,
    pub content: String,
    /// `HH:MM`.
    pub time_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatView {
    pub title: &'static str,
    /// Oldest first.
    pub messages: Vec<MessageItem>,
    /// Typing indicator.
    pub is_waiting: bool,
    pub draft: String,
    pub placeholder: &'static str,
    pub can_send: bool,
}
