//! Wire types for the chat and conversation endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /chat/stream`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub user_id: String,
    pub conversation_id: Option<Uuid>,
    pub timezone: Option<String>,
}

/// Body of `POST /conversations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationCreate {
    pub user_id: String,
    pub summary: Option<String>,
}

/// Body of `PUT /conversations/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationUpdate {
    pub summary: String,
}

/// One entry of the conversation history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub user_id: String,
    pub summary: Option<String>,
    /// ISO-8601 timestamp as sent by the server; may lack an offset.
    pub created_at: String,
}

impl Conversation {
    /// The summary, or a placeholder for conversations never summarised.
    pub fn title(&self) -> &str {
        match self.summary.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => "New Conversation",
        }
    }
}

/// A stored chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub conversation_id: Uuid,
    /// `user` or `bot`.
    pub sender_role: String,
    pub content: String,
    pub created_at: String,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// `GET /conversations/{id}`: a conversation with its messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationDetail {
    pub id: Uuid,
    pub user_id: String,
    pub summary: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub messages: Vec<Message>,
}
