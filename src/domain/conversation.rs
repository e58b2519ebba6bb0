//! Chat conversation sent to the generation service.

use serde::Serialize;

/// Author of a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
}

/// The framing and instruction pair sent for one request.
///
/// Always exactly two messages: system first, then user. No history is carried
/// between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: [ConversationMessage; 2],
}

impl Conversation {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: [
                ConversationMessage { role: Role::System, content: system.into() },
                ConversationMessage { role: Role::User, content: user.into() },
            ],
        }
    }

    pub fn messages(&self) -> &[ConversationMessage; 2] {
        &self.messages
    }

    pub fn system(&self) -> &str {
        &self.messages[0].content
    }

    pub fn user(&self) -> &str {
        &self.messages[1].content
    }

    /// Total characters across both messages.
    pub fn char_count(&self) -> usize {
        self.messages.iter().map(|message| message.content.chars().count()).sum()
    }
}
