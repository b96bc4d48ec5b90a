use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: String,
    pub content: String,
}

/// Prior exchanges, in order. The transcript only grows; retention is the
/// session's problem, not the turn processor's.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ConversationMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    /// Records one completed user/assistant exchange.
    pub fn record_exchange(&mut self, user: &str, assistant: &str) {
        self.messages.push(ConversationMessage {
            role: "user".to_string(),
            content: user.to_string(),
        });
        self.messages.push(ConversationMessage {
            role: "assistant".to_string(),
            content: assistant.to_string(),
        });
    }
}
