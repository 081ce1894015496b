use crate::errors::MindwellError;
use crate::llm::{ChatMessage, Role};

/// A conversation ready to send upstream: one system directive followed by
/// the user/assistant history.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_directive: String,
    pub history: Vec<ChatMessage>,
}

impl CompletionRequest {
    /// Render as the wire message list, system message first.
    pub fn to_messages(&self) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.history.len() + 1);
        messages.push(ChatMessage::system(&self.system_directive));
        messages.extend(self.history.iter().cloned());
        messages
    }
}

/// Drop caller-supplied system messages and attach the composed directive.
pub fn assemble(system_directive: String, messages: &[ChatMessage]) -> Result<CompletionRequest, MindwellError> {
    let history: Vec<ChatMessage> = messages.iter()
        .filter(|m| match m.role {
            Role::User | Role::Assistant => true,
            Role::System => false,
        })
        .cloned()
        .collect();

    if history.is_empty() {
        return Err(MindwellError::InvalidInput("no user or assistant messages to send".into()));
    }

    Ok(CompletionRequest { system_directive, history })
}
