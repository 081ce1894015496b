use crate::errors::MindwellError;
use crate::llm::{ChatMessage, Role};

/// Phrases whose presence anywhere in the latest user message switches the
/// responder into crisis mode. Matching is case-insensitive substring
/// containment; keywords must stay lowercase.
pub const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "want to die",
    "harm myself",
    "self harm",
    "hurt myself",
    "no reason to live",
    "better off dead",
    "can't go on",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskAssessment {
    pub is_crisis: bool,
}

/// Assess the most recent user message for self-harm signals.
pub fn classify(messages: &[ChatMessage]) -> Result<RiskAssessment, MindwellError> {
    if messages.is_empty() {
        return Err(MindwellError::InvalidInput("conversation is empty".into()));
    }

    let last_user = messages.iter()
        .rev()
        .find(|m| m.role == Role::User)
        .ok_or_else(|| MindwellError::InvalidInput("no user message in conversation".into()))?;

    let text = last_user.content.to_lowercase();
    let is_crisis = CRISIS_KEYWORDS.iter().any(|keyword| text.contains(keyword));

    Ok(RiskAssessment { is_crisis })
}
