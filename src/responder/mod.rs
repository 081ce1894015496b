//! Crisis-aware reply pipeline: classify risk, compose the system directive,
//! assemble the conversation and call the completion service once.

pub mod classifier;
pub mod prompt;
pub mod assembler;
pub mod invoker;

use std::sync::Arc;
use std::time::Duration;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info};
use crate::errors::MindwellError;
use crate::llm::{ChatMessage, CompletionService};

pub use classifier::{classify, RiskAssessment, CRISIS_KEYWORDS};
pub use prompt::compose;
pub use assembler::{assemble, CompletionRequest};
pub use invoker::{CompletionInvoker, CompletionResult, COMPLETION_PARAMS, DEFAULT_TIMEOUT};

pub const INVALID_FORMAT: &str = "Invalid messages format";
pub const NO_USER_MESSAGE: &str = "No user message found";
pub const GENERATION_FAILED: &str = "Failed to generate response";

/// Errors surfaced to whoever called the responder. Only `BadRequest`
/// carries a caller-specific reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    InternalError(String),
}

pub struct Responder {
    invoker: CompletionInvoker,
}

impl Responder {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self::with_timeout(service, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(service: Arc<dyn CompletionService>, timeout: Duration) -> Self {
        Self { invoker: CompletionInvoker::new(service, timeout) }
    }

    /// Handle an untyped chat payload of the form `{"messages": [...]}`.
    pub async fn handle(&self, raw: &Value) -> Result<CompletionResult, RequestError> {
        let messages = parse_messages(raw).map_err(|e| {
            debug!(error = %e, "Rejected chat payload");
            RequestError::BadRequest(INVALID_FORMAT.to_string())
        })?;
        self.respond(&messages).await
    }

    /// Run the pipeline over an already-typed conversation.
    pub async fn respond(&self, messages: &[ChatMessage]) -> Result<CompletionResult, RequestError> {
        if messages.is_empty() {
            return Err(RequestError::BadRequest(INVALID_FORMAT.to_string()));
        }

        let risk = classify(messages)
            .map_err(|_| RequestError::BadRequest(NO_USER_MESSAGE.to_string()))?;
        info!(is_crisis = risk.is_crisis, message_count = messages.len(), "Assessed conversation risk");

        self.generate(messages, risk).await.map_err(|e| {
            let class = e.classify();
            error!(error_type = class.error_type, error = %e, "Error in chat pipeline");
            RequestError::InternalError(GENERATION_FAILED.to_string())
        })
    }

    async fn generate(&self, messages: &[ChatMessage], risk: RiskAssessment) -> Result<CompletionResult, MindwellError> {
        let directive = compose(risk);
        let request = assemble(directive, messages)?;
        self.invoker.invoke(&request, risk).await
    }
}

/// Parse `{"messages": [{role, content}, ...]}` into a non-empty conversation.
pub fn parse_messages(raw: &Value) -> Result<Vec<ChatMessage>, MindwellError> {
    let list = raw.get("messages")
        .and_then(Value::as_array)
        .ok_or_else(|| MindwellError::InvalidInput("`messages` must be an array".into()))?;

    if list.is_empty() {
        return Err(MindwellError::InvalidInput("`messages` is empty".into()));
    }

    list.iter()
        .enumerate()
        .map(|(i, item)| {
            ChatMessage::deserialize(item)
                .map_err(|e| MindwellError::InvalidInput(format!("message {}: {}", i, e)))
        })
        .collect()
}
