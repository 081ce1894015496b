use async_trait::async_trait;
use crate::errors::MindwellError;
use super::types::{ChatMessage, CompletionParams, LLMResponse};

#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Chat completion over an ordered, role-tagged message list
    async fn complete_chat(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<LLMResponse, MindwellError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;

    /// Model identifier
    fn model_name(&self) -> &str;
}
