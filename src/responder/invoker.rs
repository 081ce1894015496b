use std::sync::Arc;
use std::time::Duration;
use serde::Serialize;
use tracing::{debug, warn};
use crate::errors::MindwellError;
use crate::llm::{CompletionParams, CompletionService};
use super::assembler::CompletionRequest;
use super::classifier::RiskAssessment;

/// Sampling used for every support reply.
pub const COMPLETION_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.7,
    max_tokens: 500,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionResult {
    #[serde(rename = "response")]
    pub reply_text: String,
    #[serde(rename = "isCrisis")]
    pub is_crisis: bool,
}

pub struct CompletionInvoker {
    service: Arc<dyn CompletionService>,
    timeout: Duration,
}

impl CompletionInvoker {
    pub fn new(service: Arc<dyn CompletionService>, timeout: Duration) -> Self {
        Self { service, timeout }
    }

    /// Send the request upstream once. Every failure, including a timeout,
    /// comes back as `CompletionFailure`; an absent reply becomes "".
    pub async fn invoke(
        &self,
        request: &CompletionRequest,
        risk: RiskAssessment,
    ) -> Result<CompletionResult, MindwellError> {
        let messages = request.to_messages();

        let outcome = tokio::time::timeout(
            self.timeout,
            self.service.complete_chat(&messages, &COMPLETION_PARAMS),
        ).await;

        let response = match outcome {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                let class = e.classify();
                warn!(
                    provider = self.service.provider_name(),
                    error_type = class.error_type,
                    error = %e,
                    "Completion service failed"
                );
                return Err(MindwellError::CompletionFailure(e.to_string()));
            }
            Err(_) => {
                warn!(
                    provider = self.service.provider_name(),
                    timeout_secs = self.timeout.as_secs_f64(),
                    "Completion service timed out"
                );
                return Err(MindwellError::CompletionFailure(format!(
                    "no response within {:?}",
                    self.timeout
                )));
            }
        };

        let reply_text = response.content.unwrap_or_default();
        if reply_text.is_empty() {
            debug!(model = %response.model, "Completion returned no text");
        }

        Ok(CompletionResult { reply_text, is_crisis: risk.is_crisis })
    }
}
