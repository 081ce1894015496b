use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::errors::MindwellError;
use super::provider::CompletionService;
use super::types::{ChatMessage, CompletionParams, LLMResponse};
use tracing::debug;

/// Client for any backend speaking the OpenAI chat-completions protocol
/// (Groq, OpenAI, OpenRouter, Ollama).
pub struct OpenAICompatibleProvider {
    client: Client,
    provider: String,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAICompatibleProvider {
    pub fn new(provider: &str, api_key: &str, model: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            provider: provider.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn request_body(&self, messages: &[ChatMessage], params: &CompletionParams) -> Value {
        json!({
            "model": self.model,
            "messages": messages,
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
            "top_p": 1,
            "stream": false,
        })
    }
}

#[async_trait]
impl CompletionService for OpenAICompatibleProvider {
    async fn complete_chat(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<LLMResponse, MindwellError> {
        let body = self.request_body(messages, params);

        let mut request = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&body);
        if !self.api_key.is_empty() {
            request = request.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let resp = request
            .send()
            .await
            .map_err(|e| MindwellError::Network(format!("{} request failed: {}", self.provider, e)))?;

        let status = resp.status();
        if status.as_u16() == 429 {
            return Err(MindwellError::RateLimit(format!("{} rate limit", self.provider)));
        }
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(MindwellError::Authentication(format!("Invalid {} API key", self.provider)));
        }

        let data: Value = resp.json().await
            .map_err(|e| MindwellError::LLMApi(format!("Failed to parse {} response: {}", self.provider, e)))?;

        if !status.is_success() && data.get("error").is_none() {
            return Err(MindwellError::LLMApi(format!("{} returned HTTP {}", self.provider, status)));
        }

        let response = parse_completion(&data, &self.model)?;
        debug!(
            provider = %self.provider,
            model = %response.model,
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Chat completion"
        );
        Ok(response)
    }

    fn provider_name(&self) -> &str { &self.provider }
    fn model_name(&self) -> &str { &self.model }
}

/// Extract the first choice's text and token usage from a chat-completions payload.
/// A missing or null `content` is not an error.
pub(crate) fn parse_completion(data: &Value, requested_model: &str) -> Result<LLMResponse, MindwellError> {
    if let Some(error) = data.get("error") {
        let msg = error["message"].as_str()
            .or_else(|| error.as_str())
            .unwrap_or("Unknown error");
        return Err(MindwellError::LLMApi(msg.to_string()));
    }

    if !data["choices"].is_array() {
        return Err(MindwellError::LLMApi("No choices in completion response".into()));
    }

    let content = data["choices"][0]["message"]["content"].as_str().map(str::to_string);
    let model = data["model"].as_str().unwrap_or(requested_model).to_string();

    Ok(LLMResponse {
        content,
        input_tokens: data["usage"]["prompt_tokens"].as_u64(),
        output_tokens: data["usage"]["completion_tokens"].as_u64(),
        model,
    })
}
