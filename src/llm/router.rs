use std::sync::Arc;
use crate::errors::MindwellError;
use super::provider::CompletionService;
use super::openai::OpenAICompatibleProvider;
use super::catalog;

pub fn create_provider(
    provider_name: &str,
    api_key: &str,
    model: Option<&str>,
    base_url: Option<&str>,
) -> Result<Arc<dyn CompletionService>, MindwellError> {
    let info = catalog::get_provider(provider_name)
        .ok_or_else(|| MindwellError::Config(format!("Unknown LLM provider: {}", provider_name)))?;

    if api_key.is_empty() && !info.env_var.is_empty() {
        return Err(MindwellError::Config(format!(
            "{} requires an API key (set {} or llm.api_key)",
            info.name, info.env_var
        )));
    }

    let model = model.unwrap_or_else(|| catalog::get_default_model(provider_name));
    let url = base_url.unwrap_or(info.base_url);

    Ok(Arc::new(OpenAICompatibleProvider::new(info.id, api_key, model, url)))
}
