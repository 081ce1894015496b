pub mod commands;
pub mod serve;
pub mod chat;
pub mod validate;
pub mod providers;

pub use commands::{Cli, Commands};

use std::path::PathBuf;
use std::sync::Arc;
use crate::config::{self, MindwellConfig};
use crate::errors::MindwellError;
use crate::llm::{self, CompletionService};
use commands::LlmArgs;

/// Load the config file named by `--config`, or defaults, then apply flags
/// and re-check the merged result.
pub async fn load_config(args: &LlmArgs) -> Result<MindwellConfig, MindwellError> {
    let mut config = match &args.config {
        Some(path) => config::parse_config(&PathBuf::from(path)).await?,
        None => MindwellConfig::default(),
    };
    args.apply(&mut config);
    config::validate_semantics(&config)?;
    Ok(config)
}

pub fn build_service(config: &MindwellConfig) -> Result<Arc<dyn CompletionService>, MindwellError> {
    llm::create_provider(
        config.llm.provider(),
        &config.llm.resolved_api_key(),
        config.llm.model.as_deref(),
        config.llm.base_url.as_deref(),
    )
}
