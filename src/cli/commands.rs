use clap::{Parser, Subcommand, Args};
use crate::config::MindwellConfig;

#[derive(Parser)]
#[command(name = "mindwell", version, about = "Crisis-aware emotional support chat, mood tracking and journaling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Send one message through the support pipeline and print the reply
    Chat(ChatArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
    /// List supported LLM providers and models
    Providers,
}

/// LLM and config options shared by commands that talk to a model.
#[derive(Args, Clone, Debug, Default)]
pub struct LlmArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// LLM provider: groq, openai, openrouter, local
    #[arg(long)]
    pub provider: Option<String>,

    /// LLM model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// LLM API key (or use env vars)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override the provider endpoint
    #[arg(long)]
    pub base_url: Option<String>,

    /// Seconds to wait for a completion (1-600)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=600))]
    pub timeout: Option<u64>,
}

impl LlmArgs {
    /// Flags take precedence over the config file.
    pub fn apply(&self, config: &mut MindwellConfig) {
        if let Some(provider) = &self.provider {
            config.llm.provider = Some(provider.clone());
        }
        if let Some(model) = &self.model {
            config.llm.model = Some(model.clone());
        }
        if let Some(key) = &self.api_key {
            config.llm.api_key = Some(key.clone());
        }
        if let Some(url) = &self.base_url {
            config.llm.base_url = Some(url.clone());
        }
        if let Some(secs) = self.timeout {
            config.llm.timeout_secs = Some(secs);
        }
    }
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub llm: LlmArgs,

    /// Listen port
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    /// SQLite database path
    #[arg(long)]
    pub db: Option<String>,

    /// Owner id for journal and mood entries
    #[arg(long)]
    pub owner: Option<String>,
}

impl ServeArgs {
    /// Server flags only; LLM flags are applied by `load_config`.
    pub fn apply(&self, config: &mut MindwellConfig) {
        if let Some(port) = self.port {
            config.server.port = Some(port);
        }
        if let Some(host) = &self.host {
            config.server.host = Some(host.clone());
        }
        if let Some(db) = &self.db {
            config.server.db_path = Some(db.clone());
        }
        if let Some(owner) = &self.owner {
            config.server.owner_id = Some(owner.clone());
        }
    }
}

#[derive(Args, Clone)]
pub struct ChatArgs {
    #[command(flatten)]
    pub llm: LlmArgs,

    /// Message to send
    pub message: String,

    /// Print the raw JSON result
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
