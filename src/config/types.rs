use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::llm::catalog;
use super::credentials::resolve_credential;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_PATH: &str = "./data/mindwell.db";
pub const DEFAULT_OWNER_ID: &str = "user123";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 600;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct MindwellConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LLMConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub db_path: Option<String>,
    /// Owner id applied to journal and mood rows while the service runs without auth
    pub owner_id: Option<String>,
}

impl ServerConfig {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
    pub fn db_path(&self) -> &str {
        self.db_path.as_deref().unwrap_or(DEFAULT_DB_PATH)
    }
    pub fn owner_id(&self) -> &str {
        self.owner_id.as_deref().unwrap_or(DEFAULT_OWNER_ID)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LLMConfig {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl LLMConfig {
    pub fn provider(&self) -> &str {
        self.provider.as_deref().unwrap_or(catalog::DEFAULT_PROVIDER)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Configured key (with `$VAR` references resolved), else the provider's
    /// conventional environment variable, else empty.
    pub fn resolved_api_key(&self) -> String {
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            return resolve_credential(key);
        }
        catalog::get_provider(self.provider())
            .filter(|p| !p.env_var.is_empty())
            .and_then(|p| std::env::var(p.env_var).ok())
            .unwrap_or_default()
    }
}
