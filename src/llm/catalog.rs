pub struct ProviderInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub env_var: &'static str,
    pub base_url: &'static str,
    pub models: &'static [ModelInfo],
}

pub struct ModelInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub recommended: bool,
}

pub const DEFAULT_PROVIDER: &str = "groq";

pub static PROVIDERS: &[ProviderInfo] = &[
    ProviderInfo {
        id: "groq",
        name: "Groq",
        env_var: "GROQ_API_KEY",
        base_url: "https://api.groq.com/openai/v1",
        models: &[
            ModelInfo { id: "meta-llama/llama-4-scout-17b-16e-instruct", label: "Llama 4 Scout", recommended: true },
            ModelInfo { id: "llama-3.3-70b-versatile", label: "Llama 3.3 70B", recommended: false },
            ModelInfo { id: "llama-3.1-8b-instant", label: "Llama 3.1 8B Instant", recommended: false },
        ],
    },
    ProviderInfo {
        id: "openai",
        name: "OpenAI",
        env_var: "OPENAI_API_KEY",
        base_url: "https://api.openai.com/v1",
        models: &[
            ModelInfo { id: "gpt-4o-mini", label: "GPT-4o Mini", recommended: true },
            ModelInfo { id: "gpt-4o", label: "GPT-4o", recommended: false },
        ],
    },
    ProviderInfo {
        id: "openrouter",
        name: "OpenRouter",
        env_var: "OPENROUTER_API_KEY",
        base_url: "https://openrouter.ai/api/v1",
        models: &[
            ModelInfo { id: "meta-llama/llama-4-scout", label: "Llama 4 Scout", recommended: true },
            ModelInfo { id: "anthropic/claude-sonnet-4-5-20250929", label: "Claude 4.5 Sonnet", recommended: false },
        ],
    },
    ProviderInfo {
        id: "local",
        name: "Local / Ollama",
        env_var: "",
        base_url: "http://localhost:11434/v1",
        models: &[
            ModelInfo { id: "llama3.2:3b", label: "Llama 3.2 3B", recommended: true },
        ],
    },
];

pub fn get_provider(id: &str) -> Option<&'static ProviderInfo> {
    PROVIDERS.iter().find(|p| p.id == id)
}

pub fn get_default_model(provider_id: &str) -> &'static str {
    get_provider(provider_id)
        .and_then(|provider| {
            provider.models.iter()
                .find(|m| m.recommended)
                .or_else(|| provider.models.first())
        })
        .map(|m| m.id)
        .unwrap_or("meta-llama/llama-4-scout-17b-16e-instruct")
}
