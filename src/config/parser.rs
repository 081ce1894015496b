use std::path::Path;
use crate::errors::MindwellError;
use crate::llm::catalog;
use super::types::{MindwellConfig, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS};
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

pub async fn parse_config(path: &Path) -> Result<MindwellConfig, MindwellError> {
    if !path.exists() {
        return Err(MindwellError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(MindwellError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

pub fn parse_config_str(content: &str) -> Result<MindwellConfig, MindwellError> {
    let mut yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    if yaml.is_null() {
        yaml = serde_yaml::Value::Mapping(serde_yaml::Mapping::new());
    }

    validate_schema(&yaml)?;

    let config: MindwellConfig = serde_yaml::from_value(yaml)?;

    validate_semantics(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), MindwellError> {
    // Convert YAML value to JSON for schema validation
    let json_str = serde_json::to_string(yaml)
        .map_err(|e| MindwellError::Config(format!("Config conversion error: {}", e)))?;
    let json_value: serde_json::Value = serde_json::from_str(&json_str)
        .map_err(|e| MindwellError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| MindwellError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        let messages: Vec<String> = errors
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() { e.to_string() } else { format!("{} at {}", e, path) }
            })
            .collect();
        if !messages.is_empty() {
            return Err(MindwellError::Config(messages.join("; ")));
        }
    }

    Ok(())
}

/// Checks the schema cannot express. Also run on the config after CLI flags
/// are merged in, since flags bypass the schema.
pub fn validate_semantics(config: &MindwellConfig) -> Result<(), MindwellError> {
    let provider = config.llm.provider();
    if catalog::get_provider(provider).is_none() {
        return Err(MindwellError::Config(format!("Unknown LLM provider: {}", provider)));
    }

    if let Some(secs) = config.llm.timeout_secs {
        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&secs) {
            return Err(MindwellError::Config(format!(
                "llm.timeout_secs must be between {} and {}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, secs
            )));
        }
    }

    if let Some(url) = config.llm.base_url.as_deref() {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(MindwellError::Config(format!("llm.base_url must be an http(s) URL: {}", url)));
        }
    }

    if config.llm.base_url.is_some() && provider != "local" {
        warn!(provider, "llm.base_url overrides the provider's default endpoint");
    }

    if let Some(key) = config.llm.api_key.as_deref() {
        if !key.is_empty() && !key.starts_with('$') {
            warn!("llm.api_key is stored in plain text; prefer a $ENV_VAR reference");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config_str(
            "server:\n  host: 0.0.0.0\n  port: 8080\n  owner_id: alex\nllm:\n  provider: groq\n  api_key: $GROQ_API_KEY\n  timeout_secs: 12\n",
        ).unwrap();
        assert_eq!(config.server.host(), "0.0.0.0");
        assert_eq!(config.server.port(), 8080);
        assert_eq!(config.server.owner_id(), "alex");
        assert_eq!(config.llm.timeout_secs, Some(12));
    }

    #[test]
    fn test_empty_file_is_default_config() {
        let config = parse_config_str("").unwrap();
        assert_eq!(config.llm.provider(), "groq");
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let err = parse_config_str("llm:\n  provider: acme\n").unwrap_err();
        assert!(matches!(err, MindwellError::Config(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(parse_config_str("llm:\n  timeout_secs: 0\n").is_err());
    }

    #[test]
    fn test_merged_overrides_are_revalidated() {
        let mut config = parse_config_str("").unwrap();
        config.llm.timeout_secs = Some(0);
        assert!(validate_semantics(&config).is_err());

        config.llm.timeout_secs = Some(45);
        config.llm.base_url = Some("localhost:8000/v1".into());
        assert!(validate_semantics(&config).is_err());

        config.llm.base_url = Some("http://localhost:8000/v1".into());
        assert!(validate_semantics(&config).is_ok());
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(parse_config_str("telemetry:\n  enabled: true\n").is_err());
    }

    #[test]
    fn test_malformed_yaml_is_yaml_error() {
        let err = parse_config_str("server: [unclosed").unwrap_err();
        assert!(matches!(err, MindwellError::Yaml(_)));
    }

    #[tokio::test]
    async fn test_parse_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  db_path: /tmp/mindwell-test.db").unwrap();
        let config = parse_config(file.path()).await.unwrap();
        assert_eq!(config.server.db_path(), "/tmp/mindwell-test.db");
    }

    #[tokio::test]
    async fn test_missing_file_rejected() {
        let err = parse_config(Path::new("/nonexistent/mindwell.yaml")).await.unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
