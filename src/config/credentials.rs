use tracing::{debug, warn};

/// Resolve a credential value. If the value starts with '$', treat it as an
/// environment variable reference and resolve from the environment. An unset
/// reference resolves to "" so callers see the key as missing.
pub fn resolve_credential(value: &str) -> String {
    if let Some(var_name) = value.strip_prefix('$') {
        match std::env::var(var_name) {
            Ok(resolved) => {
                debug!(var = %var_name, "Resolved credential from environment");
                resolved
            }
            Err(_) => {
                warn!(var = %var_name, "Credential references an unset environment variable");
                String::new()
            }
        }
    } else {
        value.to_string()
    }
}

/// Mask a secret for display, keeping a short prefix so operators can tell
/// keys apart.
pub fn redact_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }
    let prefix: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 8 {
        "[REDACTED]".to_string()
    } else {
        format!("{}…[REDACTED]", prefix)
    }
}
