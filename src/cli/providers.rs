use crate::llm::catalog::PROVIDERS;

pub fn handle_providers() {
    for provider in PROVIDERS {
        let env = if provider.env_var.is_empty() { "no key" } else { provider.env_var };
        println!("{} ({}) [{}] {}", provider.name, provider.id, env, provider.base_url);
        for model in provider.models {
            let marker = if model.recommended { "*" } else { " " };
            println!("  {} {:<45} {}", marker, model.id, model.label);
        }
    }
}
