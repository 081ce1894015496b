use std::path::PathBuf;
use crate::cli::commands::ValidateArgs;
use crate::config::{self, credentials::redact_secret};
use crate::errors::MindwellError;

pub async fn handle_validate(args: ValidateArgs) -> Result<(), MindwellError> {
    let config = config::parse_config(&PathBuf::from(&args.config)).await?;

    println!("Configuration is valid: {}", args.config);
    println!("  listen:   {}:{}", config.server.host(), config.server.port());
    println!("  database: {}", config.server.db_path());
    println!("  owner:    {}", config.server.owner_id());
    println!("  provider: {}", config.llm.provider());
    println!("  api key:  {}", redact_secret(&config.llm.resolved_api_key()));
    println!("  timeout:  {}s", config.llm.timeout().as_secs());
    Ok(())
}
