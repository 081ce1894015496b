use crate::cli::commands::ChatArgs;
use crate::errors::MindwellError;
use crate::llm::ChatMessage;
use crate::models::{ResourceCategory, CRISIS_RESOURCES};
use crate::responder::{RequestError, Responder};

pub async fn handle_chat(args: ChatArgs) -> Result<(), MindwellError> {
    let config = super::load_config(&args.llm).await?;
    let service = super::build_service(&config)?;
    let responder = Responder::with_timeout(service, config.llm.timeout());

    let result = responder
        .respond(&[ChatMessage::user(&args.message)])
        .await
        .map_err(|e| match e {
            RequestError::BadRequest(msg) => MindwellError::InvalidInput(msg),
            RequestError::InternalError(msg) => MindwellError::CompletionFailure(msg),
        })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", result.reply_text);

    if result.is_crisis {
        println!();
        println!("If you are in danger or thinking about ending your life, please reach out now:");
        for resource in CRISIS_RESOURCES.iter().filter(|r| {
            matches!(r.category, ResourceCategory::Emergency | ResourceCategory::Hotline | ResourceCategory::TextLine)
        }) {
            println!("  - {}: {}", resource.name, resource.contact);
        }
    }

    Ok(())
}
