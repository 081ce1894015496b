pub mod provider;
pub mod openai;
pub mod router;
pub mod types;
pub mod catalog;

pub use provider::CompletionService;
pub use router::create_provider;
pub use types::{ChatMessage, CompletionParams, LLMResponse, Role};
