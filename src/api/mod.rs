pub mod routes;
pub mod models;
pub mod errors;

use std::sync::Arc;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::config::MindwellConfig;
use crate::db::Database;
use crate::errors::MindwellError;
use crate::llm::CompletionService;
use crate::responder::Responder;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub responder: Arc<Responder>,
    /// Owner applied to every journal and mood operation
    pub owner_id: String,
}

pub fn create_app_state(
    config: &MindwellConfig,
    service: Arc<dyn CompletionService>,
) -> Result<AppState, MindwellError> {
    let db = Database::new(config.server.db_path())?;
    Ok(AppState {
        db,
        responder: Arc::new(Responder::with_timeout(service, config.llm.timeout())),
        owner_id: config.server.owner_id().to_string(),
    })
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/chat", post(routes::chat::chat))
        .route("/api/journal", get(routes::journal::list_entries).post(routes::journal::create_entry))
        .route("/api/journal/:id", put(routes::journal::update_entry).delete(routes::journal::delete_entry))
        .route("/api/mood", get(routes::mood::list_entries).post(routes::mood::create_entry))
        .route("/api/mood/trend", get(routes::mood::trend))
        .route("/api/crisis-resources", get(routes::resources::list_resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
