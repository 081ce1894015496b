use crate::cli::commands::ServeArgs;
use crate::errors::MindwellError;
use crate::api;
use tracing::info;

pub async fn handle_serve(args: ServeArgs) -> Result<(), MindwellError> {
    let mut config = super::load_config(&args.llm).await?;
    args.apply(&mut config);

    let service = super::build_service(&config)?;
    info!(
        provider = service.provider_name(),
        model = service.model_name(),
        db = config.server.db_path(),
        "Starting API server"
    );

    let state = api::create_app_state(&config, service)?;
    let app = api::build_router(state);

    let addr = format!("{}:{}", config.server.host(), config.server.port());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MindwellError::Internal(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown requested");
    }
}
