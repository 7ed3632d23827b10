//! Inbound HTTP surface: the rank route plus static files and CORS.

use std::path::Path;
use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::rank::RankLookup;

mod error;
mod routes;

pub type AppState = Arc<RankLookup>;

/// Build the application router. Paths other than the API route are served
/// from `static_dir`.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route(
            "/api/rank/{server}/{summoner_name}/{tag_line}",
            get(routes::get_rank),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(config: &Config, lookup: RankLookup) -> Result<(), AppError> {
    let app = router(Arc::new(lookup), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("🌐 Server listening at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
