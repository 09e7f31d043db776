//! Massima Web Server
//!
//! Axum-based server for the judgment analyzer pages: the landing page
//! (example, input form, result) and the extraction-script viewer.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use massima_ai::Analyzer;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::landing::index))
        .route("/analyze", post(routes::landing::analyze))
        .route("/reset", post(routes::landing::reset))
        .route("/example", post(routes::landing::show_example))
        .route("/script", get(routes::script::index))
        .fallback(routes::landing::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(analyzer: Arc<dyn Analyzer>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(analyzer);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
