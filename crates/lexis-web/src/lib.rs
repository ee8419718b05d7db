//! Lexis Web Server
//!
//! Axum-based server for the text-analysis page. Actions are dispatched
//! through `lexis-core` and answered with HTMX fragments; busy-indicator
//! changes are pushed over a WebSocket.

pub mod routes;
pub mod state;
pub mod websocket;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use lexis_core::ClientConfig;
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

    let action_routes = Router::new()
        .route("/lemmatize", post(routes::actions::lemmatize))
        .route("/tag", post(routes::actions::tag))
        .route("/keywords", post(routes::actions::keywords))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::page::index))
        .nest("/actions", action_routes)
        .route("/api/status", get(routes::status::get_status))
        .route("/ws", get(websocket::ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(config: &ClientConfig, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(config).context("Failed to build analysis client")?;
    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(upstream = %config.base_url, "Web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
