//! Router assembly and server loop.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    domain::SessionRegistry,
    infrastructure::repository::InMemorySessionRegistry,
    ui::{
        handler::{get_room_detail, get_rooms, health_check, websocket_handler},
        signal,
        state::AppState,
    },
};

/// Server bind configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Assemble the router over the given application state.
///
/// The registry is injected through `AppState` rather than accessed as
/// ambient global state, so tests can run isolated server instances side
/// by side.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/rooms", get(get_rooms))
        .route("/api/rooms/{room_code}", get(get_room_detail))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the game server until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), std::io::Error> {
    let registry: Arc<dyn SessionRegistry> = Arc::new(InMemorySessionRegistry::new());
    let state = Arc::new(AppState { registry });
    let app = router(state);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(signal::shutdown_signal())
        .await
}
