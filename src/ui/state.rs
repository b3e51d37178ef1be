//! Server state and connection management.

use serde::Deserialize;
use std::sync::Arc;

use crate::domain::SessionRegistry;

/// Query parameters for WebSocket connection
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    pub client_id: String,
}

/// Shared application state
pub struct AppState {
    /// Registry（データアクセス層の抽象化）
    pub registry: Arc<dyn SessionRegistry>,
}
