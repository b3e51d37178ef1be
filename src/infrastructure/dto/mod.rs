//! Data transfer objects for the WebSocket protocol and HTTP API.

pub mod http;
pub mod websocket;
