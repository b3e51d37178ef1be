//! Shared fixtures for integration tests.
//!
//! Each test spawns its own server instance on a dedicated port so tests
//! can run in parallel without sharing registry state.

#![allow(dead_code)]

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

use sosline::{ServerConfig, run};

pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Spawn a server on the given port and wait until it accepts requests.
    pub async fn start(port: u16) -> Self {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port,
        };
        tokio::spawn(async move {
            if let Err(e) = run(config).await {
                panic!("Test server failed: {e}");
            }
        });

        let server = Self { port };
        server.wait_ready().await;
        server
    }

    async fn wait_ready(&self) {
        let client = reqwest::Client::new();
        let url = format!("{}/api/health", self.base_url());
        for _ in 0..40 {
            if let Ok(response) = client.get(&url).send().await
                && response.status().is_success()
            {
                return;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        panic!("Server on port {} did not become ready", self.port);
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn ws_url(&self, client_id: &str) -> String {
        format!("ws://127.0.0.1:{}/ws?client_id={}", self.port, client_id)
    }
}

/// Open a WebSocket connection for the given client id.
pub async fn connect_client(server: &TestServer, client_id: &str) -> WsClient {
    let (ws, _) = connect_async(server.ws_url(client_id))
        .await
        .expect("Failed to connect WebSocket");
    ws
}

/// Send a JSON value as a text frame.
pub async fn send_json(ws: &mut WsClient, value: &serde_json::Value) {
    ws.send(Message::text(value.to_string()))
        .await
        .expect("Failed to send message");
}

/// Receive the next text frame and parse it as JSON.
pub async fn recv_json(ws: &mut WsClient) -> serde_json::Value {
    loop {
        let msg = tokio::time::timeout(Duration::from_secs(2), ws.next())
            .await
            .expect("Timed out waiting for message")
            .expect("Connection closed")
            .expect("WebSocket error");
        if let Message::Text(text) = msg {
            return serde_json::from_str(text.as_str()).expect("Failed to parse JSON");
        }
    }
}

/// Assert that no frame arrives within a short window.
pub async fn assert_no_message(ws: &mut WsClient) {
    let result = tokio::time::timeout(Duration::from_millis(300), ws.next()).await;
    assert!(result.is_err(), "Expected no message, got {result:?}");
}
