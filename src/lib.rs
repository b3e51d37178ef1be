//! Real-time two-player SOS board game server.
//!
//! This library provides a room-based game session server over WebSocket:
//! players create or join a room by short code, exchange moves, and receive
//! synchronized game-state broadcasts.

pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod logger;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::{ServerConfig, run};
