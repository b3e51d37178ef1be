//! WebSocket game server implementation.

mod handler;
mod runner;
mod signal;
pub mod state;

pub use runner::{ServerConfig, router, run};
