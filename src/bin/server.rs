//! Real-time two-player SOS game server.
//!
//! Players connect over WebSocket, create or join a room by its short code,
//! and exchange moves; the server broadcasts synchronized game state.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin sosline-server
//! ```

use clap::Parser;

use sosline::logger::setup_logger;
use sosline::{ServerConfig, run};

#[derive(Debug, Parser)]
#[command(name = "sosline-server", about = "Real-time two-player SOS game server")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "debug")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };

    // Run the server
    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
