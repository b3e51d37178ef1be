//! HTTP API response DTOs for the game server.

use serde::{Deserialize, Serialize};

/// Room summary for list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub room_code: String,
    pub players_connected: usize,
    pub game_over: bool,
    pub created_at: String, // ISO 8601
}

/// Room detail for detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub room_code: String,
    pub board_size: usize,
    pub players: Vec<PlayerDetailDto>,
    pub turn: String,
    pub scores: ScoresDto,
    pub game_over: bool,
    pub winner: Option<String>,
    pub created_at: String, // ISO 8601
}

/// Player detail for room detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDetailDto {
    pub client_id: String,
    pub role: String,
}

/// Scores for room detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoresDto {
    pub first: u32,
    pub second: u32,
}
