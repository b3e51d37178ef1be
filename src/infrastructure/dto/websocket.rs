//! WebSocket message DTOs for the game server.

use serde::{Deserialize, Serialize};

use crate::domain::{GameSnapshot, Mark, Outcome, PatternLine, Role, Scores};

/// Message type enum for outbound messages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    GameState,
    Notification,
    Error,
}

/// Inbound message sent by a client over the WebSocket
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientMessage {
    /// Create a room and take the first seat
    CreateRoom,
    /// Join an existing room by code (case-insensitive)
    JoinRoom { room_code: String },
    /// Place a mark on the board
    SubmitMove {
        room_code: String,
        row: usize,
        col: usize,
        mark: Mark,
    },
}

/// Full game state broadcast after any state-changing event.
///
/// `your_role` is filled in per recipient; every other field is identical
/// for all members of the room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateMessage {
    pub r#type: MessageType,
    pub board_size: usize,
    pub room_code: String,
    /// Board contents as strings, `""` for an empty cell
    pub board: Vec<Vec<String>>,
    pub turn: Role,
    pub scores: Scores,
    pub game_over: bool,
    pub winner: Option<Outcome>,
    pub your_role: Option<Role>,
    pub players_connected: usize,
    pub last_pattern_lines: Vec<PatternLine>,
}

impl GameStateMessage {
    /// Build the game-state message one recipient sees from a snapshot.
    pub fn from_snapshot(snapshot: &GameSnapshot, your_role: Option<Role>) -> Self {
        let board = snapshot
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(|mark| mark.as_str().to_string()).unwrap_or_default())
                    .collect()
            })
            .collect();
        Self {
            r#type: MessageType::GameState,
            board_size: snapshot.board_size,
            room_code: snapshot.room_code.as_str().to_string(),
            board,
            turn: snapshot.turn,
            scores: snapshot.scores,
            game_over: snapshot.terminal,
            winner: snapshot.outcome,
            your_role,
            players_connected: snapshot.players_connected(),
            last_pattern_lines: snapshot.last_pattern_lines.clone(),
        }
    }
}

/// One-shot notification (e.g. opponent disconnected)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub r#type: MessageType,
    pub message: String,
}

impl NotificationMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            r#type: MessageType::Notification,
            message: message.into(),
        }
    }
}

/// Error reported to the originating connection only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub r#type: MessageType,
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            r#type: MessageType::Error,
            message: message.into(),
        }
    }
}
