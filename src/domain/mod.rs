//! Domain layer for the SOS game server.
//!
//! This module contains the game rules and session state machine that are
//! independent of data transfer objects (DTOs) and infrastructure concerns.

pub mod board;
pub mod entity;
pub mod error;
pub mod factory;
pub mod registry;
pub mod value_object;

pub use board::{Board, Cell, DEFAULT_BOARD_SIZE, Mark, PatternLine};
pub use entity::{
    GameSession, GameSnapshot, MoveResult, Outcome, Phase, PlayerExit, Role, Scores, Seat,
};
pub use error::{BoardError, RegistryError, SessionError, ValueObjectError};
pub use factory::RoomCodeFactory;
pub use registry::{SessionRegistry, SharedSession};
pub use value_object::{ClientId, ROOM_CODE_LENGTH, RoomCode, Timestamp};
