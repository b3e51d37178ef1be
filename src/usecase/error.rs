//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::SessionError;

/// Errors returned by the join-room use case.
///
/// Both variants are reported to the requesting connection only, never
/// broadcast to the room.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum JoinRoomError {
    /// No session is registered under the requested code
    #[error("Room not found.")]
    RoomNotFound,

    /// Both seats are already taken
    #[error("This room is already full.")]
    RoomFull,

    /// The requester already holds a seat in this room
    #[error("You are already in this room.")]
    AlreadyInRoom,
}

/// Errors returned by the submit-move use case.
///
/// Rejected moves are terminal for that one request and are never surfaced
/// to other players; the client decides whether to resubmit.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMoveError {
    /// No session is registered under the requested code
    #[error("room not found")]
    RoomNotFound,

    /// The session rejected the move (wrong turn, occupied cell, ...)
    #[error("move rejected: {0}")]
    Rejected(#[from] SessionError),
}
