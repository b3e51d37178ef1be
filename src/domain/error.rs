//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ClientId validation error
    #[error("ClientId cannot be empty")]
    ClientIdEmpty,

    /// ClientId too long error
    #[error("ClientId cannot exceed {max} characters (got {actual})")]
    ClientIdTooLong { max: usize, actual: usize },

    /// RoomCode length error
    #[error("RoomCode must be exactly {expected} characters (got {actual})")]
    RoomCodeInvalidLength { expected: usize, actual: usize },

    /// RoomCode character set error
    #[error("RoomCode must contain only A-Z and 0-9 (got: {0})")]
    RoomCodeInvalidCharacter(String),
}

/// Errors related to Board placement
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the board
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// Cell already holds a mark
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
}

/// Errors related to GameSession state transitions
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Both seats are taken
    #[error("room is already full")]
    RoomFull,

    /// The client already holds a seat in this session
    #[error("client is already seated in this session")]
    AlreadySeated,

    /// The client does not hold a seat in this session
    #[error("client is not seated in this session")]
    NotSeated,

    /// A move was submitted out of turn
    #[error("it is not this player's turn")]
    NotYourTurn,

    /// The session has already reached a terminal state
    #[error("the game is already over")]
    SessionOver,

    /// Board rejected the placement
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors related to the session registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A client with the same ID is already connected
    #[error("client '{0}' is already connected")]
    DuplicateClientId(String),
}
