//! Domain factories for creating domain entities and value objects.

use rand::Rng;

use super::{ROOM_CODE_LENGTH, RoomCode, error::ValueObjectError};

/// Characters a generated room code draws from
const ROOM_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Factory for generating RoomCode instances.
///
/// This factory encapsulates the logic for generating new room codes,
/// separating the generation concern from the validation logic in RoomCode.
/// Uniqueness against live sessions is the registry's job, not the
/// factory's: the registry retries generation under its own lock until the
/// code is free.
pub struct RoomCodeFactory;

impl RoomCodeFactory {
    /// Generate a new random room code (A-Z, 0-9).
    ///
    /// # Errors
    ///
    /// This method should not fail in practice, but returns Result for
    /// consistency with the domain error handling pattern.
    pub fn generate() -> Result<RoomCode, ValueObjectError> {
        let mut rng = rand::rng();
        let code: String = (0..ROOM_CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..ROOM_CODE_CHARSET.len());
                ROOM_CODE_CHARSET[idx] as char
            })
            .collect();
        RoomCode::new(code)
    }
}
