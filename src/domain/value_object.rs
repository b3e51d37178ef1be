//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Length of a room code in characters
pub const ROOM_CODE_LENGTH: usize = 4;

/// Client identifier value object.
///
/// Represents a unique identifier for a connected game client. The value is
/// supplied by the transport layer (connection/session ID) and is never
/// mutated by the core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(String);

impl ClientId {
    /// Create a new ClientId.
    ///
    /// # Arguments
    ///
    /// * `id` - The client identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the ClientId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::ClientIdEmpty);
        }
        let len = id.len();
        if len > 100 {
            return Err(ValueObjectError::ClientIdTooLong {
                max: 100,
                actual: len,
            });
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ClientId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room code value object.
///
/// Represents the short code players exchange to join a room. Codes are
/// case-insensitive on the wire and normalized to uppercase here, so the
/// registry only ever sees one canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomCode(String);

impl RoomCode {
    /// Create a new RoomCode, normalizing the input to uppercase.
    ///
    /// # Arguments
    ///
    /// * `code` - The room code string (any case)
    ///
    /// # Returns
    ///
    /// A Result containing the RoomCode or an error if validation fails
    pub fn new(code: String) -> Result<Self, ValueObjectError> {
        let code = code.to_uppercase();
        let len = code.len();
        if len != ROOM_CODE_LENGTH {
            return Err(ValueObjectError::RoomCodeInvalidLength {
                expected: ROOM_CODE_LENGTH,
                actual: len,
            });
        }
        if !code.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()) {
            return Err(ValueObjectError::RoomCodeInvalidCharacter(code));
        }
        Ok(Self(code))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomCode {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (JST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    ///
    /// # Arguments
    ///
    /// * `value` - Unix timestamp in milliseconds
    ///
    /// # Returns
    ///
    /// A Timestamp instance
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
