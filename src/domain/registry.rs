//! Session registry abstraction.
//!
//! ドメイン層が定義する SessionRegistry trait。
//! UseCase 層はこの trait に依存し、インメモリ実装（infrastructure 層）には
//! 直接依存しません（依存性の逆転）。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::UnboundedSender};

use super::{
    entity::{GameSession, GameSnapshot},
    error::RegistryError,
    value_object::{ClientId, RoomCode, Timestamp},
};

/// A session shared between connections, serialized by its own lock.
///
/// The lock is held for the full duration of every `add_player` /
/// `remove_player` / `apply_move` call and released before any broadcast,
/// so at most one event mutates a given session at a time while events on
/// different rooms proceed independently.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// Registry of live sessions plus connected client channels.
///
/// The implementation owns the code-to-session mapping behind its own lock,
/// separate from any individual session's lock: code generation is
/// check-and-insert atomic with respect to concurrent create requests, and
/// a destroy cannot race a concurrent lookup into a half-removed entry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Register a connected client's outbound channel.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateClientId` if a client with the same
    /// ID is already connected.
    async fn register_client(
        &self,
        client_id: ClientId,
        sender: UnboundedSender<String>,
        connected_at: Timestamp,
    ) -> Result<(), RegistryError>;

    /// Remove a client's outbound channel. Idempotent.
    async fn unregister_client(&self, client_id: &ClientId);

    /// Get the outbound channel of a connected client.
    async fn sender_for(&self, client_id: &ClientId) -> Option<UnboundedSender<String>>;

    /// Create a new empty session under a freshly generated, collision-free
    /// room code.
    async fn create_session(&self) -> (RoomCode, SharedSession);

    /// Look up a session by room code.
    async fn get_session(&self, room_code: &RoomCode) -> Option<SharedSession>;

    /// Remove a session only if it still has no seated players, re-checking
    /// under the map lock so a join that seated a player between the
    /// caller's observation and this call keeps the room alive. Returns
    /// whether the session was removed; absent codes return false.
    async fn destroy_if_empty(&self, room_code: &RoomCode) -> bool;

    /// Locate the session a client is seated in, scanning session
    /// membership. Used by the disconnect path, where only the connection
    /// identity is known.
    async fn find_session_of(&self, client_id: &ClientId) -> Option<(RoomCode, SharedSession)>;

    /// Snapshot every live session (observability endpoints).
    async fn snapshots(&self) -> Vec<GameSnapshot>;

    /// Number of connected clients.
    async fn count_connected_clients(&self) -> usize;
}
