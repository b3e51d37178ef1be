//! InMemory SessionRegistry 実装
//!
//! ドメイン層が定義する SessionRegistry trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! ## ロック規律
//!
//! レジストリのマップロックと各セッションのロックは別物です。
//! コード生成と挿入はマップロックの下でアトミックに行い、セッションの
//! 変更中はマップロックを保持しません。`find_session_of` と
//! `destroy_if_empty` はマップロック保持中に各セッションを短時間
//! ロックしますが、逆順（セッションロック保持中にレジストリを呼ぶ経路）
//! は存在しないためデッドロックは起きません。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::UnboundedSender};

use crate::common::time::get_jst_timestamp;
use crate::domain::{
    ClientId, GameSession, GameSnapshot, RegistryError, RoomCode, RoomCodeFactory, SessionRegistry,
    SharedSession, Timestamp,
};

/// 接続中クライアントの情報（WebSocket sender を含む）
struct ClientConnection {
    /// Message sender channel
    sender: UnboundedSender<String>,
    /// Unix timestamp when connected (in JST, milliseconds)
    #[allow(dead_code)]
    connected_at: Timestamp,
}

/// インメモリ SessionRegistry 実装
///
/// ルームコード → セッションのマップと、接続中クライアントの送信
/// チャンネルを保持します。プロセス再起動で全ての状態は失われます。
pub struct InMemorySessionRegistry {
    /// ルームコード → セッション
    sessions: Mutex<HashMap<RoomCode, SharedSession>>,
    /// 接続中のクライアント情報
    connected_clients: Mutex<HashMap<ClientId, ClientConnection>>,
}

impl InMemorySessionRegistry {
    /// 新しい InMemorySessionRegistry を作成
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            connected_clients: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn register_client(
        &self,
        client_id: ClientId,
        sender: UnboundedSender<String>,
        connected_at: Timestamp,
    ) -> Result<(), RegistryError> {
        let mut clients = self.connected_clients.lock().await;
        if clients.contains_key(&client_id) {
            return Err(RegistryError::DuplicateClientId(
                client_id.as_str().to_string(),
            ));
        }
        clients.insert(
            client_id,
            ClientConnection {
                sender,
                connected_at,
            },
        );
        Ok(())
    }

    async fn unregister_client(&self, client_id: &ClientId) {
        let mut clients = self.connected_clients.lock().await;
        clients.remove(client_id);
    }

    async fn sender_for(&self, client_id: &ClientId) -> Option<UnboundedSender<String>> {
        let clients = self.connected_clients.lock().await;
        clients.get(client_id).map(|conn| conn.sender.clone())
    }

    async fn create_session(&self) -> (RoomCode, SharedSession) {
        // Generation and insertion stay under one lock so two concurrent
        // create requests can never claim the same code.
        let mut sessions = self.sessions.lock().await;
        let room_code = loop {
            let candidate =
                RoomCodeFactory::generate().expect("generated room codes always validate");
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
        };
        let session = Arc::new(Mutex::new(GameSession::new(
            room_code.clone(),
            Timestamp::new(get_jst_timestamp()),
        )));
        sessions.insert(room_code.clone(), session.clone());
        (room_code, session)
    }

    async fn get_session(&self, room_code: &RoomCode) -> Option<SharedSession> {
        let sessions = self.sessions.lock().await;
        sessions.get(room_code).cloned()
    }

    async fn destroy_if_empty(&self, room_code: &RoomCode) -> bool {
        let mut sessions = self.sessions.lock().await;
        let Some(session) = sessions.get(room_code) else {
            return false;
        };
        // Seat count is re-read under both locks: a join that already seated
        // a player keeps the room alive; a join still holding a stale Arc is
        // caught by its own post-seating registration check
        let empty = session.lock().await.seats.is_empty();
        if empty {
            sessions.remove(room_code);
        }
        empty
    }

    async fn find_session_of(&self, client_id: &ClientId) -> Option<(RoomCode, SharedSession)> {
        let sessions = self.sessions.lock().await;
        for (room_code, session) in sessions.iter() {
            let seated = session.lock().await.has_player(client_id);
            if seated {
                return Some((room_code.clone(), session.clone()));
            }
        }
        None
    }

    async fn snapshots(&self) -> Vec<GameSnapshot> {
        let sessions = self.sessions.lock().await;
        let mut snapshots = Vec::with_capacity(sessions.len());
        for session in sessions.values() {
            snapshots.push(session.lock().await.snapshot());
        }
        snapshots
    }

    async fn count_connected_clients(&self) -> usize {
        let clients = self.connected_clients.lock().await;
        clients.len()
    }
}
