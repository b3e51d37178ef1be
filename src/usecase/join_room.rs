//! UseCase: ルーム参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - ルームコードの正規化、存在確認、着席（Second ロールの割り当て）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：存在しないルームと満員のルームを区別して報告する
//! - 小文字のコードでも参加できること（大文字正規化）を保証
//! - 2 人目の参加で Waiting → Active に遷移することを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：2 人目の参加
//! - 異常系：存在しないルームコード / 不正な形式のコード
//! - 異常系：満員のルームへの参加試行 / 自分のルームへの参加試行
//! - 競合：参照取得と着席の間にルームが破棄されるケース

use std::sync::Arc;

use crate::domain::{ClientId, GameSnapshot, RoomCode, SessionError, SessionRegistry};

use super::error::JoinRoomError;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn SessionRegistry>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// ルーム参加を実行
    ///
    /// # Arguments
    ///
    /// * `client_id` - 参加するクライアントの ID（Domain Model）
    /// * `raw_code` - クライアントが入力したルームコード（大文字小文字不問）
    ///
    /// # Returns
    ///
    /// * `Ok(GameSnapshot)` - 参加直後のセッション状態
    /// * `Err(JoinRoomError)` - 参加失敗（要求元にのみ報告される）
    pub async fn execute(
        &self,
        client_id: ClientId,
        raw_code: &str,
    ) -> Result<GameSnapshot, JoinRoomError> {
        // 形式が不正なコードはどのルームにも一致しない
        let room_code = RoomCode::new(raw_code.to_string())
            .map_err(|_| JoinRoomError::RoomNotFound)?;

        let session = self
            .registry
            .get_session(&room_code)
            .await
            .ok_or(JoinRoomError::RoomNotFound)?;

        let snapshot = {
            let mut session = session.lock().await;
            session.add_player(client_id.clone()).map_err(|e| match e {
                SessionError::AlreadySeated => JoinRoomError::AlreadyInRoom,
                _ => JoinRoomError::RoomFull,
            })?;
            session.snapshot()
        };

        // 最後のプレイヤーの切断によるルーム破棄が、参照取得と着席の間に
        // 割り込むことがある。登録が消えていれば着席を取り消し、存在しない
        // ルームとして報告する
        let still_registered = self
            .registry
            .get_session(&room_code)
            .await
            .is_some_and(|current| Arc::ptr_eq(&current, &session));
        if !still_registered {
            session.lock().await.remove_player(&client_id);
            return Err(JoinRoomError::RoomNotFound);
        }

        Ok(snapshot)
    }
}
