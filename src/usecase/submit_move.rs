//! UseCase: 着手処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SubmitMoveUseCase::execute() メソッド
//! - ルーム解決、セッションロック下での着手適用、スナップショット取得
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：着手の成否がセッションの状態機械に委譲される
//! - 拒否された着手が状態を変更しないことを保証
//! - 着手成功時のスナップショットがブロードキャスト可能な内容であることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：得点しない着手 / 得点する着手
//! - 異常系：存在しないルームコード
//! - 異常系：手番違い・占有セルなどセッション側での拒否

use std::sync::Arc;

use crate::domain::{ClientId, GameSnapshot, Mark, RoomCode, SessionRegistry};

use super::error::SubmitMoveError;

/// 着手のユースケース
pub struct SubmitMoveUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn SessionRegistry>,
}

impl SubmitMoveUseCase {
    /// 新しい SubmitMoveUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// 着手を実行
    ///
    /// # Arguments
    ///
    /// * `client_id` - 着手するクライアントの ID（Domain Model）
    /// * `raw_code` - 対象ルームのコード
    /// * `row`, `col` - 盤面座標
    /// * `mark` - 置くマーク（S / O）
    ///
    /// # Returns
    ///
    /// * `Ok(GameSnapshot)` - 着手適用後のセッション状態
    /// * `Err(SubmitMoveError)` - 拒否（状態は変更されない）
    pub async fn execute(
        &self,
        client_id: &ClientId,
        raw_code: &str,
        row: usize,
        col: usize,
        mark: Mark,
    ) -> Result<GameSnapshot, SubmitMoveError> {
        let room_code = RoomCode::new(raw_code.to_string())
            .map_err(|_| SubmitMoveError::RoomNotFound)?;

        let session = self
            .registry
            .get_session(&room_code)
            .await
            .ok_or(SubmitMoveError::RoomNotFound)?;

        let snapshot = {
            let mut session = session.lock().await;
            session.apply_move(client_id, row, col, mark)?;
            session.snapshot()
        };

        Ok(snapshot)
    }
}
