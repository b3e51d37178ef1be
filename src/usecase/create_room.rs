//! UseCase: ルーム作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateRoomUseCase::execute() メソッド
//! - ルームの作成と作成者の着席（First ロールの割り当て）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：作成者が必ず First ロールで着席する
//! - 作成直後のセッションが Waiting 状態であることを保証
//! - Registry への登録（コードで lookup できること）を確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規ルームの作成と着席
//! - 正常系：連続した作成で異なるコードが割り当てられる

use std::sync::Arc;

use crate::domain::{ClientId, GameSnapshot, SessionError, SessionRegistry};

/// ルーム作成のユースケース
pub struct CreateRoomUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn SessionRegistry>,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// ルーム作成を実行
    ///
    /// # Arguments
    ///
    /// * `client_id` - 作成するクライアントの ID（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(GameSnapshot)` - 作成直後のセッション状態
    /// * `Err(SessionError)` - 着席失敗（空のセッションでは発生しない）
    pub async fn execute(&self, client_id: ClientId) -> Result<GameSnapshot, SessionError> {
        let (room_code, session) = self.registry.create_session().await;

        let snapshot = {
            let mut session = session.lock().await;
            session.add_player(client_id)?;
            session.snapshot()
        };

        tracing::info!("Room {} created", room_code);
        Ok(snapshot)
    }
}
