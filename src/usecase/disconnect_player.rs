//! UseCase: プレイヤー切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectPlayerUseCase::execute() メソッド
//! - 所属セッションの特定、座席削除、空セッションの破棄、不戦勝の判定
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：対戦中の切断で残ったプレイヤーが勝者になる
//! - 最後のプレイヤーの切断でセッションが破棄されることを保証
//! - 終了済みセッションからの切断が勝敗を変更しないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：対戦中の切断（不戦勝）
//! - エッジケース：最後のプレイヤーの切断（ルーム破棄）
//! - エッジケース：終了後の切断（勝敗は据え置き）
//! - 異常系：どのルームにも着席していないクライアントの切断

use std::sync::Arc;

use crate::domain::{ClientId, GameSnapshot, PlayerExit, Role, RoomCode, SessionRegistry};

/// 切断処理の結果
#[derive(Debug, Clone)]
pub enum DisconnectOutcome {
    /// どのセッションにも着席していなかった
    NotInRoom,
    /// 最後のプレイヤーが離脱し、セッションを破棄した
    RoomClosed { room_code: RoomCode },
    /// 対戦相手が残っており、不戦勝が成立した
    OpponentWins {
        winner: Role,
        snapshot: GameSnapshot,
    },
    /// 対戦相手が残っているが、ゲームはすでに終了していた
    AlreadyOver { snapshot: GameSnapshot },
}

/// プレイヤー切断のユースケース
pub struct DisconnectPlayerUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn SessionRegistry>,
}

impl DisconnectPlayerUseCase {
    /// 新しい DisconnectPlayerUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// プレイヤー切断を実行
    ///
    /// 送信チャンネルの登録解除、所属セッションからの座席削除、
    /// 空になったセッションの破棄までを行います。切断は常に成功します。
    ///
    /// # Arguments
    ///
    /// * `client_id` - 切断したクライアントの ID（Domain Model）
    pub async fn execute(&self, client_id: &ClientId) -> DisconnectOutcome {
        self.registry.unregister_client(client_id).await;

        let Some((room_code, session)) = self.registry.find_session_of(client_id).await else {
            return DisconnectOutcome::NotInRoom;
        };

        let (exit, snapshot) = {
            let mut session = session.lock().await;
            let exit = session.remove_player(client_id);
            (exit, session.snapshot())
        };

        match exit {
            // find_session_of と remove_player の間に座席が消えた場合
            PlayerExit::NotSeated => DisconnectOutcome::NotInRoom,
            PlayerExit::Empty => {
                // 空と観測してからロックを手放しているため、破棄は再確認付きで
                // 行う。間に着席があればルームは生き残る
                if self.registry.destroy_if_empty(&room_code).await {
                    tracing::info!("Room {} closed", room_code);
                    DisconnectOutcome::RoomClosed { room_code }
                } else {
                    DisconnectOutcome::NotInRoom
                }
            }
            PlayerExit::DisconnectWin(winner) => DisconnectOutcome::OpponentWins {
                winner,
                snapshot,
            },
            PlayerExit::Departed(_) => DisconnectOutcome::AlreadyOver { snapshot },
        }
    }
}
