//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod create_room;
pub mod disconnect_player;
pub mod error;
pub mod join_room;
pub mod submit_move;

pub use create_room::CreateRoomUseCase;
pub use disconnect_player::{DisconnectOutcome, DisconnectPlayerUseCase};
pub use error::{JoinRoomError, SubmitMoveError};
pub use join_room::JoinRoomUseCase;
pub use submit_move::SubmitMoveUseCase;
