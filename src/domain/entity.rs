//! Core domain models for the SOS game server.

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, DEFAULT_BOARD_SIZE, Mark, PatternLine},
    error::SessionError,
    value_object::{ClientId, RoomCode, Timestamp},
};

/// Maximum number of players seated in one session
pub const PLAYER_CAPACITY: usize = 2;

/// Player role, assigned by seat insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    First,
    Second,
}

impl Role {
    /// Get the opposing role.
    pub fn other(self) -> Self {
        match self {
            Role::First => Role::Second,
            Role::Second => Role::First,
        }
    }
}

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// One player seated, waiting for an opponent
    Waiting,
    /// Two players seated, game in progress
    Active,
    /// Outcome decided; state is frozen except for destruction
    Terminal,
}

/// Final result of a terminal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Draw,
}

impl Outcome {
    /// The winning outcome for the given role.
    pub fn win_for(role: Role) -> Self {
        match role {
            Role::First => Outcome::FirstWins,
            Role::Second => Outcome::SecondWins,
        }
    }
}

/// Per-role pattern counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub first: u32,
    pub second: u32,
}

impl Scores {
    /// Get the score of a role.
    pub fn of(&self, role: Role) -> u32 {
        match role {
            Role::First => self.first,
            Role::Second => self.second,
        }
    }

    fn add(&mut self, role: Role, points: u32) {
        match role {
            Role::First => self.first += points,
            Role::Second => self.second += points,
        }
    }
}

/// A seated player: connection identity plus assigned role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub client_id: ClientId,
    pub role: Role,
}

/// Result of a player leaving a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerExit {
    /// The client held no seat; nothing changed
    NotSeated,
    /// No players remain; the caller destroys the session
    Empty,
    /// One player remains and the session was not yet terminal; the
    /// remaining role wins by default
    DisconnectWin(Role),
    /// One player remains but the game had already ended
    Departed(Role),
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Role that made the move
    pub role: Role,
    /// Number of patterns the move completed (0-4)
    pub scored: u32,
    /// Coordinate lines of the completed patterns
    pub lines: Vec<PatternLine>,
}

/// One isolated two-player match: board, seats, turn state, and scores.
///
/// All mutation goes through [`GameSession::add_player`],
/// [`GameSession::remove_player`] and [`GameSession::apply_move`]; the
/// caller is responsible for serializing those calls per session (see the
/// registry, which wraps each session in its own lock).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Room code, assigned at creation, immutable
    pub room_code: RoomCode,
    /// Seated players in insertion order (first joiner gets `Role::First`)
    pub seats: Vec<Seat>,
    /// Owned board
    pub board: Board,
    /// Role that may move next; meaningful only while not terminal
    pub turn: Role,
    /// Completed pattern counts per role
    pub scores: Scores,
    /// Lifecycle phase; `Terminal` is monotonic
    pub phase: Phase,
    /// Final result; only set when the phase is `Terminal`
    pub outcome: Option<Outcome>,
    /// Pattern lines completed by the most recent scoring move, cleared by
    /// a non-scoring move
    pub last_pattern_lines: Vec<PatternLine>,
    /// Timestamp when the session was created
    pub created_at: Timestamp,
}

impl GameSession {
    /// Create a new empty session with the default board size.
    pub fn new(room_code: RoomCode, created_at: Timestamp) -> Self {
        Self::with_board_size(room_code, created_at, DEFAULT_BOARD_SIZE)
    }

    /// Create a new empty session with a custom board size.
    pub fn with_board_size(room_code: RoomCode, created_at: Timestamp, board_size: usize) -> Self {
        Self {
            room_code,
            seats: Vec::new(),
            board: Board::new(board_size),
            turn: Role::First,
            scores: Scores::default(),
            phase: Phase::Waiting,
            outcome: None,
            last_pattern_lines: Vec::new(),
            created_at,
        }
    }

    /// True iff the client holds a seat in this session.
    pub fn has_player(&self, client_id: &ClientId) -> bool {
        self.seats.iter().any(|seat| &seat.client_id == client_id)
    }

    /// Get the role of a seated client.
    pub fn role_of(&self, client_id: &ClientId) -> Option<Role> {
        self.seats
            .iter()
            .find(|seat| &seat.client_id == client_id)
            .map(|seat| seat.role)
    }

    /// Seat a player, assigning the next free role.
    ///
    /// The session transitions `Waiting` to `Active` when the second
    /// player joins. One connection holds at most one seat, so a client
    /// cannot occupy both sides of its own room.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadySeated` if the client already holds a
    /// seat, `SessionError::RoomFull` if both seats are already taken.
    pub fn add_player(&mut self, client_id: ClientId) -> Result<Role, SessionError> {
        if self.has_player(&client_id) {
            return Err(SessionError::AlreadySeated);
        }
        if self.seats.len() >= PLAYER_CAPACITY {
            return Err(SessionError::RoomFull);
        }
        let role = if self.seats.is_empty() {
            Role::First
        } else {
            Role::Second
        };
        self.seats.push(Seat { client_id, role });
        if self.seats.len() == PLAYER_CAPACITY && self.phase == Phase::Waiting {
            self.phase = Phase::Active;
        }
        Ok(role)
    }

    /// Remove a player's seat.
    ///
    /// When exactly one player remains and the game had not already ended,
    /// the session becomes terminal with the remaining role winning by
    /// default, regardless of score. A departure after the game ended
    /// removes the seat without touching the outcome.
    pub fn remove_player(&mut self, client_id: &ClientId) -> PlayerExit {
        let Some(pos) = self
            .seats
            .iter()
            .position(|seat| &seat.client_id == client_id)
        else {
            return PlayerExit::NotSeated;
        };
        self.seats.remove(pos);

        match self.seats.first() {
            None => PlayerExit::Empty,
            Some(seat) => {
                let remaining = seat.role;
                if self.phase != Phase::Terminal {
                    self.phase = Phase::Terminal;
                    self.outcome = Some(Outcome::win_for(remaining));
                    PlayerExit::DisconnectWin(remaining)
                } else {
                    PlayerExit::Departed(remaining)
                }
            }
        }
    }

    /// Apply a move for the given client.
    ///
    /// A scoring move adds the pattern count to the mover's score, replaces
    /// `last_pattern_lines`, and keeps the turn; a non-scoring move clears
    /// `last_pattern_lines` and passes the turn. Filling the last cell ends
    /// the game by score comparison, even when that same move scored.
    ///
    /// # Errors
    ///
    /// Rejected without mutation when the session is terminal, the client
    /// holds no seat, it is not the client's turn, or the placement itself
    /// fails (occupied cell, out-of-range coordinate).
    pub fn apply_move(
        &mut self,
        client_id: &ClientId,
        row: usize,
        col: usize,
        mark: Mark,
    ) -> Result<MoveResult, SessionError> {
        if self.phase == Phase::Terminal {
            return Err(SessionError::SessionOver);
        }
        let role = self.role_of(client_id).ok_or(SessionError::NotSeated)?;
        if role != self.turn {
            return Err(SessionError::NotYourTurn);
        }

        self.board.place(row, col, mark)?;

        let lines = self.board.scan_patterns(row, col);
        let scored = lines.len() as u32;
        if scored > 0 {
            self.scores.add(role, scored);
            self.last_pattern_lines = lines.clone();
        } else {
            self.last_pattern_lines.clear();
            self.turn = self.turn.other();
        }

        if self.board.is_full() {
            self.phase = Phase::Terminal;
            self.outcome = Some(if self.scores.first > self.scores.second {
                Outcome::FirstWins
            } else if self.scores.second > self.scores.first {
                Outcome::SecondWins
            } else {
                Outcome::Draw
            });
        }

        Ok(MoveResult {
            role,
            scored,
            lines,
        })
    }

    /// Capture an immutable snapshot of the session state.
    ///
    /// The caller takes the snapshot while holding the session lock and
    /// broadcasts from it after the lock is released.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            room_code: self.room_code.clone(),
            board_size: self.board.size(),
            cells: self.board.rows(),
            turn: self.turn,
            scores: self.scores,
            terminal: self.phase == Phase::Terminal,
            outcome: self.outcome,
            seats: self.seats.clone(),
            last_pattern_lines: self.last_pattern_lines.clone(),
            created_at: self.created_at,
        }
    }
}

/// Immutable capture of a session's state at one point in time.
///
/// Everything the outbound layer needs is copied out, so broadcasts never
/// reach back into a locked session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub room_code: RoomCode,
    pub board_size: usize,
    pub cells: Vec<Vec<Option<Mark>>>,
    pub turn: Role,
    pub scores: Scores,
    pub terminal: bool,
    pub outcome: Option<Outcome>,
    pub seats: Vec<Seat>,
    pub last_pattern_lines: Vec<PatternLine>,
    pub created_at: Timestamp,
}

impl GameSnapshot {
    /// Number of players seated when the snapshot was taken.
    pub fn players_connected(&self) -> usize {
        self.seats.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::BoardError;
    use crate::domain::factory::RoomCodeFactory;

    fn client(id: &str) -> ClientId {
        ClientId::new(id.to_string()).unwrap()
    }

    fn session_with_board_size(size: usize) -> GameSession {
        GameSession::with_board_size(
            RoomCodeFactory::generate().unwrap(),
            Timestamp::new(1000),
            size,
        )
    }

    fn two_player_session(size: usize) -> GameSession {
        let mut session = session_with_board_size(size);
        session.add_player(client("alice")).unwrap();
        session.add_player(client("bob")).unwrap();
        session
    }

    #[test]
    fn test_session_new_is_waiting() {
        // テスト項目: 新しいセッションは Waiting 状態で作成される
        // when (操作):
        let session = session_with_board_size(DEFAULT_BOARD_SIZE);

        // then (期待する結果):
        assert_eq!(session.phase, Phase::Waiting);
        assert_eq!(session.seats.len(), 0);
        assert_eq!(session.turn, Role::First);
        assert_eq!(session.scores, Scores::default());
        assert_eq!(session.outcome, None);
    }

    #[test]
    fn test_add_player_assigns_roles_in_order() {
        // テスト項目: 参加順に First / Second のロールが割り当てられる
        // given (前提条件):
        let mut session = session_with_board_size(DEFAULT_BOARD_SIZE);

        // when (操作):
        let role1 = session.add_player(client("alice")).unwrap();
        let role2 = session.add_player(client("bob")).unwrap();

        // then (期待する結果):
        assert_eq!(role1, Role::First);
        assert_eq!(role2, Role::Second);
        assert_eq!(session.phase, Phase::Active);
    }

    #[test]
    fn test_add_player_twice_rejected() {
        // テスト項目: 着席済みのクライアントは自分のルームの 2 つ目の座席を取れない
        // given (前提条件): alice が 1 人で着席している
        let mut session = session_with_board_size(DEFAULT_BOARD_SIZE);
        session.add_player(client("alice")).unwrap();

        // when (操作): alice がもう一度着席を試みる
        let result = session.add_player(client("alice"));

        // then (期待する結果): 座席は 1 つのまま
        assert_eq!(result, Err(SessionError::AlreadySeated));
        assert_eq!(session.seats.len(), 1);
        assert_eq!(session.phase, Phase::Waiting);
    }

    #[test]
    fn test_sole_player_leaving_after_rejoin_attempt_empties_session() {
        // テスト項目: 再着席を拒否された唯一のプレイヤーの離脱でセッションが空になる
        // given (前提条件): alice の再着席が拒否された状態
        let mut session = session_with_board_size(DEFAULT_BOARD_SIZE);
        let alice = client("alice");
        session.add_player(alice.clone()).unwrap();
        assert!(session.add_player(alice.clone()).is_err());

        // when (操作): alice が切断する
        let exit = session.remove_player(&alice);

        // then (期待する結果): 不戦勝ではなく Empty が返り、破棄対象になる
        assert_eq!(exit, PlayerExit::Empty);
        assert_eq!(session.seats.len(), 0);
    }

    #[test]
    fn test_add_third_player_fails() {
        // テスト項目: 3 人目の参加は RoomFull エラーになる
        // given (前提条件):
        let mut session = two_player_session(DEFAULT_BOARD_SIZE);

        // when (操作):
        let result = session.add_player(client("charlie"));

        // then (期待する結果):
        assert_eq!(result, Err(SessionError::RoomFull));
        assert_eq!(session.seats.len(), 2);
    }

    #[test]
    fn test_apply_move_out_of_turn_rejected() {
        // テスト項目: 手番でないプレイヤーの着手は拒否され、状態は変化しない
        // given (前提条件):
        let mut session = two_player_session(DEFAULT_BOARD_SIZE);

        // when (操作): Second の bob が先に着手する
        let result = session.apply_move(&client("bob"), 0, 0, Mark::S);

        // then (期待する結果):
        assert_eq!(result, Err(SessionError::NotYourTurn));
        assert_eq!(session.board.mark_at(0, 0), None);
        assert_eq!(session.turn, Role::First);
    }

    #[test]
    fn test_apply_move_not_seated_rejected() {
        // テスト項目: 着席していないクライアントの着手は拒否される
        // given (前提条件):
        let mut session = two_player_session(DEFAULT_BOARD_SIZE);

        // when (操作):
        let result = session.apply_move(&client("mallory"), 0, 0, Mark::S);

        // then (期待する結果):
        assert_eq!(result, Err(SessionError::NotSeated));
    }

    #[test]
    fn test_apply_move_occupied_cell_rejected() {
        // テスト項目: 占有済みセルへの着手は手番に関係なく拒否される
        // given (前提条件):
        let mut session = two_player_session(DEFAULT_BOARD_SIZE);
        session.apply_move(&client("alice"), 0, 0, Mark::S).unwrap();

        // when (操作): 手番の bob が同じセルに着手する
        let result = session.apply_move(&client("bob"), 0, 0, Mark::O);

        // then (期待する結果):
        assert_eq!(
            result,
            Err(SessionError::Board(BoardError::CellOccupied {
                row: 0,
                col: 0
            }))
        );
        assert_eq!(session.board.mark_at(0, 0), Some(Mark::S));
        assert_eq!(session.turn, Role::Second);
    }

    #[test]
    fn test_non_scoring_move_passes_turn() {
        // テスト項目: 得点しない着手で手番が相手に移り、lastPatternLines がクリアされる
        // given (前提条件):
        let mut session = two_player_session(DEFAULT_BOARD_SIZE);

        // when (操作):
        let result = session.apply_move(&client("alice"), 0, 0, Mark::S).unwrap();

        // then (期待する結果):
        assert_eq!(result.scored, 0);
        assert_eq!(session.turn, Role::Second);
        assert!(session.last_pattern_lines.is_empty());
    }

    #[test]
    fn test_scoring_move_keeps_turn() {
        // テスト項目: 得点する着手では手番が移らず、得点とパターンが記録される
        // given (前提条件): S(0,0)、S(2,2) を配置して対角線を準備する
        let mut session = two_player_session(DEFAULT_BOARD_SIZE);
        session.apply_move(&client("alice"), 0, 0, Mark::S).unwrap();
        session.apply_move(&client("bob"), 2, 2, Mark::S).unwrap();

        // when (操作): alice が O(1,1) で対角線を完成させる
        let result = session.apply_move(&client("alice"), 1, 1, Mark::O).unwrap();

        // then (期待する結果):
        assert_eq!(result.scored, 1);
        assert_eq!(result.lines, vec![[(0, 0), (1, 1), (2, 2)]]);
        assert_eq!(session.scores.first, 1);
        assert_eq!(session.turn, Role::First);
        assert_eq!(session.last_pattern_lines, vec![[(0, 0), (1, 1), (2, 2)]]);
    }

    #[test]
    fn test_last_pattern_lines_cleared_on_next_non_scoring_move() {
        // テスト項目: 得点後の次の無得点の着手で lastPatternLines がクリアされる
        // given (前提条件): alice が対角線で得点済み
        let mut session = two_player_session(DEFAULT_BOARD_SIZE);
        session.apply_move(&client("alice"), 0, 0, Mark::S).unwrap();
        session.apply_move(&client("bob"), 2, 2, Mark::S).unwrap();
        session.apply_move(&client("alice"), 1, 1, Mark::O).unwrap();
        assert!(!session.last_pattern_lines.is_empty());

        // when (操作): alice が無得点の着手をする
        session.apply_move(&client("alice"), 10, 10, Mark::S).unwrap();

        // then (期待する結果):
        assert!(session.last_pattern_lines.is_empty());
        assert_eq!(session.turn, Role::Second);
    }

    #[test]
    fn test_full_board_equal_scores_is_draw() {
        // テスト項目: 盤面が埋まり得点が同点なら引き分けになる
        // given (前提条件): 3x3 盤面で両者 1 点ずつ取る進行
        let mut session = two_player_session(3);
        let alice = client("alice");
        let bob = client("bob");
        session.apply_move(&alice, 0, 0, Mark::S).unwrap(); // turn -> second
        session.apply_move(&bob, 2, 2, Mark::S).unwrap(); // turn -> first
        session.apply_move(&alice, 1, 1, Mark::O).unwrap(); // first scores, keeps turn
        session.apply_move(&alice, 0, 1, Mark::S).unwrap(); // turn -> second
        session.apply_move(&bob, 0, 2, Mark::S).unwrap(); // turn -> first
        session.apply_move(&alice, 1, 0, Mark::S).unwrap(); // turn -> second
        session.apply_move(&bob, 1, 2, Mark::S).unwrap(); // turn -> first
        session.apply_move(&alice, 2, 0, Mark::S).unwrap(); // turn -> second

        // when (操作): bob が O(2,1) で横一列を完成させつつ盤面を埋める
        let result = session.apply_move(&bob, 2, 1, Mark::O).unwrap();

        // then (期待する結果): 最後の一手が得点しても勝敗は得点比較で決まる
        assert_eq!(result.scored, 1);
        assert_eq!(session.scores, Scores { first: 1, second: 1 });
        assert_eq!(session.phase, Phase::Terminal);
        assert_eq!(session.outcome, Some(Outcome::Draw));
    }

    #[test]
    fn test_full_board_higher_score_wins() {
        // テスト項目: 盤面が埋まったとき得点の高い側が勝者になる
        // given (前提条件): 3x3 盤面で alice だけが 1 点取る進行
        let mut session = two_player_session(3);
        let alice = client("alice");
        let bob = client("bob");
        session.apply_move(&alice, 0, 0, Mark::S).unwrap();
        session.apply_move(&bob, 2, 2, Mark::S).unwrap();
        session.apply_move(&alice, 1, 1, Mark::O).unwrap(); // first: 1 point
        session.apply_move(&alice, 0, 1, Mark::S).unwrap();
        session.apply_move(&bob, 0, 2, Mark::S).unwrap();
        session.apply_move(&alice, 1, 0, Mark::S).unwrap();
        session.apply_move(&bob, 1, 2, Mark::S).unwrap();
        session.apply_move(&alice, 2, 0, Mark::S).unwrap();

        // when (操作): bob が無得点の S(2,1) で盤面を埋める
        let result = session.apply_move(&bob, 2, 1, Mark::S).unwrap();

        // then (期待する結果):
        assert_eq!(result.scored, 0);
        assert_eq!(session.phase, Phase::Terminal);
        assert_eq!(session.outcome, Some(Outcome::FirstWins));
    }

    #[test]
    fn test_terminal_session_rejects_moves() {
        // テスト項目: 終了したセッションでは着手が常に拒否され、状態が凍結される
        // given (前提条件): 引き分けで終了済みのセッション
        let mut session = two_player_session(3);
        let alice = client("alice");
        let bob = client("bob");
        session.apply_move(&alice, 0, 0, Mark::S).unwrap();
        session.apply_move(&bob, 2, 2, Mark::S).unwrap();
        session.apply_move(&alice, 1, 1, Mark::O).unwrap();
        session.apply_move(&alice, 0, 1, Mark::S).unwrap();
        session.apply_move(&bob, 0, 2, Mark::S).unwrap();
        session.apply_move(&alice, 1, 0, Mark::S).unwrap();
        session.apply_move(&bob, 1, 2, Mark::S).unwrap();
        session.apply_move(&alice, 2, 0, Mark::S).unwrap();
        session.apply_move(&bob, 2, 1, Mark::O).unwrap();
        assert_eq!(session.phase, Phase::Terminal);
        let turn_before = session.turn;
        let outcome_before = session.outcome;

        // when (操作): 終了後に着手を試みる
        let result = session.apply_move(&alice, 0, 0, Mark::S);

        // then (期待する結果):
        assert_eq!(result, Err(SessionError::SessionOver));
        assert_eq!(session.turn, turn_before);
        assert_eq!(session.outcome, outcome_before);
    }

    #[test]
    fn test_disconnect_gives_remaining_player_the_win() {
        // テスト項目: 対戦中の切断で残ったプレイヤーが得点に関係なく勝者になる
        // given (前提条件): bob だけが得点している状態
        let mut session = two_player_session(DEFAULT_BOARD_SIZE);
        let alice = client("alice");
        let bob = client("bob");
        session.apply_move(&alice, 5, 5, Mark::S).unwrap();
        session.apply_move(&bob, 0, 0, Mark::S).unwrap();
        session.apply_move(&alice, 2, 2, Mark::S).unwrap();
        session.apply_move(&bob, 1, 1, Mark::O).unwrap(); // second: 1 point
        assert_eq!(session.scores.second, 1);
        assert_eq!(session.scores.first, 0);

        // when (操作): 得点している bob が切断する
        let exit = session.remove_player(&bob);

        // then (期待する結果): 得点で劣る alice が勝者になる
        assert_eq!(exit, PlayerExit::DisconnectWin(Role::First));
        assert_eq!(session.phase, Phase::Terminal);
        assert_eq!(session.outcome, Some(Outcome::FirstWins));
    }

    #[test]
    fn test_disconnect_after_terminal_keeps_outcome() {
        // テスト項目: 終了後の切断は勝敗を変更せず、座席だけが削除される
        // given (前提条件): 引き分けで終了済みのセッション
        let mut session = two_player_session(3);
        let alice = client("alice");
        let bob = client("bob");
        session.apply_move(&alice, 0, 0, Mark::S).unwrap();
        session.apply_move(&bob, 2, 2, Mark::S).unwrap();
        session.apply_move(&alice, 1, 1, Mark::O).unwrap();
        session.apply_move(&alice, 0, 1, Mark::S).unwrap();
        session.apply_move(&bob, 0, 2, Mark::S).unwrap();
        session.apply_move(&alice, 1, 0, Mark::S).unwrap();
        session.apply_move(&bob, 1, 2, Mark::S).unwrap();
        session.apply_move(&alice, 2, 0, Mark::S).unwrap();
        session.apply_move(&bob, 2, 1, Mark::O).unwrap();
        assert_eq!(session.outcome, Some(Outcome::Draw));

        // when (操作): 終了後に alice が切断する
        let exit = session.remove_player(&alice);

        // then (期待する結果):
        assert_eq!(exit, PlayerExit::Departed(Role::Second));
        assert_eq!(session.outcome, Some(Outcome::Draw));
        assert_eq!(session.seats.len(), 1);
    }

    #[test]
    fn test_remove_last_player_signals_empty() {
        // テスト項目: 最後のプレイヤーが離脱するとセッション空のシグナルが返される
        // given (前提条件):
        let mut session = session_with_board_size(DEFAULT_BOARD_SIZE);
        let alice = client("alice");
        session.add_player(alice.clone()).unwrap();

        // when (操作):
        let exit = session.remove_player(&alice);

        // then (期待する結果):
        assert_eq!(exit, PlayerExit::Empty);
        assert_eq!(session.seats.len(), 0);
    }

    #[test]
    fn test_remove_unseated_player_is_noop() {
        // テスト項目: 着席していないクライアントの削除は何も変更しない
        // given (前提条件):
        let mut session = two_player_session(DEFAULT_BOARD_SIZE);

        // when (操作):
        let exit = session.remove_player(&client("mallory"));

        // then (期待する結果):
        assert_eq!(exit, PlayerExit::NotSeated);
        assert_eq!(session.seats.len(), 2);
        assert_eq!(session.phase, Phase::Active);
    }

    #[test]
    fn test_scores_bounded_by_o_placements() {
        // テスト項目: 合計得点は減少せず、O の配置数 x 4 を超えない
        // given (前提条件): O を中心に全方向 S の最大得点配置
        let mut session = two_player_session(DEFAULT_BOARD_SIZE);
        let alice = client("alice");
        let bob = client("bob");
        let surrounding = [
            (4, 4),
            (4, 5),
            (4, 6),
            (5, 4),
            (5, 6),
            (6, 4),
            (6, 5),
            (6, 6),
        ];
        let mut movers = [alice.clone(), bob.clone()].into_iter().cycle();
        for (row, col) in surrounding {
            let mover = movers.next().unwrap();
            session.apply_move(&mover, row, col, Mark::S).unwrap();
        }

        // when (操作): alice が O(5,5) を置いて 4 方向すべてで得点する
        let result = session.apply_move(&alice, 5, 5, Mark::O).unwrap();

        // then (期待する結果): 1 回の O 配置で得点は最大 4
        assert_eq!(result.scored, 4);
        assert_eq!(session.scores.first + session.scores.second, 4);
    }

    #[test]
    fn test_snapshots_of_same_state_are_equal() {
        // テスト項目: 同じ状態から取った 2 つのスナップショットは等価に比較できる
        // given (前提条件):
        let mut session = two_player_session(DEFAULT_BOARD_SIZE);
        session.apply_move(&client("alice"), 0, 0, Mark::S).unwrap();

        // when (操作):
        let snapshot1 = session.snapshot();
        let snapshot2 = session.snapshot();

        // then (期待する結果):
        assert_eq!(snapshot1, snapshot2);

        // 状態が変われば等価でなくなる
        session.apply_move(&client("bob"), 1, 1, Mark::S).unwrap();
        assert_ne!(session.snapshot(), snapshot1);
    }

    #[test]
    fn test_snapshot_captures_state() {
        // テスト項目: スナップショットが現在の状態を正しく写し取る
        // given (前提条件):
        let mut session = two_player_session(DEFAULT_BOARD_SIZE);
        session.apply_move(&client("alice"), 0, 0, Mark::S).unwrap();

        // when (操作):
        let snapshot = session.snapshot();

        // then (期待する結果):
        assert_eq!(snapshot.room_code, session.room_code);
        assert_eq!(snapshot.board_size, DEFAULT_BOARD_SIZE);
        assert_eq!(snapshot.cells[0][0], Some(Mark::S));
        assert_eq!(snapshot.turn, Role::Second);
        assert_eq!(snapshot.players_connected(), 2);
        assert!(!snapshot.terminal);
        assert_eq!(snapshot.outcome, None);
    }
}
