//! Core game state representation.
//!
//! `GameState` is the central model: the board, whose turn it is, the move
//! history with its board snapshots, captured pieces, and the status flags
//! maintained by the executor and the status evaluator. Rule enforcement
//! lives in `move_generation`; input validation lives in `game::chess_game`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::history::captured_pieces::CapturedPieces;
use crate::history::move_history::MoveHistory;
use crate::move_generation::game_status::evaluate_status;
use crate::move_generation::legal_move_checks::is_in_check;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    pub last_move: Option<LastMove>,
    /// `last_move` the position was set up with; restored once undo empties
    /// the history.
    pub initial_last_move: Option<LastMove>,
    pub history: MoveHistory,
    pub captured: CapturedPieces,
    pub status: GameStatus,
    pub game_over: bool,
    pub pending_promotion: Option<PendingPromotion>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new_game() -> Self {
        Self::from_position(Board::standard(), Color::White, None)
    }

    /// Arbitrary set-up position with empty history. The status of
    /// `current_player` is evaluated immediately.
    pub fn from_position(board: Board, current_player: Color, last_move: Option<LastMove>) -> Self {
        let mut state = Self {
            board,
            current_player,
            last_move,
            initial_last_move: last_move,
            history: MoveHistory::new(),
            captured: CapturedPieces::default(),
            status: GameStatus::InProgress,
            game_over: false,
            pending_promotion: None,
        };
        state.refresh_status();
        state
    }

    /// Back to the standard starting position, reusing the history and
    /// captured-piece buffers.
    pub fn reset(&mut self) {
        self.board = Board::standard();
        self.current_player = Color::White;
        self.last_move = None;
        self.initial_last_move = None;
        self.history.clear();
        self.captured.clear();
        self.pending_promotion = None;
        self.refresh_status();
    }

    /// Re-run the status evaluator for the side to move and update
    /// `status`/`game_over`.
    ///
    /// While a promotion is pending the pawn has not become its final piece
    /// yet, so only check is reported and the game never ends here.
    pub fn refresh_status(&mut self) -> GameStatus {
        self.status = if self.pending_promotion.is_some() {
            if is_in_check(&self.board, self.current_player) {
                GameStatus::Check
            } else {
                GameStatus::InProgress
            }
        } else {
            evaluate_status(&self.board, self.last_move, self.current_player)
        };
        self.game_over = self.status.is_terminal();
        self.status
    }

    /// Side that delivered checkmate, if the game ended that way.
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Checkmate => Some(self.current_player.opposite()),
            _ => None,
        }
    }
}
