//! Game facade exposed to front ends.
//!
//! `ChessGame` owns one `GameState` and is the only place that validates
//! caller input. Invalid requests are no-ops reported through the return
//! value: `committed: false` from `execute_move`, `false` from `undo`, an
//! empty list from `legal_moves`.

use tracing::{debug, info, trace};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game::move_list::{move_list, MoveListEntry};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::history::captured_pieces::CapturedPieces;
use crate::history::move_history::MoveHistory;
use crate::move_generation::legal_move_apply::{apply_move, apply_promotion};
use crate::move_generation::legal_move_generator::{has_any_legal_move, legal_moves};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChessGame {
    state: GameState,
}

impl ChessGame {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set-up position with empty history.
    pub fn from_position(board: Board, side_to_move: Color, last_move: Option<LastMove>) -> Self {
        Self {
            state: GameState::from_position(board, side_to_move, last_move),
        }
    }

    /// Back to the standard starting position.
    pub fn reset(&mut self) {
        self.state.reset();
        debug!("game reset to the starting position");
    }

    /// Legal destinations for the piece on `square`. Empty when the square
    /// is empty, holds an opponent piece, the game is over, or a promotion
    /// is waiting to be resolved.
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        if self.state.game_over || self.state.pending_promotion.is_some() {
            return Vec::new();
        }
        match self.state.board.get(square) {
            Some(piece) if piece.color == self.state.current_player => {
                legal_moves(&self.state.board, self.state.last_move, square)
            }
            _ => Vec::new(),
        }
    }

    /// Commit `from`→`to` if it is one of `legal_moves(from)`.
    pub fn execute_move(&mut self, from: Square, to: Square) -> MoveResult {
        if self.state.game_over {
            trace!(%from, %to, "move refused: game is over");
            return MoveResult::rejected(self.state.status);
        }
        if let Some(pending) = self.state.pending_promotion {
            trace!(%from, %to, square = %pending.square, "move refused: promotion pending");
            return MoveResult::rejected(self.state.status);
        }
        if !self.legal_moves(from).contains(&to) {
            trace!(%from, %to, "move refused: not legal");
            return MoveResult::rejected(self.state.status);
        }

        let mover = self.state.current_player;
        let result = apply_move(&mut self.state, from, to);
        debug!(%mover, %from, %to, status = ?result.status, "move committed");
        if let Some(pending) = result.promotion_pending {
            debug!(square = %pending.square, color = %pending.color, "promotion pending");
        }
        self.log_status();
        result
    }

    /// Retype the pawn waiting on `square` and re-evaluate the status.
    pub fn resolve_promotion(
        &mut self,
        square: Square,
        choice: PromotionChoice,
    ) -> ChessResult<GameStatus> {
        let pending = self
            .state
            .pending_promotion
            .ok_or(ChessError::NoPromotionPending)?;
        if pending.square != square {
            return Err(ChessError::PromotionSquareMismatch {
                expected: pending.square,
                got: square,
            });
        }

        let status =
            apply_promotion(&mut self.state, choice).ok_or(ChessError::NoPromotionPending)?;
        debug!(%square, ?choice, ?status, "promotion resolved");
        self.log_status();
        Ok(status)
    }

    /// Take back the most recent move. `false` when there is nothing to undo
    /// or the game has ended.
    pub fn undo(&mut self) -> bool {
        if self.state.game_over {
            trace!("undo refused: game is over");
            return false;
        }
        let Some(record) = self.state.history.pop() else {
            trace!("undo refused: history is empty");
            return false;
        };

        let mover = record.mover();
        self.state
            .captured
            .remove_last(mover, record.captured_count());
        self.state.current_player = mover;
        self.state.last_move = self
            .state
            .history
            .last()
            .map(|previous| previous.last_move())
            .or(self.state.initial_last_move);
        self.state.pending_promotion = None;
        self.state.board = record.board_before;
        self.state.refresh_status();

        debug!(%mover, from = %record.from, to = %record.to, "move undone");
        true
    }

    fn log_status(&self) {
        match self.state.status {
            GameStatus::Check => info!(side = %self.state.current_player, "check"),
            GameStatus::Checkmate => info!(
                loser = %self.state.current_player,
                winner = %self.state.current_player.opposite(),
                "checkmate"
            ),
            GameStatus::Stalemate => info!(side = %self.state.current_player, "stalemate"),
            GameStatus::InProgress => {}
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.state.current_player
    }

    #[inline]
    pub fn captured(&self) -> &CapturedPieces {
        &self.state.captured
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.state.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<LastMove> {
        self.state.last_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.state.pending_promotion
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.state.winner()
    }

    pub fn has_any_legal_move(&self) -> bool {
        has_any_legal_move(&self.state.board, self.state.last_move, self.state.current_player)
    }

    /// Numbered entries for every committed move, oldest first.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        move_list(&self.state.history)
    }
}
