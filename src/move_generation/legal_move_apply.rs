//! Move execution.
//!
//! Commits one already-validated move to a `GameState`: snapshots the board
//! into a `MoveRecord`, credits captures (including en passant), writes the
//! move's `BoardPatch`, opens a pending promotion when a pawn reaches the far
//! row, flips the turn, and re-evaluates the status for the new side.
//!
//! Promotion is two-phase. The pawn stays a pawn, and the record keeps the
//! pawn type, until `apply_promotion` supplies the new kind.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::history::move_history::MoveRecord;
use crate::move_generation::board_patch::{en_passant_capture_square, BoardPatch};

/// Commit `from`→`to`. The caller guarantees the move is legal. Returns a
/// rejected result without touching the state only if `from` is empty.
pub fn apply_move(game_state: &mut GameState, from: Square, to: Square) -> MoveResult {
    let Some(moving_piece) = game_state.board.get(from) else {
        return MoveResult::rejected(game_state.status);
    };
    let mover = moving_piece.color;

    let board_before = game_state.board.clone();
    let captured_piece = game_state
        .board
        .get(to)
        .filter(|target| target.color != mover);
    let en_passant_capture = en_passant_capture_square(&game_state.board, from, to)
        .and_then(|square| game_state.board.get(square));

    if let Some(pawn) = en_passant_capture {
        game_state.captured.push(mover, pawn);
    }
    if let Some(piece) = captured_piece {
        game_state.captured.push(mover, piece);
    }

    BoardPatch::for_move(&game_state.board, from, to).commit(&mut game_state.board);

    let promotion_pending = (moving_piece.kind == PieceKind::Pawn
        && to.row == mover.promotion_row())
    .then_some(PendingPromotion {
        square: to,
        color: mover,
    });
    game_state.pending_promotion = promotion_pending;

    game_state.history.commit(MoveRecord {
        from,
        to,
        moving_piece,
        captured_piece,
        en_passant_capture,
        board_before,
    });
    game_state.last_move = Some(LastMove { from, to });
    game_state.current_player = mover.opposite();

    let status = game_state.refresh_status();

    MoveResult {
        committed: true,
        promotion_pending,
        status,
    }
}

/// Finish a pending promotion by retyping the pawn in place, then
/// re-evaluate the status of the side to move. Returns `None` when nothing
/// is pending.
pub fn apply_promotion(game_state: &mut GameState, choice: PromotionChoice) -> Option<GameStatus> {
    let pending = game_state.pending_promotion.take()?;
    let pawn = game_state.board.get(pending.square)?;

    game_state.board.set(
        pending.square,
        Some(Piece {
            kind: choice.piece_kind(),
            ..pawn
        }),
    );

    Some(game_state.refresh_status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::history::move_history::{CastleSide, MoveKind};

    #[test]
    fn double_push_flips_turn_and_records_history() {
        let mut game = GameState::new_game();
        let result = apply_move(&mut game, Square::new(6, 4), Square::new(4, 4));

        assert!(result.committed);
        assert_eq!(result.status, GameStatus::InProgress);
        assert_eq!(game.current_player, Color::Black);
        assert_eq!(
            game.last_move,
            Some(LastMove {
                from: Square::new(6, 4),
                to: Square::new(4, 4)
            })
        );
        assert_eq!(game.history.len(), 1);
        assert_eq!(game.history.last().map(|r| r.board_before.clone()), Some(Board::standard()));
        assert!(game.board.get(Square::new(4, 4)).is_some_and(|p| p.has_moved));
    }

    #[test]
    fn capture_is_credited_to_the_mover() {
        let mut board = Board::empty();
        board.set(Square::new(7, 4), Some(Piece::new(PieceKind::King, Color::White)));
        board.set(Square::new(0, 4), Some(Piece::new(PieceKind::King, Color::Black)));
        board.set(Square::new(4, 0), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set(Square::new(4, 6), Some(Piece::new(PieceKind::Knight, Color::Black)));
        let mut game = GameState::from_position(board, Color::White, None);

        apply_move(&mut game, Square::new(4, 0), Square::new(4, 6));
        assert_eq!(
            game.captured.by(Color::White),
            &[Piece::new(PieceKind::Knight, Color::Black)]
        );
        assert_eq!(game.history.last().map(MoveRecord::kind), Some(MoveKind::Capture));
    }

    #[test]
    fn castling_relocates_rook_and_marks_it_moved() {
        let mut board = Board::empty();
        board.set(Square::new(0, 4), Some(Piece::new(PieceKind::King, Color::Black)));
        board.set(Square::new(0, 7), Some(Piece::new(PieceKind::Rook, Color::Black)));
        board.set(Square::new(7, 4), Some(Piece::new(PieceKind::King, Color::White)));
        let mut game = GameState::from_position(board, Color::Black, None);

        apply_move(&mut game, Square::new(0, 4), Square::new(0, 6));
        assert_eq!(
            game.board.get(Square::new(0, 5)),
            Some(Piece::new(PieceKind::Rook, Color::Black).moved())
        );
        assert!(game.board.is_empty(Square::new(0, 7)));
        assert_eq!(
            game.history.last().map(MoveRecord::kind),
            Some(MoveKind::Castle(CastleSide::KingSide))
        );
    }

    #[test]
    fn promotion_waits_for_a_choice() {
        let mut board = Board::empty();
        board.set(Square::new(7, 4), Some(Piece::new(PieceKind::King, Color::White)));
        board.set(Square::new(0, 0), Some(Piece::new(PieceKind::King, Color::Black)));
        board.set(Square::new(1, 6), Some(Piece::new(PieceKind::Pawn, Color::White).moved()));
        let mut game = GameState::from_position(board, Color::White, None);

        let result = apply_move(&mut game, Square::new(1, 6), Square::new(0, 6));
        let pending = PendingPromotion {
            square: Square::new(0, 6),
            color: Color::White,
        };
        assert_eq!(result.promotion_pending, Some(pending));
        assert_eq!(game.board.get(Square::new(0, 6)).map(|p| p.kind), Some(PieceKind::Pawn));

        let status = apply_promotion(&mut game, PromotionChoice::Rook);
        assert_eq!(status, Some(GameStatus::Check));
        assert_eq!(game.board.get(Square::new(0, 6)).map(|p| p.kind), Some(PieceKind::Rook));
        assert_eq!(game.history.last().map(|r| r.moving_piece.kind), Some(PieceKind::Pawn));
        assert_eq!(game.pending_promotion, None);
        assert_eq!(apply_promotion(&mut game, PromotionChoice::Queen), None);
    }
}
