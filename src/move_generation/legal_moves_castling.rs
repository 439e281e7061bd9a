//! Castling candidates.
//!
//! Castling has its own preconditions on top of the king's step pattern:
//! neither the king nor the same-colored rook has moved, every square
//! between them is empty, the king is not in check, and single king steps
//! onto the pass-through and landing squares are both safe.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KING_SIDE_ROOK_COL, KING_START_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::move_generation::board_patch::{with_patch_applied, BoardPatch};
use crate::move_generation::legal_move_checks::is_in_check;

/// Push the landing squares of every available castle for the king on
/// `king_from`. The board is unchanged on return.
pub fn generate_castling_moves(board: &mut Board, king_from: Square, out: &mut Vec<Square>) {
    let Some(king) = board.get(king_from) else {
        return;
    };
    if king.kind != PieceKind::King
        || king.has_moved
        || king_from.row != king.color.back_row()
        || king_from.col != KING_START_COL
    {
        return;
    }

    let color = king.color;
    if is_in_check(board, color) {
        return;
    }

    for rook_col in [KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL] {
        let rook_square = Square::new(king_from.row, rook_col);
        let rook_ready = matches!(
            board.get(rook_square),
            Some(rook) if rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved
        );
        if !rook_ready {
            continue;
        }

        let step = (rook_col - king_from.col).signum();
        let path_clear = (1..(rook_col - king_from.col).abs()).all(|distance| {
            board.is_empty(Square::new(king_from.row, king_from.col + step * distance))
        });
        if !path_clear {
            continue;
        }

        let pass_through = Square::new(king_from.row, king_from.col + step);
        let landing = Square::new(king_from.row, king_from.col + 2 * step);
        let safe = [pass_through, landing].into_iter().all(|target| {
            let step_patch = BoardPatch::relocate(board, king_from, target);
            !with_patch_applied(board, &step_patch, |b| is_in_check(b, color))
        });

        if safe {
            out.push(landing);
        }
    }
}
