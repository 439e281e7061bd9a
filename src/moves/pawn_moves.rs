//! Pawn movement pattern: pushes, diagonal captures, and en passant.
//!
//! En passant needs the previous move, so unlike the other patterns this one
//! takes `last_move`. Destinations on the promotion row are ordinary squares
//! here; the promotion itself is handled when the move is committed.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, LastMove, PieceKind, Square};

pub fn pawn_moves(
    board: &Board,
    from: Square,
    color: Color,
    last_move: Option<LastMove>,
    out: &mut Vec<Square>,
) {
    let direction = color.pawn_direction();

    if let Some(one_step) = from.offset(direction, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if from.row == color.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * direction, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(target) = from.offset(direction, d_col) else {
            continue;
        };

        if board.color_at(target) == Some(color.opposite()) {
            out.push(target);
        } else if is_en_passant_target(board, from, color, d_col, last_move) {
            out.push(target);
        }
    }
}

/// True when the pawn beside `from` (in column `from.col + d_col`) is an
/// enemy pawn that just advanced two squares from its start row.
pub fn is_en_passant_target(
    board: &Board,
    from: Square,
    color: Color,
    d_col: i8,
    last_move: Option<LastMove>,
) -> bool {
    let Some(last_move) = last_move else {
        return false;
    };
    let Some(beside) = from.offset(0, d_col) else {
        return false;
    };
    let Some(neighbour) = board.get(beside) else {
        return false;
    };

    let enemy = color.opposite();
    neighbour.kind == PieceKind::Pawn
        && neighbour.color == enemy
        && last_move.to == beside
        && last_move.from.row == enemy.pawn_start_row()
        && (last_move.from.row - last_move.to.row).abs() == 2
}
