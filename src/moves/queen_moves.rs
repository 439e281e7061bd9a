use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

/// Queen movement pattern: union of rook and bishop rays.
#[inline]
pub fn queen_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    rook_moves(board, from, color, out);
    bishop_moves(board, from, color, out);
}
