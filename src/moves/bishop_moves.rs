//! Bishop movement pattern: slides along the four diagonals.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::DIAGONAL_DIRECTIONS;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::sliding_moves::slide;

#[inline]
pub fn bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    slide(board, from, color, &DIAGONAL_DIRECTIONS, out);
}
