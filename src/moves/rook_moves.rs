//! Rook movement pattern: slides along ranks and files.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::ORTHOGONAL_DIRECTIONS;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::sliding_moves::slide;

#[inline]
pub fn rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    slide(board, from, color, &ORTHOGONAL_DIRECTIONS, out);
}
