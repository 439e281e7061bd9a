//! King single-step pattern.
//!
//! Castling is not produced here: it has its own preconditions that depend
//! on check detection, which in turn uses this pattern as the king's attack
//! set. See `move_generation::legal_moves_castling`.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::KING_OFFSETS;
use crate::game_state::chess_types::{Color, Square};

pub fn king_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for (d_row, d_col) in KING_OFFSETS {
        let Some(target) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.color_at(target) != Some(color) {
            out.push(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::king_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn king_in_corner_has_three_targets() {
        let mut out = Vec::new();
        king_moves(&Board::empty(), Square::new(7, 7), Color::White, &mut out);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn starting_king_has_no_steps() {
        let mut out = Vec::new();
        king_moves(&Board::standard(), Square::new(0, 4), Color::Black, &mut out);
        assert!(out.is_empty());
    }
}
