use crate::game_state::board::Board;
use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::{Color, Square};

/// Knight jumps onto empty or enemy-occupied squares.
pub fn knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
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
    use super::knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let mut out = Vec::new();
        knight_moves(&Board::empty(), Square::new(4, 3), Color::White, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        let mut out = Vec::new();
        knight_moves(&Board::empty(), Square::new(0, 0), Color::Black, &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn starting_knight_skips_own_pawns() {
        let mut out = Vec::new();
        knight_moves(&Board::standard(), Square::new(7, 1), Color::White, &mut out);
        out.sort_by_key(|sq| (sq.row, sq.col));
        assert_eq!(out, vec![Square::new(5, 0), Square::new(5, 2)]);
    }
}
