//! Ray tracing shared by the sliding pieces.
//!
//! A ray continues through empty squares and stops at the first occupied
//! square, which is included only when it holds an enemy piece.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

pub fn slide(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        trace_ray(board, from, color, d_row, d_col, out);
    }
}

fn trace_ray(
    board: &Board,
    from: Square,
    color: Color,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<Square>,
) {
    let mut cursor = from.offset(d_row, d_col);
    while let Some(target) = cursor {
        match board.color_at(target) {
            None => out.push(target),
            Some(occupant) => {
                if occupant != color {
                    out.push(target);
                }
                break;
            }
        }
        cursor = target.offset(d_row, d_col);
    }
}

#[cfg(test)]
mod tests {
    use super::slide;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn ray_includes_enemy_blocker_and_stops() {
        let mut board = Board::empty();
        board.set(Square::new(4, 6), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        let mut out = Vec::new();
        slide(&board, Square::new(4, 2), Color::White, &[(0, 1)], &mut out);
        assert_eq!(
            out,
            vec![Square::new(4, 3), Square::new(4, 4), Square::new(4, 5), Square::new(4, 6)]
        );
    }

    #[test]
    fn ray_excludes_friendly_blocker() {
        let mut board = Board::empty();
        board.set(Square::new(2, 2), Some(Piece::new(PieceKind::Pawn, Color::White)));
        let mut out = Vec::new();
        slide(&board, Square::new(4, 4), Color::White, &[(-1, -1)], &mut out);
        assert_eq!(out, vec![Square::new(3, 3)]);
    }
}
