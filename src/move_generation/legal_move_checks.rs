//! Check detection.
//!
//! Attacks are computed by replaying the pseudo-legal movement pattern of
//! every opposing piece. En passant never lands on an occupied square, so the
//! previous move is irrelevant here and `None` is passed through.

use tracing::warn;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::move_generator::pseudo_legal_moves;

/// True when `color`'s king is attacked. A board without that king reports
/// "not in check".
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        warn!(%color, "no king on the board; treating as not in check");
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// True when any piece of `attacker_color` has `square` among its
/// pseudo-legal destinations.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces(attacker_color)
        .any(|(from, _)| pseudo_legal_moves(board, None, from).contains(&square))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    #[test]
    fn start_position_has_no_checks() {
        let board = Board::standard();
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let mut board = Board::empty();
        board.set(Square::new(7, 4), Some(Piece::new(PieceKind::King, Color::White)));
        board.set(Square::new(0, 0), Some(Piece::new(PieceKind::King, Color::Black)));
        board.set(Square::new(2, 4), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert!(is_in_check(&board, Color::White));
        assert!(is_square_attacked(&board, Square::new(7, 4), Color::Black));

        board.set(Square::new(5, 4), Some(Piece::new(PieceKind::Bishop, Color::White)));
        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn pawn_attacks_diagonally_not_forward() {
        let mut board = Board::empty();
        board.set(Square::new(4, 4), Some(Piece::new(PieceKind::King, Color::White)));
        board.set(Square::new(3, 4), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        board.set(Square::new(0, 0), Some(Piece::new(PieceKind::King, Color::Black)));
        assert!(!is_in_check(&board, Color::White));

        board.set(Square::new(3, 4), None);
        board.set(Square::new(3, 5), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(is_in_check(&board, Color::White));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let mut board = Board::empty();
        board.set(Square::new(0, 0), Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert!(!is_in_check(&board, Color::White));
    }
}
