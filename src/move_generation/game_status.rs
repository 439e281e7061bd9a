//! Game status evaluation for the side to move.
//!
//! No legal move and in check is checkmate, no legal move otherwise is
//! stalemate; with moves available the side is either in check or simply
//! in progress.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameStatus, LastMove};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

pub fn evaluate_status(board: &Board, last_move: Option<LastMove>, side: Color) -> GameStatus {
    let in_check = is_in_check(board, side);
    let can_move = has_any_legal_move(board, last_move, side);

    match (can_move, in_check) {
        (false, true) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::evaluate_status;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, GameStatus, Piece, PieceKind, Square};

    fn put(board: &mut Board, row: i8, col: i8, kind: PieceKind, color: Color) {
        board.set(Square::new(row, col), Some(Piece::new(kind, color).moved()));
    }

    #[test]
    fn start_position_is_in_progress() {
        assert_eq!(
            evaluate_status(&Board::standard(), None, Color::White),
            GameStatus::InProgress
        );
    }

    #[test]
    fn back_rank_mate() {
        let mut board = Board::empty();
        put(&mut board, 7, 6, PieceKind::King, Color::White);
        put(&mut board, 6, 5, PieceKind::Pawn, Color::White);
        put(&mut board, 6, 6, PieceKind::Pawn, Color::White);
        put(&mut board, 6, 7, PieceKind::Pawn, Color::White);
        put(&mut board, 7, 0, PieceKind::Rook, Color::Black);
        put(&mut board, 0, 4, PieceKind::King, Color::Black);

        assert_eq!(evaluate_status(&board, None, Color::White), GameStatus::Checkmate);
    }

    #[test]
    fn escapable_check_is_check() {
        let mut board = Board::empty();
        put(&mut board, 7, 6, PieceKind::King, Color::White);
        put(&mut board, 6, 5, PieceKind::Pawn, Color::White);
        put(&mut board, 6, 7, PieceKind::Pawn, Color::White);
        put(&mut board, 7, 0, PieceKind::Rook, Color::Black);
        put(&mut board, 0, 4, PieceKind::King, Color::Black);

        assert_eq!(evaluate_status(&board, None, Color::White), GameStatus::Check);
    }

    #[test]
    fn cornered_king_without_check_is_stalemate() {
        let mut board = Board::empty();
        put(&mut board, 0, 7, PieceKind::King, Color::Black);
        put(&mut board, 2, 6, PieceKind::Queen, Color::White);
        put(&mut board, 7, 0, PieceKind::King, Color::White);

        assert_eq!(evaluate_status(&board, None, Color::Black), GameStatus::Stalemate);
    }
}
