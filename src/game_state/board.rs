//! 8×8 board of optional pieces.
//!
//! Pure data: accessors plus a few read-only scans. Rule knowledge lives in
//! `moves` and `move_generation`.

use crate::game_state::chess_rules::BACK_RANK_ORDER;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting layout: Black on rows 0–1, White on rows 6–7.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
            let col = col as i8;
            board.set(Square::new(0, col), Some(Piece::new(*kind, Color::Black)));
            board.set(Square::new(1, col), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            board.set(Square::new(6, col), Some(Piece::new(PieceKind::Pawn, Color::White)));
            board.set(Square::new(7, col), Some(Piece::new(*kind, Color::White)));
        }
        board
    }

    #[inline]
    pub const fn is_on_board(row: i8, col: i8) -> bool {
        Square::new(row, col).is_on_board()
    }

    /// Occupant of `square`; `None` for empty or off-board squares.
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        if square.is_on_board() {
            self.squares[square.row as usize][square.col as usize]
        } else {
            None
        }
    }

    /// Replace the occupant of `square`, returning the previous one.
    /// Off-board writes are ignored.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        std::mem::replace(
            &mut self.squares[square.row as usize][square.col as usize],
            piece,
        )
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Color of the occupant, if any.
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    /// Every occupied square with its piece, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    /// Every square holding a piece of `color`.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.pieces(color).filter(|(_, piece)| piece.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_has_thirty_two_pieces() {
        let board = Board::standard();
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.count(PieceKind::Pawn, Color::White), 8);
        assert_eq!(board.count(PieceKind::King, Color::Black), 1);
        assert_eq!(board.king_square(Color::White), Some(Square::new(7, 4)));
        assert_eq!(board.king_square(Color::Black), Some(Square::new(0, 4)));
        assert!(board.occupied().all(|(_, piece)| !piece.has_moved));
    }

    #[test]
    fn off_board_access_is_inert() {
        let mut board = Board::standard();
        let before = board.clone();
        assert_eq!(board.get(Square::new(-1, 3)), None);
        assert_eq!(
            board.set(Square::new(3, 8), Some(Piece::new(PieceKind::Queen, Color::White))),
            None
        );
        assert_eq!(board, before);
        assert!(Board::is_on_board(0, 7));
        assert!(!Board::is_on_board(0, 8));
    }

    #[test]
    fn set_returns_previous_occupant() {
        let mut board = Board::empty();
        let rook = Piece::new(PieceKind::Rook, Color::Black);
        assert_eq!(board.set(Square::new(4, 4), Some(rook)), None);
        assert_eq!(board.set(Square::new(4, 4), None), Some(rook));
        assert!(board.is_empty(Square::new(4, 4)));
    }
}
