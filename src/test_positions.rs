//! Shorthand for building hand-made positions in unit tests.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[inline]
pub(crate) const fn sq(row: i8, col: i8) -> Square {
    Square::new(row, col)
}

/// Unmoved piece; chain `.moved()` for one that has left its start square.
#[inline]
pub(crate) const fn piece(kind: PieceKind, color: Color) -> Piece {
    Piece::new(kind, color)
}
