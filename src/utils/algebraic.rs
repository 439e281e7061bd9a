//! Square name conversions.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! `(row, col)` squares. Row 0 is rank 8, so `rank = 8 - row`.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::Square;

/// Convert a square name (for example: "e4") to a board square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessError> {
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquareName(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquareName(square.to_owned()));
    }

    let col = (file - b'a') as i8;
    let row = 7 - (rank - b'1') as i8;
    Ok(Square::new(row, col))
}

/// Convert a board square to its name (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, ChessError> {
    if !square.is_on_board() {
        return Err(ChessError::SquareOffBoard {
            row: square.row,
            col: square.col,
        });
    }

    let file_char = char::from(b'a' + square.col as u8);
    let rank_char = char::from(b'8' - square.row as u8);

    Ok(format!("{file_char}{rank_char}"))
}
