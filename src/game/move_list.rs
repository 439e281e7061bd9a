//! Numbered move-list entries for display.

use std::fmt;

use crate::game_state::chess_types::{Piece, Square};
use crate::history::move_history::MoveHistory;
use crate::utils::render_game_state::piece_glyph;

/// One committed move as shown in a move list: `1. ♙ e2 - e4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveListEntry {
    /// Full-move number; White's move and Black's reply share it.
    pub number: usize,
    /// The piece as it stood before moving (a promoting pawn stays a pawn).
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub capture: bool,
}

impl fmt::Display for MoveListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.capture { 'x' } else { '-' };
        write!(
            f,
            "{}. {} {} {} {}",
            self.number,
            piece_glyph(self.piece, false),
            self.from,
            separator,
            self.to
        )
    }
}

/// Entries for every record in `history`, oldest first.
pub fn move_list(history: &MoveHistory) -> Vec<MoveListEntry> {
    history
        .iter()
        .enumerate()
        .map(|(index, record)| MoveListEntry {
            number: index / 2 + 1,
            piece: record.moving_piece,
            from: record.from,
            to: record.to,
            capture: record.is_capture(),
        })
        .collect()
}
