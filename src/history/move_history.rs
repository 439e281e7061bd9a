//! Move history.
//!
//! Each committed move is stored as a `MoveRecord` carrying a full copy of
//! the board as it stood before the move. Undo therefore swaps the board back
//! wholesale instead of inverting castling, en passant, or promotion rules.
//! Records are never mutated after commit.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, LastMove, Piece, PieceKind, Square};

/// Which side of the board a castle went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Classification of a committed move, derived from its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    Capture,
    EnPassant,
    Castle(CastleSide),
    Promotion { capture: bool },
}

/// Snapshot of one committed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The moving piece as it was before the move (a pawn for promotions).
    pub moving_piece: Piece,
    /// Piece that stood on `to`, if any.
    pub captured_piece: Option<Piece>,
    /// Pawn removed from beside `from` by an en passant capture.
    pub en_passant_capture: Option<Piece>,
    pub board_before: Board,
}

impl MoveRecord {
    #[inline]
    pub fn mover(&self) -> Color {
        self.moving_piece.color
    }

    #[inline]
    pub fn last_move(&self) -> LastMove {
        LastMove {
            from: self.from,
            to: self.to,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some() || self.en_passant_capture.is_some()
    }

    /// Number of pieces this move added to the mover's captured list.
    #[inline]
    pub fn captured_count(&self) -> usize {
        usize::from(self.captured_piece.is_some()) + usize::from(self.en_passant_capture.is_some())
    }

    pub fn kind(&self) -> MoveKind {
        let piece = self.moving_piece;
        if piece.kind == PieceKind::Pawn && self.to.row == piece.color.promotion_row() {
            return MoveKind::Promotion {
                capture: self.captured_piece.is_some(),
            };
        }
        if self.en_passant_capture.is_some() {
            return MoveKind::EnPassant;
        }
        if piece.kind == PieceKind::King && (self.to.col - self.from.col).abs() == 2 {
            let side = if self.to.col > self.from.col {
                CastleSide::KingSide
            } else {
                CastleSide::QueenSide
            };
            return MoveKind::Castle(side);
        }
        if self.captured_piece.is_some() {
            MoveKind::Capture
        } else {
            MoveKind::Normal
        }
    }
}

/// Append-only log of committed moves; `pop` is reserved for undo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn commit(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    #[inline]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &MoveRecord> + ExactSizeIterator {
        self.records.iter()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
