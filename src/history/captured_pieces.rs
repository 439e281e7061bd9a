//! Captured pieces, grouped by the side that took them.

use crate::game_state::chess_types::{Color, Piece};

/// `white` holds pieces White has captured; `black` those Black has.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    #[inline]
    pub fn by(&self, captor: Color) -> &[Piece] {
        match captor {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn by_mut(&mut self, captor: Color) -> &mut Vec<Piece> {
        match captor {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    #[inline]
    pub fn push(&mut self, captor: Color, piece: Piece) {
        self.by_mut(captor).push(piece);
    }

    /// Drop the `count` most recent captures made by `captor`.
    pub fn remove_last(&mut self, captor: Color, count: usize) {
        let list = self.by_mut(captor);
        let keep = list.len().saturating_sub(count);
        list.truncate(keep);
    }

    pub fn clear(&mut self) {
        self.white.clear();
        self.black.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn captures_are_credited_to_the_captor() {
        let mut captured = CapturedPieces::default();
        captured.push(Color::White, Piece::new(PieceKind::Queen, Color::Black));
        captured.push(Color::Black, Piece::new(PieceKind::Pawn, Color::White));
        captured.push(Color::White, Piece::new(PieceKind::Pawn, Color::Black));

        assert_eq!(captured.by(Color::White).len(), 2);
        captured.remove_last(Color::White, 1);
        assert_eq!(
            captured.by(Color::White),
            &[Piece::new(PieceKind::Queen, Color::Black)]
        );
        captured.remove_last(Color::Black, 5);
        assert!(captured.by(Color::Black).is_empty());
    }
}
