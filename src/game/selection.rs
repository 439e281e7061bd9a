//! Click-style square selection on top of `ChessGame`.
//!
//! A front end forwards every square the user picks. The first pick of an
//! own piece selects it and reports its destinations; picking one of those
//! destinations plays the move.

use tracing::trace;

use crate::game::chess_game::ChessGame;
use crate::game_state::chess_types::{MoveResult, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Nothing changed.
    Ignored,
    /// `square` is now selected; `moves` are its legal destinations.
    Selected { square: Square, moves: Vec<Square> },
    /// The previous selection was dropped.
    Cleared,
    /// The selected piece moved to the picked square.
    Moved(MoveResult),
}

/// Currently selected square, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<Square>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn select_square(&mut self, game: &mut ChessGame, square: Square) -> SelectionOutcome {
        if game.is_game_over() {
            return SelectionOutcome::Ignored;
        }

        if let Some(from) = self.selected {
            if game.legal_moves(from).contains(&square) {
                self.selected = None;
                return SelectionOutcome::Moved(game.execute_move(from, square));
            }
        }

        let own_piece = game
            .board()
            .color_at(square)
            .is_some_and(|color| color == game.current_player());
        if own_piece {
            self.selected = Some(square);
            let moves = game.legal_moves(square);
            trace!(%square, moves = moves.len(), "square selected");
            return SelectionOutcome::Selected { square, moves };
        }

        if self.selected.take().is_some() {
            SelectionOutcome::Cleared
        } else {
            SelectionOutcome::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::GameStatus;
    use crate::test_positions::sq;

    #[test]
    fn select_then_move() {
        let mut game = ChessGame::new();
        let mut selection = Selection::new();

        match selection.select_square(&mut game, sq(6, 4)) {
            SelectionOutcome::Selected { square, moves } => {
                assert_eq!(square, sq(6, 4));
                assert_eq!(moves.len(), 2);
                assert!(moves.contains(&sq(4, 4)));
            }
            other => panic!("expected a selection, got {other:?}"),
        }

        let outcome = selection.select_square(&mut game, sq(4, 4));
        assert!(matches!(
            outcome,
            SelectionOutcome::Moved(MoveResult {
                committed: true,
                status: GameStatus::InProgress,
                ..
            })
        ));
        assert_eq!(selection.selected(), None);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn picking_another_own_piece_switches_selection() {
        let mut game = ChessGame::new();
        let mut selection = Selection::new();
        selection.select_square(&mut game, sq(6, 4));
        let outcome = selection.select_square(&mut game, sq(7, 6));
        assert_eq!(
            outcome,
            SelectionOutcome::Selected {
                square: sq(7, 6),
                moves: vec![sq(5, 5), sq(5, 7)],
            }
        );
        assert_eq!(selection.selected(), Some(sq(7, 6)));
    }

    #[test]
    fn unreachable_square_clears_selection() {
        let mut game = ChessGame::new();
        let mut selection = Selection::new();
        selection.select_square(&mut game, sq(6, 4));
        assert_eq!(selection.select_square(&mut game, sq(3, 0)), SelectionOutcome::Cleared);
        assert_eq!(selection.selected(), None);
        assert!(game.history().is_empty());
    }

    #[test]
    fn empty_and_opponent_squares_are_ignored_without_selection() {
        let mut game = ChessGame::new();
        let mut selection = Selection::new();
        assert_eq!(selection.select_square(&mut game, sq(4, 4)), SelectionOutcome::Ignored);
        assert_eq!(selection.select_square(&mut game, sq(1, 4)), SelectionOutcome::Ignored);
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn finished_game_ignores_every_pick() {
        let mut game = ChessGame::new();
        for (from, to) in [
            (sq(6, 5), sq(5, 5)),
            (sq(1, 4), sq(3, 4)),
            (sq(6, 6), sq(4, 6)),
            (sq(0, 3), sq(4, 7)),
        ] {
            game.execute_move(from, to);
        }
        assert!(game.is_game_over());

        let mut selection = Selection::new();
        assert_eq!(selection.select_square(&mut game, sq(6, 0)), SelectionOutcome::Ignored);
        assert_eq!(selection.selected(), None);
    }
}
