//! Reversible board writes.
//!
//! A `BoardPatch` is the complete list of square writes a move performs:
//! relocation, en passant removal, and the castling rook hop. Applying it
//! yields a `RevertPatch` with the overwritten occupants, so legality
//! simulation is an explicit apply/inverse pair rather than ad hoc restores.
//! The move executor commits through the same builder.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::chess_types::{Piece, PieceKind, Square};

/// Square writes for one move, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardPatch {
    writes: Vec<(Square, Option<Piece>)>,
}

/// Occupants overwritten by an applied patch.
#[must_use = "a reverted board needs the revert patch applied"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevertPatch {
    previous: Vec<(Square, Option<Piece>)>,
}

impl BoardPatch {
    /// Build the writes for moving the piece on `from` to `to`. Moved pieces
    /// are written with `has_moved` set. Empty when `from` is empty.
    pub fn for_move(board: &Board, from: Square, to: Square) -> Self {
        let mut writes = Vec::with_capacity(4);
        let Some(piece) = board.get(from) else {
            return Self { writes };
        };

        if let Some(captured_at) = en_passant_capture_square(board, from, to) {
            writes.push((captured_at, None));
        }

        writes.push((from, None));
        writes.push((to, Some(piece.moved())));

        if let Some((rook_from, rook_to)) = castling_rook_squares(board, from, to) {
            if let Some(rook) = board.get(rook_from) {
                writes.push((rook_from, None));
                writes.push((rook_to, Some(rook.moved())));
            }
        }

        Self { writes }
    }

    /// Bare relocation of one piece, ignoring every special rule.
    pub fn relocate(board: &Board, from: Square, to: Square) -> Self {
        let writes = match board.get(from) {
            Some(piece) => vec![(from, None), (to, Some(piece.moved()))],
            None => Vec::new(),
        };
        Self { writes }
    }

    pub fn apply(&self, board: &mut Board) -> RevertPatch {
        let previous = self
            .writes
            .iter()
            .map(|&(square, piece)| (square, board.set(square, piece)))
            .collect();
        RevertPatch { previous }
    }

    /// Apply permanently, discarding the overwritten occupants.
    pub fn commit(&self, board: &mut Board) {
        for &(square, piece) in &self.writes {
            board.set(square, piece);
        }
    }
}

impl RevertPatch {
    pub fn revert(self, board: &mut Board) {
        for (square, piece) in self.previous.into_iter().rev() {
            board.set(square, piece);
        }
    }
}

/// Apply the move on `from`→`to`, run `inspect` on the resulting board, and
/// restore the board before returning.
pub fn with_move_applied<R>(
    board: &mut Board,
    from: Square,
    to: Square,
    inspect: impl FnOnce(&Board) -> R,
) -> R {
    let patch = BoardPatch::for_move(board, from, to);
    with_patch_applied(board, &patch, inspect)
}

/// Apply `patch`, run `inspect`, and revert.
pub fn with_patch_applied<R>(
    board: &mut Board,
    patch: &BoardPatch,
    inspect: impl FnOnce(&Board) -> R,
) -> R {
    #[cfg(debug_assertions)]
    let before = board.clone();

    let revert = patch.apply(board);
    let result = inspect(board);
    revert.revert(board);

    #[cfg(debug_assertions)]
    debug_assert_eq!(*board, before, "simulated patch left the board changed");

    result
}

/// Square of the pawn removed by an en passant capture, if `from`→`to` is
/// one: a pawn moving diagonally onto an empty square.
pub fn en_passant_capture_square(board: &Board, from: Square, to: Square) -> Option<Square> {
    let piece = board.get(from)?;
    if piece.kind == PieceKind::Pawn && from.col != to.col && board.is_empty(to) {
        Some(Square::new(from.row, to.col))
    } else {
        None
    }
}

/// Rook source and destination when `from`→`to` is a two-column king move.
pub fn castling_rook_squares(board: &Board, from: Square, to: Square) -> Option<(Square, Square)> {
    let piece = board.get(from)?;
    let d_col = to.col - from.col;
    if piece.kind != PieceKind::King || from.row != to.row || d_col.abs() != 2 {
        return None;
    }

    let step = d_col.signum();
    let rook_col = if step > 0 {
        KING_SIDE_ROOK_COL
    } else {
        QUEEN_SIDE_ROOK_COL
    };
    Some((
        Square::new(from.row, rook_col),
        Square::new(from.row, from.col + step),
    ))
}
