//! Legal move generation.
//!
//! Takes the pseudo-legal destinations of a piece, adds castling candidates
//! for the king, and drops every move that would leave the mover's own king
//! in check. Each candidate is tested by applying its `BoardPatch` to a
//! scratch board, asking the check detector, and reverting.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, LastMove, PieceKind, Square};
use crate::move_generation::board_patch::with_move_applied;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_moves_castling::generate_castling_moves;
use crate::move_generation::move_generator::pseudo_legal_moves;

/// Legal destinations for the piece on `from`. Empty for an empty square.
pub fn legal_moves(board: &Board, last_move: Option<LastMove>, from: Square) -> Vec<Square> {
    let mut scratch = board.clone();
    legal_moves_in_place(&mut scratch, last_move, from)
}

/// Same as [`legal_moves`] but simulates directly on `board`, which is
/// restored before returning.
pub fn legal_moves_in_place(
    board: &mut Board,
    last_move: Option<LastMove>,
    from: Square,
) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut candidates = pseudo_legal_moves(board, last_move, from);
    if piece.kind == PieceKind::King {
        generate_castling_moves(board, from, &mut candidates);
    }

    candidates.retain(|&to| !with_move_applied(board, from, to, |b| is_in_check(b, piece.color)));
    candidates
}

/// Every legal `(from, to)` pair for `color`.
pub fn all_legal_moves(
    board: &Board,
    last_move: Option<LastMove>,
    color: Color,
) -> Vec<(Square, Square)> {
    let mut scratch = board.clone();
    let origins: Vec<Square> = board.pieces(color).map(|(square, _)| square).collect();

    origins
        .into_iter()
        .flat_map(|from| {
            legal_moves_in_place(&mut scratch, last_move, from)
                .into_iter()
                .map(move |to| (from, to))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// True when `color` has at least one legal move. Stops at the first hit.
pub fn has_any_legal_move(board: &Board, last_move: Option<LastMove>, color: Color) -> bool {
    let mut scratch = board.clone();
    let origins: Vec<Square> = board.pieces(color).map(|(square, _)| square).collect();
    origins
        .into_iter()
        .any(|from| !legal_moves_in_place(&mut scratch, last_move, from).is_empty())
}
