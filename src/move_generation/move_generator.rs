//! Pseudo-legal move dispatch.
//!
//! Routes an occupied square to the movement pattern of its piece kind. The
//! result ignores whether the mover's own king would be left in check, and
//! the king's list never contains castling. This is also the attack set used
//! by the check detector.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{LastMove, PieceKind, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Destinations reachable from `from` by its piece's movement pattern.
/// Empty when `from` is empty or off the board.
pub fn pseudo_legal_moves(board: &Board, last_move: Option<LastMove>, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    let Some(piece) = board.get(from) else {
        return out;
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color, last_move, &mut out),
        PieceKind::Knight => knight_moves(board, from, piece.color, &mut out),
        PieceKind::Bishop => bishop_moves(board, from, piece.color, &mut out),
        PieceKind::Rook => rook_moves(board, from, piece.color, &mut out),
        PieceKind::Queen => queen_moves(board, from, piece.color, &mut out),
        PieceKind::King => king_moves(board, from, piece.color, &mut out),
    }

    out
}
