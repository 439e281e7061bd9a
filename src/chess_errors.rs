//! Errors used throughout the rules engine.
//!
//! Rule-level mistakes (moving an opponent's piece, trying an illegal
//! destination, undoing with an empty history) are not errors here: they
//! degrade to no-ops with a `false` or `committed: false` result. `ChessError`
//! is reserved for malformed API input such as unparsable square names or a
//! promotion choice supplied when nothing is pending.
//!
//! Usage guidelines:
//! - Functions that can receive malformed input return `ChessResult<T>`.
//! - Callers (for example the terminal driver) match on `ChessError` to print
//!   a friendly message and keep the session alive; every variant is
//!   recoverable.

use thiserror::Error;

use crate::game_state::chess_types::Square;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A square name such as `e4` could not be parsed.
    ///
    /// Payload: the offending text.
    #[error("invalid square name: {0:?}")]
    InvalidSquareName(String),

    /// Row/column coordinates outside `0..=7`.
    #[error("square ({row}, {col}) is off the board")]
    SquareOffBoard { row: i8, col: i8 },

    /// `resolve_promotion` was called while no pawn is waiting for a choice.
    #[error("no promotion is pending")]
    NoPromotionPending,

    /// `resolve_promotion` named a different square than the pending pawn.
    #[error("promotion is pending on {expected}, not {got}")]
    PromotionSquareMismatch { expected: Square, got: Square },

    /// A promotion letter other than `q`, `r`, `b` or `n`.
    #[error("invalid promotion choice {0:?} (expected one of q, r, b, n)")]
    InvalidPromotionChoice(char),

    /// The terminal driver did not understand a command line.
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
}

/// Result alias for fallible engine operations.
pub type ChessResult<T> = Result<T, ChessError>;
