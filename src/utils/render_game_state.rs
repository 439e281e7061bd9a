//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for the hot-seat driver, tests, and
//! diagnostics in text environments. Row 0 (rank 8) is printed first, so
//! White sits at the bottom.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

const FILE_LABELS: &str = "  a b c d e f g h";

/// How the board should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Plain letters (`K`, `q`, ...) instead of Unicode chess glyphs.
    pub ascii: bool,
    /// File letters above and below, rank digits on both sides.
    pub coordinates: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ascii: false,
            coordinates: true,
        }
    }
}

/// Render `board` to a string for terminal output.
pub fn render_board(board: &Board, options: RenderOptions) -> String {
    let mut out = String::new();

    if options.coordinates {
        out.push_str(FILE_LABELS);
        out.push('\n');
    }

    for row in 0..8i8 {
        let rank = char::from(b'8' - row as u8);
        if options.coordinates {
            out.push(rank);
            out.push(' ');
        }

        for col in 0..8i8 {
            match board.get(Square::new(row, col)) {
                Some(piece) => out.push(piece_glyph(piece, options.ascii)),
                None if options.ascii => out.push('.'),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        if options.coordinates {
            out.push(' ');
            out.push(rank);
        }
        out.push('\n');
    }

    if options.coordinates {
        out.push_str(FILE_LABELS);
    } else {
        out.pop();
    }

    out
}

/// Display character for `piece`. ASCII uses uppercase for White.
pub fn piece_glyph(piece: Piece, ascii: bool) -> char {
    if ascii {
        let letter = match piece.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        return match piece.color {
            Color::White => letter.to_ascii_uppercase(),
            Color::Black => letter,
        };
    }

    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

/// Space-separated glyphs, as shown in a captured-pieces tray.
pub fn render_pieces(pieces: &[Piece], ascii: bool) -> String {
    pieces
        .iter()
        .map(|piece| piece_glyph(*piece, ascii).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
