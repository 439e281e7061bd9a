//! Crate root module declarations for the Plum Rules chess engine.
//!
//! This file exposes the rule-engine subsystems (board model, pseudo-legal
//! move patterns, legality filtering, move execution, history, and the game
//! facade) plus small utilities so the terminal driver, benches, and external
//! front ends can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod board_patch;
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_castling;
    pub mod move_generator;
    pub mod perft;
}

pub mod history {
    pub mod captured_pieces;
    pub mod move_history;
}

pub mod game {
    pub mod chess_game;
    pub mod move_list;
    pub mod selection;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}

#[cfg(test)]
pub(crate) mod test_positions;
