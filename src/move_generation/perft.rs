//! Perft: leaf counts of the legal move tree.
//!
//! Walks cloned `GameState`s through the real executor so the counts cover
//! the whole commit path, not just generation. A pending promotion expands
//! into one child per promotion choice.

use std::thread;

use crate::game_state::chess_types::{GameStatus, PromotionChoice, Square};
use crate::game_state::game_state::GameState;
use crate::history::move_history::MoveKind;
use crate::move_generation::legal_move_apply::{apply_move, apply_promotion};
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn leaf(child: &GameState) -> Self {
        let mut counts = PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };

        if let Some(record) = child.history.last() {
            if record.is_capture() {
                counts.captures += 1;
            }
            match record.kind() {
                MoveKind::EnPassant => counts.en_passant += 1,
                MoveKind::Castle(_) => counts.castles += 1,
                MoveKind::Promotion { .. } => counts.promotions += 1,
                MoveKind::Normal | MoveKind::Capture => {}
            }
        }

        match child.status {
            GameStatus::Check => counts.checks += 1,
            GameStatus::Checkmate => {
                counts.checks += 1;
                counts.checkmates += 1;
            }
            GameStatus::InProgress | GameStatus::Stalemate => {}
        }

        counts
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for child in children(game_state) {
        perft_recurse(&child, depth, 1, &mut total);
    }
    total
}

/// Same counts as [`perft`], with one worker thread per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return perft(game_state, depth);
    }

    let handles: Vec<_> = children(game_state)
        .into_iter()
        .map(|child| {
            thread::spawn(move || {
                let mut local = PerftCounts::default();
                perft_recurse(&child, depth, 1, &mut local);
                local
            })
        })
        .collect();

    let mut total = PerftCounts::default();
    for handle in handles {
        match handle.join() {
            Ok(local) => total.merge(local),
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
    total
}

fn perft_recurse(child: &GameState, search_depth: u8, current_depth: u8, counts: &mut PerftCounts) {
    if current_depth == search_depth {
        counts.merge(PerftCounts::leaf(child));
        return;
    }

    for grandchild in children(child) {
        perft_recurse(&grandchild, search_depth, current_depth + 1, counts);
    }
}

/// Every position reachable by one legal move, with promotions expanded.
fn children(game_state: &GameState) -> Vec<GameState> {
    if game_state.game_over {
        return Vec::new();
    }

    let moves: Vec<(Square, Square)> = all_legal_moves(
        &game_state.board,
        game_state.last_move,
        game_state.current_player,
    );

    let mut out = Vec::with_capacity(moves.len());
    for (from, to) in moves {
        let mut child = game_state.clone();
        let result = apply_move(&mut child, from, to);
        if result.promotion_pending.is_none() {
            out.push(child);
            continue;
        }

        for choice in PromotionChoice::ALL {
            let mut promoted = child.clone();
            apply_promotion(&mut promoted, choice);
            out.push(promoted);
        }
    }
    out
}
