use crate::board::Board;
use crate::types::{Material, Move};

/// Node counts from a pseudo-legal move tree walk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PerftResults {
    pub nodes: u64,
    pub captures: u64,
    /// Leaf moves that took a king
    pub king_captures: u64,
}

impl PerftResults {
    /// Combines results from child nodes.
    pub fn add(&mut self, other: &Self) {
        self.nodes += other.nodes;
        self.captures += other.captures;
        self.king_captures += other.king_captures;
    }
}

/// Counts leaf positions `depth` plies deep. A position where a king has
/// been taken is a leaf regardless of depth. The board is restored on return.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 || board.is_terminal() {
        return 1;
    }

    let moves = board.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        let undo = board.apply(mv);
        nodes += perft(board, depth - 1);
        board.undo(undo);
    }

    nodes
}

/// Node counts per root move.
pub fn perft_divide(board: &mut Board, depth: u8) -> Vec<(Move, u64)> {
    let mut results = Vec::new();

    for mv in board.legal_moves() {
        let undo = board.apply(mv);
        let nodes = if depth <= 1 { 1 } else { perft(board, depth - 1) };
        board.undo(undo);
        results.push((mv, nodes));
    }

    results
}

/// Perft with capture statistics at the leaves.
pub fn perft_detailed(board: &mut Board, depth: u8) -> PerftResults {
    let mut results = PerftResults::default();

    if depth == 0 || board.is_terminal() {
        results.nodes = 1;
        return results;
    }

    for mv in board.legal_moves() {
        let undo = board.apply(mv);

        if depth == 1 {
            results.nodes += 1;
            if let Some(captured) = undo.captured {
                results.captures += 1;
                if captured.material == Material::King {
                    results.king_captures += 1;
                }
            }
        } else {
            let child_results = perft_detailed(board, depth - 1);
            results.add(&child_results);
        }

        board.undo(undo);
    }

    results
}
