use crate::evaluation::Evaluatable;
use log::{debug, trace, warn};
use minichess_core::{Board, Move, Side};
use std::thread;

/// Score a side starts from before any move has been looked at. It is also
/// what a search returns when the side to move has no moves at all.
pub const NO_MOVE_SCORE: f64 = 99999.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Backed-up score, positive favoring White
    pub score: f64,
    /// None when the side to move had no moves
    pub best_move: Option<Move>,
    pub depth: u32,
    pub nodes: u64,
}

/// Starting value for the side to move: the worst score it could end up with.
const fn worst_score(side: Side) -> f64 {
    match side {
        Side::White => -NO_MOVE_SCORE,
        Side::Black => NO_MOVE_SCORE,
    }
}

/// White maximizes and Black minimizes. Strict, so ties keep the first move.
fn improves(side: Side, score: f64, best: f64) -> bool {
    match side {
        Side::White => score > best,
        Side::Black => score < best,
    }
}

fn root_depth(depth: u32) -> u32 {
    if depth == 0 {
        warn!("search depth 0 requested, searching 1 ply");
        1
    } else {
        depth
    }
}

/// Per-search counters. Every method leaves the board exactly as it found it.
#[derive(Debug, Default)]
struct Searcher {
    nodes: u64,
}

impl Searcher {
    fn minimax(&mut self, board: &mut Board, depth: u32) -> SearchResult {
        let depth = root_depth(depth);
        let side = board.turn;
        let mut best_score = worst_score(side);
        let mut best_move = None;

        for mv in board.legal_moves() {
            let undo = board.apply(mv);
            let score = self.minimax_turn(board, depth - 1, side.opponent());
            board.undo(undo);
            trace!("{mv}: {score:.3}");

            if improves(side, score, best_score) {
                best_score = score;
                best_move = Some(mv);
            }
        }

        SearchResult {
            score: best_score,
            best_move,
            depth,
            nodes: self.nodes,
        }
    }

    fn minimax_turn(&mut self, board: &mut Board, depth: u32, side: Side) -> f64 {
        self.nodes += 1;

        if depth == 0 || board.is_terminal() {
            return board.evaluate(depth);
        }

        let turn = board.turn;
        board.turn = side;

        let mut best_score = worst_score(side);
        for mv in board.legal_moves() {
            let undo = board.apply(mv);
            let score = self.minimax_turn(board, depth - 1, side.opponent());
            board.undo(undo);

            if improves(side, score, best_score) {
                best_score = score;
            }
        }

        board.turn = turn;
        best_score
    }

    fn alphabeta(&mut self, board: &mut Board, depth: u32, alpha: f64, beta: f64) -> SearchResult {
        let depth = root_depth(depth);
        let side = board.turn;
        let (mut alpha, mut beta) = (alpha, beta);
        let mut best_score = worst_score(side);
        let mut best_move = None;

        for mv in board.legal_moves() {
            let undo = board.apply(mv);
            let score = self.alphabeta_turn(board, depth - 1, side.opponent(), alpha, beta);
            board.undo(undo);
            trace!("{mv}: {score:.3}");

            if improves(side, score, best_score) {
                best_score = score;
                best_move = Some(mv);
            }

            match side {
                Side::White => alpha = alpha.max(best_score),
                Side::Black => beta = beta.min(best_score),
            }
            if alpha >= beta {
                break;
            }
        }

        SearchResult {
            score: best_score,
            best_move,
            depth,
            nodes: self.nodes,
        }
    }

    /// Fail-soft: a result at or below `alpha` (or at or above `beta`) is a
    /// bound, anything strictly inside the window is exact.
    fn alphabeta_turn(
        &mut self,
        board: &mut Board,
        depth: u32,
        side: Side,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.nodes += 1;

        if depth == 0 || board.is_terminal() {
            return board.evaluate(depth);
        }

        let turn = board.turn;
        board.turn = side;

        let mut best_score = worst_score(side);
        for mv in board.legal_moves() {
            let undo = board.apply(mv);
            let score = self.alphabeta_turn(board, depth - 1, side.opponent(), alpha, beta);
            board.undo(undo);

            if improves(side, score, best_score) {
                best_score = score;
            }

            match side {
                Side::White => alpha = alpha.max(best_score),
                Side::Black => beta = beta.min(best_score),
            }
            if alpha >= beta {
                break;
            }
        }

        board.turn = turn;
        best_score
    }
}

/// Plain minimax to `depth` plies for the side to move.
///
/// Returns the best score with the first move that reaches it, or
/// `∓NO_MOVE_SCORE` with no move when there is nothing to play. The board is
/// searched in place and restored before returning.
pub fn minimax(board: &mut Board, depth: u32) -> SearchResult {
    let mut searcher = Searcher::default();
    searcher.minimax(board, depth)
}

/// One ply of minimax with `side` to move, `depth` plies left.
///
/// Stops and evaluates when no depth is left or a king is gone.
pub fn minimax_turn(board: &mut Board, depth: u32, side: Side) -> f64 {
    let mut searcher = Searcher::default();
    searcher.minimax_turn(board, depth, side)
}

/// Minimax with alpha-beta pruning. Called with an open window
/// (`-inf`, `inf`) it returns the same score and move as [`minimax`].
pub fn alphabeta(board: &mut Board, depth: u32, alpha: f64, beta: f64) -> SearchResult {
    let mut searcher = Searcher::default();
    searcher.alphabeta(board, depth, alpha, beta)
}

/// Picks a move for the side to move with either search. The caller's board
/// is not touched.
pub fn computer_move(board: &Board, depth: u32, use_alphabeta: bool) -> SearchResult {
    let mut board = board.clone();
    let result = if use_alphabeta {
        alphabeta(&mut board, depth, f64::NEG_INFINITY, f64::INFINITY)
    } else {
        minimax(&mut board, depth)
    };

    debug!(
        "{} depth={} nodes={} score={:.3} best={}",
        if use_alphabeta { "alphabeta" } else { "minimax" },
        result.depth,
        result.nodes,
        result.score,
        result
            .best_move
            .map_or_else(|| "(none)".to_string(), |mv| mv.to_string())
    );
    result
}

/// Minimax with the root moves split across `threads` scoped threads.
///
/// Each thread searches its share of root moves on its own copy of the
/// board. Scores are merged in root-move order, so the result is the same
/// as [`minimax`].
pub fn minimax_parallel(board: &Board, depth: u32, threads: usize) -> SearchResult {
    let moves = board.legal_moves();
    if threads <= 1 || moves.len() <= 1 {
        return minimax(&mut board.clone(), depth);
    }

    let depth = root_depth(depth);
    let side = board.turn;
    let chunk_size = moves.len().div_ceil(threads);

    let chunks: Vec<(Vec<f64>, u64)> = thread::scope(|s| {
        let handles: Vec<_> = moves
            .chunks(chunk_size)
            .map(|chunk| {
                s.spawn(move || {
                    let mut board = board.clone();
                    let mut searcher = Searcher::default();
                    let scores: Vec<f64> = chunk
                        .iter()
                        .map(|&mv| {
                            let undo = board.apply(mv);
                            let score = searcher.minimax_turn(&mut board, depth - 1, side.opponent());
                            board.undo(undo);
                            score
                        })
                        .collect();
                    (scores, searcher.nodes)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });

    let mut best_score = worst_score(side);
    let mut best_move = None;
    let scores = chunks.iter().flat_map(|(scores, _)| scores.iter().copied());
    for (mv, score) in moves.iter().copied().zip(scores) {
        if improves(side, score, best_score) {
            best_score = score;
            best_move = Some(mv);
        }
    }
    let nodes: u64 = chunks.iter().map(|(_, n)| n).sum();

    debug!(
        "minimax threads={} depth={} nodes={} score={:.3}",
        threads, depth, nodes, best_score
    );

    SearchResult {
        score: best_score,
        best_move,
        depth,
        nodes,
    }
}
