use crate::{
    search::{computer_move, minimax_parallel, SearchResult},
    Agent,
};
use minichess_core::{Board, Move};

pub struct MinimaxAgent {
    name: String,
    depth: u32,
    alphabeta: bool,
    threads: usize,
}

impl MinimaxAgent {
    pub fn new(depth: u32) -> Self {
        MinimaxAgent {
            name: format!("Minimax(depth={})", depth),
            depth,
            alphabeta: false,
            threads: 1,
        }
    }

    pub fn with_alphabeta(depth: u32) -> Self {
        MinimaxAgent {
            name: format!("AlphaBeta(depth={})", depth),
            depth,
            alphabeta: true,
            threads: 1,
        }
    }

    /// Splits root moves over `threads` threads. Only plain minimax is split.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        if !self.alphabeta && self.threads > 1 {
            self.name = format!("Minimax(depth={}, threads={})", self.depth, self.threads);
        }
        self
    }

    /// Full search result for the side to move.
    pub fn search(&self, board: &Board) -> SearchResult {
        if !self.alphabeta && self.threads > 1 {
            minimax_parallel(board, self.depth, self.threads)
        } else {
            computer_move(board, self.depth, self.alphabeta)
        }
    }
}

impl Agent for MinimaxAgent {
    fn best_move(&mut self, board: &Board) -> Option<Move> {
        self.search(board).best_move
    }

    fn name(&self) -> &str {
        &self.name
    }
}
