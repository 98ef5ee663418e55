pub mod evaluation;
pub mod minimax;
pub mod random;
pub mod search;

use minichess_core::{Board, Move};

/// Core trait for move-picking agents
pub trait Agent {
    /// Pick a move for the side to move, or None if it has no moves
    fn best_move(&mut self, board: &Board) -> Option<Move>;

    /// Get the agent's name
    fn name(&self) -> &str;
}

pub use evaluation::*;
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
pub use search::*;
