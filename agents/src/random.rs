use crate::Agent;
use minichess_core::{Board, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Plays a uniformly random pseudo-legal move.
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            name: "Random".to_string(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible move choices for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            name: format!("Random(seed={})", seed),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn best_move(&mut self, board: &Board) -> Option<Move> {
        board.legal_moves().choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
