use minichess_core::{Board, Side};

/// Multiplier applied once per ply of remaining depth.
pub const DEPTH_BIAS: f64 = 1.1;

/// Material balance from White's perspective: the worth of every White
/// piece minus the worth of every Black piece.
pub fn material_balance(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| match piece.side {
            Side::White => piece.worth() as i32,
            Side::Black => -(piece.worth() as i32),
        })
        .sum()
}

/// Scores a position for the search. Positive favors White.
///
/// The material balance is multiplied by `1.1^depth_left`, so the same
/// balance counts for more when it is reached with more depth remaining.
pub fn evaluate_board(board: &Board, depth_left: u32) -> f64 {
    f64::from(material_balance(board)) * DEPTH_BIAS.powi(depth_left as i32)
}

/// Trait for types that can be scored by the material evaluator.
pub trait Evaluatable {
    fn evaluate(&self, depth_left: u32) -> f64;
}

impl Evaluatable for Board {
    fn evaluate(&self, depth_left: u32) -> f64 {
        evaluate_board(self, depth_left)
    }
}
