pub mod board;
pub mod error;
pub mod move_gen;
pub mod notation;
pub mod perft;
pub mod types;

pub use board::*;
pub use error::{ChessError, Result};
pub use notation::{to_coordinate, to_move, to_notation};
pub use perft::{perft, perft_detailed, perft_divide, PerftResults};
pub use types::*;
