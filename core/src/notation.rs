//! Conversions between algebraic notation and grid coordinates.

use crate::error::Result;
use crate::types::Coord;

/// Translates a square in algebraic notation to grid coordinates.
/// `"c3"` becomes (2, 5).
pub fn to_coordinate(notation: &str) -> Result<Coord> {
    notation.parse()
}

/// Translates grid coordinates back to algebraic notation.
pub fn to_notation(coord: Coord) -> String {
    coord.to_string()
}

/// Joins two squares into a move token: (1, 4) and (2, 3) become `"b4c5"`.
pub fn to_move(from: Coord, to: Coord) -> String {
    format!("{}{}", to_notation(from), to_notation(to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChessError;

    #[test]
    fn test_known_squares() {
        assert_eq!(to_coordinate("c3").unwrap(), Coord::new(2, 5).unwrap());
        assert_eq!(to_coordinate("a8").unwrap(), Coord::new(0, 0).unwrap());
        assert_eq!(to_coordinate("h1").unwrap(), Coord::new(7, 7).unwrap());
        assert_eq!(to_notation(Coord::new(4, 6).unwrap()), "e2");
    }

    #[test]
    fn test_round_trip_all_squares() {
        for file in 'a'..='h' {
            for rank in '1'..='8' {
                let notation = format!("{file}{rank}");
                assert_eq!(to_notation(to_coordinate(&notation).unwrap()), notation);
            }
        }
        for coord in Coord::all() {
            assert_eq!(to_coordinate(&to_notation(coord)).unwrap(), coord);
        }
    }

    #[test]
    fn test_to_move() {
        let from = Coord::new(1, 4).unwrap();
        let to = Coord::new(2, 3).unwrap();
        assert_eq!(to_move(from, to), "b4c5");
    }

    #[test]
    fn test_rejects_out_of_range() {
        for bad in ["i1", "a0", "a9", "", "a", "a10", "A1"] {
            assert_eq!(
                to_coordinate(bad),
                Err(ChessError::InvalidSquare(bad.to_string()))
            );
        }
    }
}
