//! Pseudo-legal move generation.
//!
//! Moves obey piece movement rules and never land on a friendly piece, but
//! nothing checks whether the mover's own king is left en prise. Move order
//! is deterministic: pieces in column-major scan order, and for each piece
//! its directions in the fixed order below. The search breaks ties by this
//! order.

use crate::board::Board;
use crate::error::Result;
use crate::types::{Coord, Material, Move};

const KING_DIRS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const STRAIGHT_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const DIAGONAL_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// Squares holding a piece of the side to move, in column-major order.
    pub fn get_own_pieces(&self) -> Vec<Coord> {
        self.pieces()
            .filter(|(_, p)| p.side == self.turn)
            .map(|(c, _)| c)
            .collect()
    }

    /// Walks from `loc` in steps of (dx, dy).
    ///
    /// Empty squares yield a move and the walk continues; an opponent's
    /// piece yields a capture and ends it; a friendly piece or the board
    /// edge ends it without a move. With `one` set only the first step is
    /// looked at.
    pub fn explore_line(&self, loc: Coord, dx: i8, dy: i8, one: bool) -> Vec<Move> {
        let mut moves = Vec::new();
        let mut current = loc.offset(dx, dy);

        while let Some(to) = current {
            match self.get_boardpiece(to) {
                None => moves.push(Move::new(loc, to)),
                Some(piece) => {
                    if piece.side != self.turn {
                        moves.push(Move::new(loc, to));
                    }
                    break;
                }
            }
            if one {
                break;
            }
            current = to.offset(dx, dy);
        }

        moves
    }

    /// Moves available to the piece on `loc`, or none if the square is empty.
    pub fn piece_moves(&self, loc: Coord) -> Vec<Move> {
        let Some(piece) = self.get_boardpiece(loc) else {
            return Vec::new();
        };

        match piece.material {
            Material::King => self.rays(loc, &KING_DIRS, true),
            Material::Pawn => self.moves_pawn(loc),
            Material::Rook => self.rays(loc, &STRAIGHT_DIRS, false),
            Material::Bishop => self.rays(loc, &DIAGONAL_DIRS, false),
            Material::Knight => self.rays(loc, &KNIGHT_DELTAS, true),
            Material::Queen => self.rays(loc, &KING_DIRS, false),
        }
    }

    /// Every pseudo-legal move of the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.get_own_pieces()
            .into_iter()
            .flat_map(|loc| self.piece_moves(loc))
            .collect()
    }

    /// True iff `mv` is among [`Board::legal_moves`].
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }

    /// Parses a move token and checks it against [`Board::legal_moves`].
    pub fn is_legal_move_str(&self, token: &str) -> Result<bool> {
        let mv: Move = token.parse()?;
        Ok(self.is_legal_move(mv))
    }

    fn rays(&self, loc: Coord, dirs: &[(i8, i8)], one: bool) -> Vec<Move> {
        dirs.iter()
            .flat_map(|&(dx, dy)| self.explore_line(loc, dx, dy, one))
            .collect()
    }

    /// One step forward onto an empty or enemy square, plus diagonal
    /// captures. No double step, en passant or promotion.
    fn moves_pawn(&self, loc: Coord) -> Vec<Move> {
        let dy = self.turn.pawn_direction();
        let mut moves = self.explore_line(loc, 0, dy, true);

        for dx in [-1, 1] {
            if let Some(to) = loc.offset(dx, dy) {
                if self
                    .get_boardpiece(to)
                    .is_some_and(|p| p.side != self.turn)
                {
                    moves.push(Move::new(loc, to));
                }
            }
        }

        moves
    }
}
