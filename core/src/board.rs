//! Board state: an 8x8 grid of optional pieces plus the side to move.

use crate::error::{ChessError, Result};
use crate::types::*;
use std::fmt;

/// Everything needed to take back a move made with [`Board::apply`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Undo {
    pub mv: Move,
    /// Whatever stood on the destination square before the move
    pub captured: Option<Piece>,
    /// Side to move before the move
    pub turn: Side,
}

/// Array-based board indexed `[y][x]`, row 0 being rank 8.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub turn: Side,
    grid: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates an empty board with the given side to move.
    pub const fn new(turn: Side) -> Self {
        Self {
            turn,
            grid: [[None; 8]; 8],
        }
    }

    /// Creates a board from a textual layout. `default_turn` is used when the
    /// layout carries no turn marker.
    pub fn from_layout(input: &str, default_turn: Side) -> Result<Self> {
        let mut board = Self::new(default_turn);
        board.load_from_input(input)?;
        Ok(board)
    }

    /// Replaces the grid with the layout in `input`.
    ///
    /// The layout is 8 newline-separated rows, rank 8 first. `.` is an empty
    /// square and a piece letter (`pnbrqk`) is a piece, uppercase for White.
    /// Carriage returns are skipped. The character right after the 8th row
    /// may be `W` or `B` to set the side to move; everything after it is
    /// ignored. On error the board is left untouched.
    pub fn load_from_input(&mut self, input: &str) -> Result<()> {
        let mut grid = [[None; 8]; 8];
        let mut turn = self.turn;
        let (mut x, mut y) = (0usize, 0usize);

        for c in input.chars() {
            if y == 8 {
                match c {
                    'W' => turn = Side::White,
                    'B' => turn = Side::Black,
                    _ => {}
                }
                break;
            }

            match c {
                '\r' => {}
                '\n' => {
                    x = 0;
                    y += 1;
                }
                _ => {
                    if x >= 8 {
                        return Err(ChessError::InvalidLayout(format!(
                            "row {} has more than 8 columns",
                            y + 1
                        )));
                    }
                    if c != '.' {
                        grid[y][x] = Some(Piece::from_char(c).ok_or(ChessError::InvalidPiece(c))?);
                    }
                    x += 1;
                }
            }
        }

        // The last row may end without a newline.
        let rows = if x > 0 { y + 1 } else { y };
        if rows < 8 {
            return Err(ChessError::InvalidLayout(format!(
                "expected 8 rows, found {rows}"
            )));
        }

        self.grid = grid;
        self.turn = turn;
        Ok(())
    }

    /// Gets the piece at the given square.
    pub fn get_boardpiece(&self, pos: Coord) -> Option<Piece> {
        self.grid[pos.y() as usize][pos.x() as usize]
    }

    /// Sets or clears the given square.
    pub fn set_boardpiece(&mut self, pos: Coord, piece: Option<Piece>) {
        self.grid[pos.y() as usize][pos.x() as usize] = piece;
    }

    /// Returns a new board with `mv` carried out and the turn passed to the
    /// other side. Whatever stood on the destination is overwritten. The
    /// move is not checked for legality.
    pub fn make_move(&self, mv: Move) -> Board {
        let mut board = self.clone();
        board.apply(mv);
        board
    }

    /// Carries out `mv` in place and returns the record needed to undo it.
    pub fn apply(&mut self, mv: Move) -> Undo {
        let piece = self.get_boardpiece(mv.from);
        let captured = self.get_boardpiece(mv.to);
        let undo = Undo {
            mv,
            captured,
            turn: self.turn,
        };

        self.set_boardpiece(mv.to, piece);
        self.set_boardpiece(mv.from, None);
        self.turn = self.turn.opponent();
        undo
    }

    /// Takes back a move made with [`Board::apply`], restoring any captured
    /// piece and the side to move.
    pub fn undo(&mut self, undo: Undo) {
        let piece = self.get_boardpiece(undo.mv.to);
        self.set_boardpiece(undo.mv.from, piece);
        self.set_boardpiece(undo.mv.to, undo.captured);
        self.turn = undo.turn;
    }

    /// True iff `side` has no king left on the board.
    pub fn is_king_dead(&self, side: Side) -> bool {
        !self
            .pieces()
            .any(|(_, p)| p.side == side && p.material == Material::King)
    }

    /// True once either king has been captured.
    pub fn is_terminal(&self) -> bool {
        self.is_king_dead(Side::White) || self.is_king_dead(Side::Black)
    }

    /// The side that captured the opposing king, if the game is over.
    pub fn winner(&self) -> Option<Side> {
        if self.is_king_dead(Side::Black) {
            Some(Side::White)
        } else if self.is_king_dead(Side::White) {
            Some(Side::Black)
        } else {
            None
        }
    }

    /// Iterates occupied squares in column-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(move |c| self.get_boardpiece(c).map(|p| (c, p)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   abcdefgh")?;
        writeln!(f)?;
        for (y, row) in self.grid.iter().enumerate() {
            write!(f, "{}  ", 8 - y)?;
            for cell in row {
                let c = cell.map_or('.', Piece::to_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "It is {}'s turn", self.turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = "\
rnbqkbnr
pppppppp
........
........
........
........
PPPPPPPP
RNBQKBNR
";

    fn sq(s: &str) -> Coord {
        s.parse().unwrap()
    }

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn test_load_layout() {
        let board = Board::from_layout(LAYOUT, Side::White).unwrap();

        assert_eq!(
            board.get_boardpiece(sq("e1")),
            Some(Piece::new(Side::White, Material::King))
        );
        assert_eq!(
            board.get_boardpiece(sq("d8")),
            Some(Piece::new(Side::Black, Material::Queen))
        );
        assert_eq!(board.get_boardpiece(sq("e4")), None);
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.turn, Side::White);
    }

    #[test]
    fn test_turn_marker() {
        let black = format!("{LAYOUT}B");
        assert_eq!(Board::from_layout(&black, Side::White).unwrap().turn, Side::Black);

        let white = format!("{LAYOUT}W");
        assert_eq!(Board::from_layout(&white, Side::Black).unwrap().turn, Side::White);

        // No marker keeps the constructor's turn
        assert_eq!(Board::from_layout(LAYOUT, Side::Black).unwrap().turn, Side::Black);
    }

    #[test]
    fn test_carriage_returns_and_missing_final_newline() {
        let crlf = LAYOUT.replace('\n', "\r\n");
        let board = Board::from_layout(&crlf, Side::White).unwrap();
        assert_eq!(board, Board::from_layout(LAYOUT, Side::White).unwrap());

        let trimmed = LAYOUT.trim_end();
        assert_eq!(
            Board::from_layout(trimmed, Side::White).unwrap(),
            Board::from_layout(LAYOUT, Side::White).unwrap()
        );
    }

    #[test]
    fn test_load_rejects_bad_layouts() {
        assert_eq!(
            Board::from_layout("........\nx.......\n", Side::White),
            Err(ChessError::InvalidPiece('x'))
        );
        assert!(matches!(
            Board::from_layout(".........\n", Side::White),
            Err(ChessError::InvalidLayout(_))
        ));
        assert!(matches!(
            Board::from_layout("........\n........\n", Side::White),
            Err(ChessError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_failed_load_leaves_board_untouched() {
        let mut board = Board::from_layout(LAYOUT, Side::White).unwrap();
        let before = board.clone();
        assert!(board.load_from_input("kq\n").is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_make_move_returns_new_board() {
        let board = Board::from_layout(LAYOUT, Side::White).unwrap();
        let next = board.make_move(mv("e2e4"));

        assert_eq!(next.turn, Side::Black);
        assert_eq!(next.get_boardpiece(sq("e2")), None);
        assert_eq!(
            next.get_boardpiece(sq("e4")),
            Some(Piece::new(Side::White, Material::Pawn))
        );
        // The source board is unchanged
        assert_eq!(board.turn, Side::White);
        assert!(board.get_boardpiece(sq("e2")).is_some());
    }

    #[test]
    fn test_reverse_token_restores_quiet_move() {
        let board = Board::from_layout(LAYOUT, Side::White).unwrap();
        let there = board.make_move(mv("g1f3"));
        let back = there.make_move(mv("g1f3").reversed());
        assert_eq!(back, board);
    }

    #[test]
    fn test_reverse_token_loses_captured_piece() {
        let board = Board::from_layout(LAYOUT, Side::White).unwrap();
        // Queen takes on d7: a blind swap cannot bring the pawn back.
        let there = board.make_move(mv("d1d7"));
        let back = there.make_move(mv("d1d7").reversed());
        assert_eq!(back.get_boardpiece(sq("d7")), None);
        assert_ne!(back, board);
    }

    #[test]
    fn test_apply_undo_restores_capture() {
        let mut board = Board::from_layout(LAYOUT, Side::White).unwrap();
        let before = board.clone();

        let undo = board.apply(mv("d1d7"));
        assert_eq!(undo.captured, Some(Piece::new(Side::Black, Material::Pawn)));
        assert_eq!(board.turn, Side::Black);

        board.undo(undo);
        assert_eq!(board, before);
    }

    #[test]
    fn test_king_dead() {
        let mut board = Board::new(Side::White);
        assert!(board.is_king_dead(Side::White));
        assert!(board.is_king_dead(Side::Black));

        board.set_boardpiece(sq("e1"), Some(Piece::new(Side::White, Material::King)));
        board.set_boardpiece(sq("e8"), Some(Piece::new(Side::Black, Material::Queen)));
        assert!(!board.is_king_dead(Side::White));
        assert!(board.is_king_dead(Side::Black));
        assert_eq!(board.winner(), Some(Side::White));

        board.set_boardpiece(sq("e8"), Some(Piece::new(Side::Black, Material::King)));
        assert!(!board.is_terminal());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_display() {
        let board = Board::from_layout(LAYOUT, Side::Black).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "   abcdefgh");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "8  rnbqkbnr");
        assert_eq!(lines[9], "1  RNBQKBNR");
        assert_eq!(lines[10], "It is Black's turn");
    }
}
