use crate::error::ChessError;
use std::fmt;
use std::str::FromStr;

/// Represents one of the two players.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Returns the opposite side.
    pub const fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Returns the y direction pawns of this side move in.
    /// Rows are counted from the top, so White moves towards y = 0.
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six kinds of material a piece can be.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Material {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Material {
    /// Point value used by the material evaluator.
    pub const fn worth(self) -> u32 {
        match self {
            Material::Pawn => 1,
            Material::Knight => 3,
            Material::Bishop => 3,
            Material::Rook => 5,
            Material::Queen => 9,
            Material::King => 200,
        }
    }

    /// Parses the lowercase one-letter code.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'p' => Some(Material::Pawn),
            'n' => Some(Material::Knight),
            'b' => Some(Material::Bishop),
            'r' => Some(Material::Rook),
            'q' => Some(Material::Queen),
            'k' => Some(Material::King),
            _ => None,
        }
    }

    /// Returns the lowercase one-letter code.
    pub const fn to_char(self) -> char {
        match self {
            Material::Pawn => 'p',
            Material::Knight => 'n',
            Material::Bishop => 'b',
            Material::Rook => 'r',
            Material::Queen => 'q',
            Material::King => 'k',
        }
    }
}

/// A piece on the board. Two pieces with the same side and material are
/// interchangeable.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Piece {
    pub side: Side,
    pub material: Material,
}

impl Piece {
    pub const fn new(side: Side, material: Material) -> Self {
        Self { side, material }
    }

    /// Parses a layout letter: uppercase is White, lowercase is Black.
    pub fn from_char(c: char) -> Option<Self> {
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Material::from_char(c.to_ascii_lowercase()).map(|material| Piece::new(side, material))
    }

    /// Returns the layout letter for this piece.
    pub fn to_char(self) -> char {
        let c = self.material.to_char();
        match self.side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    pub const fn worth(self) -> u32 {
        self.material.worth()
    }
}

/// A square on the board as an (x, y) pair.
/// `x` is the file (a = 0), `y` is the row counted from the top (rank 8 = 0).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Creates a coordinate, returning None when either axis is outside 0-7.
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if x < 8 && y < 8 {
            Some(Coord { x, y })
        } else {
            None
        }
    }

    pub const fn x(self) -> u8 {
        self.x
    }

    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the square one step of (dx, dy) away, if it is on the board.
    pub const fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if x >= 0 && x < 8 && y >= 0 && y < 8 {
            Some(Coord {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Iterates all 64 squares column by column: every y for x = 0, then x = 1, ...
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..8u8).flat_map(|x| (0..8u8).map(move |y| Coord { x, y }))
    }

    /// File letter, 'a'-'h'.
    pub const fn file_char(self) -> char {
        (b'a' + self.x) as char
    }

    /// Rank digit, '1'-'8'.
    pub const fn rank_char(self) -> char {
        (b'8' - self.y) as char
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Coord {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        Ok(Coord {
            x: file - b'a',
            y: b'8' - rank,
        })
    }
}

/// A move from one square to another. Renders as the four-character token
/// used at the crate boundary, e.g. "e2e4".
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// The geometric inverse: the same two squares with the halves swapped.
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(ChessError::InvalidMove(s.to_string()));
        }
        let from = s[0..2]
            .parse()
            .map_err(|_| ChessError::InvalidMove(s.to_string()))?;
        let to = s[2..4]
            .parse()
            .map_err(|_| ChessError::InvalidMove(s.to_string()))?;
        Ok(Move::new(from, to))
    }
}
