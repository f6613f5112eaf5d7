// Board coordinates: row 0 is black's back rank (rank 8), row 7 is white's
// back rank (rank 1). Column 0 is the a-file.

use std::fmt::{self, Display, Formatter};

use super::PositionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square from row and column (0..7). Returns `None` if out of range.
    pub fn new(row: usize, col: usize) -> Option<Square> {
        if row > 7 || col > 7 {
            None
        } else {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    /// Const constructor for fixed squares. Panics when out of range.
    pub const fn at(row: u8, col: u8) -> Square {
        assert!(row < 8 && col < 8, "square out of range");
        Square { row, col }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Step by a signed (row, column) delta. Returns `None` when it leaves the board.
    pub fn offset(&self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return None;
        }
        Some(Square {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn file_char(&self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(&self) -> char {
        (b'8' - self.row) as char
    }

    pub fn to_notation(&self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    /// Parse a two-character algebraic square such as `"e4"`.
    pub fn from_notation(s: &str) -> Result<Square, PositionError> {
        let invalid = || PositionError::InvalidNotation {
            notation: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }

        Ok(Square {
            row: b'8' - rank,
            col: file - b'a',
        })
    }

    /// All 64 squares in scan order: row-major, rows 0..7 then columns 0..7.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
