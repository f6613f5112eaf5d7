use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use super::{Color, Piece, PositionError, Square, Type};

/// Move buffer used by the generators. Spills to the heap past 64 entries.
pub type MoveList = SmallVec<[Move; 64]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveType {
    Normal,
    EnPassant,
    /// Auto-promotes to a queen.
    Promotion,
    Castling,
}

/// One ply. Carries everything `Position::undo` needs to reverse it.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
    move_type: MoveType,
}

impl Move {
    /// Builds a move from the board contents before it is played.
    ///
    /// `captured` is the occupant of `end`, except for en passant where it is
    /// the opposing pawn standing beside the mover.
    pub(crate) fn new(
        start: Square,
        end: Square,
        piece_moved: Piece,
        captured: Option<Piece>,
        move_type: MoveType,
    ) -> Move {
        debug_assert!(start != end, "move {start}{end} does not go anywhere");
        let move_type = match move_type {
            MoveType::Normal if Self::reaches_last_rank(piece_moved, end) => MoveType::Promotion,
            other => other,
        };
        Move {
            start,
            end,
            piece_moved,
            piece_captured: captured,
            move_type,
        }
    }

    fn reaches_last_rank(piece: Piece, end: Square) -> bool {
        piece.piece_type == Type::Pawn && end.row() == piece.color.opposite().home_row()
    }

    pub fn start(&self) -> Square {
        self.start
    }

    pub fn end(&self) -> Square {
        self.end
    }

    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    pub fn move_type(&self) -> MoveType {
        self.move_type
    }

    pub fn color(&self) -> Color {
        self.piece_moved.color
    }

    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    pub fn is_pawn_promotion(&self) -> bool {
        self.move_type == MoveType::Promotion
    }

    pub fn is_enpassant(&self) -> bool {
        self.move_type == MoveType::EnPassant
    }

    pub fn is_castle_move(&self) -> bool {
        self.move_type == MoveType::Castling
    }

    /// Square of the pawn removed by an en passant capture.
    pub fn enpassant_victim(&self) -> Option<Square> {
        if !self.is_enpassant() {
            return None;
        }
        Square::new(self.start.row(), self.end.col())
    }

    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.piece_type == Type::Pawn && self.start.row().abs_diff(self.end.row()) == 2
    }

    /// Identity used for equality: `start_row start_col end_row end_col` as decimal digits.
    pub fn id(&self) -> u16 {
        (self.start.row() * 1000 + self.start.col() * 100 + self.end.row() * 10 + self.end.col())
            as u16
    }

    pub fn to_notation(&self) -> String {
        format!("{}{}", self.start, self.end)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}

/// Splits `"e2e4"` into its start and end squares.
pub fn parse_notation(notation: &str) -> Result<(Square, Square), PositionError> {
    if notation.len() != 4 || !notation.is_ascii() {
        return Err(PositionError::InvalidNotation {
            notation: notation.to_string(),
        });
    }
    let start = Square::from_notation(&notation[..2])?;
    let end = Square::from_notation(&notation[2..])?;
    Ok((start, end))
}
