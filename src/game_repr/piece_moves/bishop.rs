use super::super::{MoveList, Piece, Position, Square};
use super::DIAGONAL;

impl Position {
    /// Generate bishop moves into a provided buffer
    pub fn bishop_moves_into(&self, idx: Square, piece: Piece, moves: &mut MoveList) {
        self.slide_into(idx, piece, &DIAGONAL, moves);
    }
}
