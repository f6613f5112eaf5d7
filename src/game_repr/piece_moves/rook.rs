use super::super::{MoveList, Piece, Position, Square};
use super::ORTHOGONAL;

impl Position {
    /// Generate rook moves into a provided buffer
    pub fn rook_moves_into(&self, idx: Square, piece: Piece, moves: &mut MoveList) {
        self.slide_into(idx, piece, &ORTHOGONAL, moves);
    }
}
