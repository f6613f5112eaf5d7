use super::super::{MoveList, Piece, Position, Square};
use super::ADJACENT;

impl Position {
    /// Generate ordinary king steps. Castling lives in `castle.rs` and
    /// nothing here checks whether the destination is attacked.
    pub fn king_moves_into(&self, idx: Square, piece: Piece, moves: &mut MoveList) {
        self.step_into(idx, piece, &ADJACENT, moves);
    }
}
