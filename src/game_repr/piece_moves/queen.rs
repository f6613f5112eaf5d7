use super::super::{MoveList, Piece, Position, Square};

impl Position {
    /// Generate queen moves into a provided buffer: diagonals first, then ranks and files
    pub fn queen_moves_into(&self, idx: Square, piece: Piece, moves: &mut MoveList) {
        self.bishop_moves_into(idx, piece, moves);
        self.rook_moves_into(idx, piece, moves);
    }
}
