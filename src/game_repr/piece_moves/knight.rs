use super::super::{MoveList, Piece, Position, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-1, -2),
    (-2, 1),
    (-1, 2),
    (2, -1),
    (1, -2),
    (2, 1),
    (1, 2),
];

impl Position {
    /// Generate knight moves into a provided buffer
    pub fn knight_moves_into(&self, idx: Square, piece: Piece, moves: &mut MoveList) {
        self.step_into(idx, piece, &KNIGHT_OFFSETS, moves);
    }
}
