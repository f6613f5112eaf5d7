pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;
pub mod castle;

use super::{Move, MoveList, MoveType, Piece, Position, Square};

/// What a generator pass is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenMode {
    /// Ordinary pseudo-legal moves.
    Moves,
    /// Squares the pieces attack: pawns give both diagonals, occupied or not,
    /// and never push.
    Attacks,
}

pub const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
pub const DIAGONAL: [(isize, isize); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];
pub const ADJACENT: [(isize, isize); 8] = [
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
];

impl Position {
    /// Casts a ray per direction until the edge, a friendly piece (excluded)
    /// or an enemy piece (included, then the ray stops).
    pub(crate) fn slide_into(
        &self,
        from: Square,
        piece: Piece,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(target) = current.offset(dr, dc) {
                match self.piece_at(target) {
                    None => moves.push(Move::new(from, target, piece, None, MoveType::Normal)),
                    Some(other) if other.color != piece.color => {
                        moves.push(Move::new(from, target, piece, Some(other), MoveType::Normal));
                        break;
                    }
                    Some(_) => break,
                }
                current = target;
            }
        }
    }

    /// One step per offset onto any square not held by a friendly piece.
    pub(crate) fn step_into(
        &self,
        from: Square,
        piece: Piece,
        offsets: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, dc) in offsets {
            let Some(target) = from.offset(dr, dc) else {
                continue;
            };
            match self.piece_at(target) {
                Some(other) if other.color == piece.color => {}
                captured => moves.push(Move::new(from, target, piece, captured, MoveType::Normal)),
            }
        }
    }
}
