use super::super::{Move, MoveList, MoveType, Piece, Position, Square, Type};
use super::GenMode;

impl Position {
    pub fn pawn_moves_into(&self, idx: Square, piece: Piece, mode: GenMode, moves: &mut MoveList) {
        let color = piece.color;
        let dir = color.pawn_direction();

        // a pawn on its last rank has nowhere to go
        let Some(forward) = idx.offset(dir, 0) else {
            return;
        };

        if mode == GenMode::Moves && self.is_empty(forward) {
            moves.push(Move::new(idx, forward, piece, None, MoveType::Normal));

            if idx.row() == color.pawn_start_row() {
                if let Some(double) = idx.offset(2 * dir, 0) {
                    if self.is_empty(double) {
                        moves.push(Move::new(idx, double, piece, None, MoveType::Normal));
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = idx.offset(dir, dc) else {
                continue;
            };
            match self.piece_at(target) {
                Some(other) if other.color != color => {
                    moves.push(Move::new(idx, target, piece, Some(other), MoveType::Normal));
                }
                Some(_) => {}
                None if mode == GenMode::Attacks => {
                    moves.push(Move::new(idx, target, piece, None, MoveType::Normal));
                }
                None if self.en_passant_target() == Some(target) => {
                    let victim = Piece::new(color.opposite(), Type::Pawn);
                    moves.push(Move::new(idx, target, piece, Some(victim), MoveType::EnPassant));
                }
                None => {}
            }
        }
    }
}
