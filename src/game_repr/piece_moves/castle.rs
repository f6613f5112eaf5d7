use super::super::{CastleSide, Move, MoveList, MoveType, Position, Square, Type};

impl Position {
    /// Adds the castling moves available to the side to move.
    ///
    /// Requires the right, an empty path between king and rook, both pieces on
    /// their home squares, and no attack on the king's square, the square it
    /// crosses or the square it lands on.
    pub fn castle_moves_into(&self, moves: &mut MoveList) {
        let color = self.turn();
        let king_sq = self.king_square(color);
        let home_row = color.home_row() as u8;

        if king_sq != Square::at(home_row, 4) || !self.castle_rights().any(color) {
            return;
        }
        if self.attacked_by(king_sq, color.opposite()) {
            return;
        }

        for side in [CastleSide::King, CastleSide::Queen] {
            if !self.castle_rights().has(color, side) {
                continue;
            }

            let rook_sq = Square::at(home_row, side.rook_col() as u8);
            let rook_home = self
                .piece_at(rook_sq)
                .is_some_and(|p| p.is_a(color, Type::Rook));
            if !rook_home {
                continue;
            }

            let (low, high) = if rook_sq.col() < king_sq.col() {
                (rook_sq.col() + 1, king_sq.col())
            } else {
                (king_sq.col() + 1, rook_sq.col())
            };
            let path_clear = (low..high).all(|col| self.is_empty(Square::at(home_row, col as u8)));
            if !path_clear {
                continue;
            }

            let (Some(crossed), Some(landing)) = (
                king_sq.offset(0, side.direction()),
                king_sq.offset(0, 2 * side.direction()),
            ) else {
                continue;
            };
            if self.attacked_by(crossed, color.opposite())
                || self.attacked_by(landing, color.opposite())
            {
                continue;
            }

            if let Some(king) = self.piece_at(king_sq) {
                moves.push(Move::new(king_sq, landing, king, None, MoveType::Castling));
            }
        }
    }
}
