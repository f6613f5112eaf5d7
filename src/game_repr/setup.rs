//! Builder for constructed positions (puzzles, endgames, tests).
//!
//! ```rust
//! use chess_tracker::game_repr::{CastleRights, Color, Piece, Setup, Square, Type};
//!
//! let pos = Setup::empty()
//!     .piece(Square::at(7, 4), Piece::new(Color::White, Type::King))
//!     .piece(Square::at(0, 4), Piece::new(Color::Black, Type::King))
//!     .castle_rights(CastleRights::none())
//!     .build()
//!     .unwrap();
//! assert_eq!(pos.turn(), Color::White);
//! ```

use super::*;

#[derive(Debug, Clone)]
pub struct Setup {
    board: Grid,
    turn: Color,
    castle_rights: CastleRights,
    en_passant: Option<Square>,
    config: RulesConfig,
}

impl Default for Setup {
    fn default() -> Self {
        Self::empty()
    }
}

impl Setup {
    /// Empty board, white to move, no castling rights.
    pub fn empty() -> Self {
        Self {
            board: [[None; 8]; 8],
            turn: Color::White,
            castle_rights: CastleRights::none(),
            en_passant: None,
            config: RulesConfig::default(),
        }
    }

    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.board[square.row()][square.col()] = Some(piece);
        self
    }

    /// Places pieces from `(square, diagram letter)` pairs such as `("e1", 'K')`.
    pub fn pieces(mut self, placements: &[(&str, char)]) -> Result<Self, PositionError> {
        for &(notation, letter) in placements {
            let square = Square::from_notation(notation)?;
            let piece = Piece::from_char(letter)
                .ok_or_else(|| PositionError::setup(format!("unknown piece letter {letter:?}")))?;
            self = self.piece(square, piece);
        }
        Ok(self)
    }

    pub fn turn(mut self, turn: Color) -> Self {
        self.turn = turn;
        self
    }

    pub fn castle_rights(mut self, rights: CastleRights) -> Self {
        self.castle_rights = rights;
        self
    }

    pub fn en_passant(mut self, square: Square) -> Self {
        self.en_passant = Some(square);
        self
    }

    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Position, PositionError> {
        let white_king = self.find_king(Color::White)?;
        let black_king = self.find_king(Color::Black)?;

        for square in Square::all() {
            let Some(piece) = self.board[square.row()][square.col()] else {
                continue;
            };
            if piece.piece_type == Type::Pawn && (square.row() == 0 || square.row() == 7) {
                return Err(PositionError::setup(format!("pawn on back rank at {square}")));
            }
        }

        if let Some(target) = self.en_passant {
            self.check_en_passant(target)?;
        }

        let position = Position::from_parts(
            self.board,
            self.turn,
            (white_king, black_king),
            self.castle_rights,
            self.en_passant,
            self.config,
        );

        // The side that just moved can never be left in check.
        let waiting = self.turn.opposite();
        if position.attacked_by(position.king_square(waiting), self.turn) {
            return Err(PositionError::setup(format!(
                "{waiting} king is in check with {} to move",
                self.turn
            )));
        }
        Ok(position)
    }

    fn find_king(&self, color: Color) -> Result<Square, PositionError> {
        let mut kings = Square::all().filter(|sq| {
            self.board[sq.row()][sq.col()].is_some_and(|p| p.is_a(color, Type::King))
        });
        match (kings.next(), kings.next()) {
            (Some(square), None) => Ok(square),
            (None, _) => Err(PositionError::setup(format!("no {color} king"))),
            (Some(_), Some(_)) => Err(PositionError::setup(format!("more than one {color} king"))),
        }
    }

    /// The target must sit behind a pawn that just advanced two squares.
    fn check_en_passant(&self, target: Square) -> Result<(), PositionError> {
        let pusher = self.turn.opposite();
        let expected_row = (pusher.pawn_start_row() as isize + pusher.pawn_direction()) as usize;
        let pawn_sq = target.offset(pusher.pawn_direction(), 0);
        let pawn_there = pawn_sq
            .and_then(|sq| self.board[sq.row()][sq.col()])
            .is_some_and(|p| p.is_a(pusher, Type::Pawn));

        if target.row() != expected_row
            || self.board[target.row()][target.col()].is_some()
            || !pawn_there
        {
            return Err(PositionError::setup(format!(
                "{target} is not a valid en passant target"
            )));
        }
        Ok(())
    }
}
