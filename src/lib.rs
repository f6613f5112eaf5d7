//! Chess position tracking and legal move generation.
//!
//! A [`Position`](game_repr::Position) owns the board, side to move, king
//! locations, en passant target, castling rights and the undo stack. Callers
//! list legal moves, apply one, undo, and read the terminal flags:
//!
//! ```rust
//! use chess_tracker::{apply, is_checkmate, legal_moves, new_game, undo};
//!
//! let mut pos = new_game();
//! let moves = legal_moves(&mut pos);
//! assert_eq!(moves.len(), 20);
//!
//! apply(&mut pos, moves[0]).unwrap();
//! undo(&mut pos).unwrap();
//! assert!(!is_checkmate(&pos));
//! ```

pub mod game_repr;

pub use game_repr::{
    CastleRights, Color, GameStatus, Move, MoveList, Piece, Position, PositionError,
    RulesConfig, Setup, Square, Type,
};

/// Standard starting position, white to move.
pub fn new_game() -> Position {
    Position::new()
}

pub fn legal_moves(position: &mut Position) -> MoveList {
    position.legal_moves()
}

pub fn apply(position: &mut Position, mv: Move) -> Result<(), PositionError> {
    position.apply(mv)
}

pub fn undo(position: &mut Position) -> Result<Move, PositionError> {
    position.undo()
}

pub fn to_notation(mv: &Move) -> String {
    mv.to_notation()
}

pub fn is_checkmate(position: &Position) -> bool {
    position.is_checkmate()
}

pub fn is_stalemate(position: &Position) -> bool {
    position.is_stalemate()
}
