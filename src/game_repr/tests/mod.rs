use super::*;

// ==================== HELPER FUNCTIONS ====================

pub fn sq(notation: &str) -> Square {
    Square::from_notation(notation).unwrap()
}

/// White to move, no castling rights.
pub fn position(placements: &[(&str, char)]) -> Position {
    build(placements, Color::White, CastleRights::none())
}

pub fn build(placements: &[(&str, char)], turn: Color, rights: CastleRights) -> Position {
    Setup::empty()
        .pieces(placements)
        .unwrap()
        .turn(turn)
        .castle_rights(rights)
        .build()
        .unwrap()
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], notation: &str) -> bool {
    moves.iter().any(|m| m.to_notation() == notation)
}

/// Moves starting on the given square, as notation strings
pub fn moves_from(moves: &[Move], from: &str) -> Vec<String> {
    let from = sq(from);
    moves
        .iter()
        .filter(|m| m.start() == from)
        .map(|m| m.to_notation())
        .collect()
}

pub fn count_move_type(moves: &[Move], move_type: MoveType) -> usize {
    moves.iter().filter(|m| m.move_type() == move_type).count()
}

/// Plays a line given in "e2e4" notation, failing loudly on the first bad move
pub fn play(pos: &mut Position, line: &[&str]) {
    for notation in line {
        let mv = pos
            .find_move(notation)
            .unwrap_or_else(|err| panic!("{notation}: {err}\n{pos}"));
        pos.apply(mv).unwrap();
    }
}

/// Everything `undo` must restore.
#[derive(Debug, PartialEq)]
pub struct Snapshot {
    board: Grid,
    turn: Color,
    kings: (Square, Square),
    rights: CastleRights,
    en_passant: Option<Square>,
    ply: usize,
    rights_log_len: usize,
}

impl Snapshot {
    pub fn of(pos: &Position) -> Self {
        Self {
            board: *pos.board(),
            turn: pos.turn(),
            kings: (pos.king_square(Color::White), pos.king_square(Color::Black)),
            rights: pos.castle_rights(),
            en_passant: pos.en_passant_target(),
            ply: pos.ply(),
            rights_log_len: pos.castle_rights_history().len(),
        }
    }
}

// ==================== TEST MODULES ====================

mod notation;
mod stalemate;
mod undo;
