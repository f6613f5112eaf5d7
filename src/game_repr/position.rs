use std::fmt;

use log::{debug, info, trace};

use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME STATE, MAKE/UNMAKE AND LEGALITY
 */

pub type Grid = [[Option<Piece>; 8]; 8];

const BACK_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

#[derive(Clone, Debug)]
pub struct Position {
    board: Grid,
    turn: Color,
    white_king: Square,
    black_king: Square,
    /// Square a pawn may capture into en passant this ply only
    en_passant: Option<Square>,
    castle_rights: CastleRights,
    /// One entry per applied ply plus the initial rights
    castle_rights_log: Vec<CastleRights>,
    move_log: Vec<UndoInfo>,
    check_mate: bool,
    stale_mate: bool,
    /// Result of the last `legal_moves` call, dropped on any mutation
    legal_cache: Option<MoveList>,
    config: RulesConfig,
}

/// Diff record pushed for every applied move.
#[derive(Clone, Copy, Debug)]
pub struct UndoInfo {
    mv: Move,
    en_passant: Option<Square>,
}

impl Default for Position {
    fn default() -> Self {
        Self::with_config(RulesConfig::default())
    }
}

impl Position {
    /// Standard starting array, white to move, all castling rights held.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RulesConfig) -> Self {
        let mut board: Grid = [[None; 8]; 8];
        for (col, &piece_type) in BACK_RANK.iter().enumerate() {
            board[0][col] = Some(Piece::new(Color::Black, piece_type));
            board[1][col] = Some(Piece::new(Color::Black, Type::Pawn));
            board[6][col] = Some(Piece::new(Color::White, Type::Pawn));
            board[7][col] = Some(Piece::new(Color::White, piece_type));
        }

        Self {
            board,
            turn: Color::White,
            white_king: Square::at(7, 4),
            black_king: Square::at(0, 4),
            en_passant: None,
            castle_rights: CastleRights::all(),
            castle_rights_log: vec![CastleRights::all()],
            move_log: Vec::new(),
            check_mate: false,
            stale_mate: false,
            legal_cache: None,
            config,
        }
    }

    /// Assembles a position from validated parts. Kings must already be located.
    pub(crate) fn from_parts(
        board: Grid,
        turn: Color,
        kings: (Square, Square),
        castle_rights: CastleRights,
        en_passant: Option<Square>,
        config: RulesConfig,
    ) -> Self {
        Self {
            board,
            turn,
            white_king: kings.0,
            black_king: kings.1,
            en_passant,
            castle_rights,
            castle_rights_log: vec![castle_rights],
            move_log: Vec::new(),
            check_mate: false,
            stale_mate: false,
            legal_cache: None,
            config,
        }
    }

    // ===========================
    // State access
    // ===========================

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row()][square.col()]
    }

    pub(crate) fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row()][square.col()] = piece;
    }

    pub fn board(&self) -> &Grid {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    fn king_square_mut(&mut self, color: Color) -> &mut Square {
        match color {
            Color::White => &mut self.white_king,
            Color::Black => &mut self.black_king,
        }
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    pub fn castle_rights_history(&self) -> &[CastleRights] {
        &self.castle_rights_log
    }

    pub fn move_history(&self) -> impl Iterator<Item = Move> + '_ {
        self.move_log.iter().map(|undo| undo.mv)
    }

    pub fn last_move(&self) -> Option<Move> {
        self.move_log.last().map(|undo| undo.mv)
    }

    pub fn ply(&self) -> usize {
        self.move_log.len()
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Valid only right after `legal_moves` with no mutation in between.
    pub fn is_checkmate(&self) -> bool {
        self.check_mate
    }

    /// Valid only right after `legal_moves` with no mutation in between.
    pub fn is_stalemate(&self) -> bool {
        self.stale_mate
    }

    pub fn status(&self) -> GameStatus {
        if self.check_mate {
            GameStatus::Checkmate {
                winner: self.turn.opposite(),
            }
        } else if self.stale_mate {
            GameStatus::Stalemate
        } else {
            GameStatus::InProgress
        }
    }

    // ===========================
    // Make / unmake
    // ===========================

    /// Plays a move produced by this position's generator.
    ///
    /// With `verify_applied_moves` on (the default) the move is matched
    /// against the current legal list and the generated copy is played, so
    /// only its start and end squares matter.
    pub fn apply(&mut self, mv: Move) -> Result<(), PositionError> {
        let mv = if self.config.verify_applied_moves {
            if self.legal_cache.is_none() {
                self.legal_moves();
            }
            self.legal_cache
                .as_ref()
                .and_then(|legal| legal.iter().find(|&&m| m == mv).copied())
                .ok_or_else(|| PositionError::IllegalMove {
                    notation: mv.to_notation(),
                })?
        } else {
            mv
        };

        debug!("{} plays {}", mv.color(), mv);
        self.make_move(mv);
        Ok(())
    }

    /// Reverts the most recent move and returns it.
    pub fn undo(&mut self) -> Result<Move, PositionError> {
        let mv = self.unmake_move().ok_or(PositionError::EmptyHistory)?;
        debug!("{} takes back {}", mv.color(), mv);
        Ok(mv)
    }

    pub(crate) fn make_move(&mut self, mv: Move) {
        let start = mv.start();
        let end = mv.end();
        let piece = mv.piece_moved();

        self.set(start, None);
        self.set(end, Some(piece));
        self.move_log.push(UndoInfo {
            mv,
            en_passant: self.en_passant,
        });
        self.turn = self.turn.opposite();

        if piece.piece_type == Type::King {
            *self.king_square_mut(piece.color) = end;
        }

        if mv.is_pawn_promotion() {
            self.set(end, Some(Piece::new(piece.color, Type::Queen)));
        }

        if let Some(victim) = mv.enpassant_victim() {
            self.set(victim, None);
        }

        self.en_passant = if mv.is_double_pawn_push() {
            Square::new((start.row() + end.row()) / 2, start.col())
        } else {
            None
        };

        if mv.is_castle_move() {
            let (rook_from, rook_to) = castle_rook_squares(mv);
            let rook = self.piece_at(rook_from);
            self.set(rook_from, None);
            self.set(rook_to, rook);
        }

        self.update_castle_rights(mv);
        self.castle_rights_log.push(self.castle_rights);
        self.legal_cache = None;
    }

    pub(crate) fn unmake_move(&mut self) -> Option<Move> {
        let UndoInfo { mv, en_passant } = self.move_log.pop()?;
        let piece = mv.piece_moved();

        self.set(mv.start(), Some(piece));
        match mv.enpassant_victim() {
            Some(victim) => {
                self.set(mv.end(), None);
                self.set(victim, mv.piece_captured());
            }
            None => self.set(mv.end(), mv.piece_captured()),
        }
        self.turn = self.turn.opposite();

        if piece.piece_type == Type::King {
            *self.king_square_mut(piece.color) = mv.start();
        }

        self.castle_rights_log.pop();
        if let Some(&rights) = self.castle_rights_log.last() {
            self.castle_rights = rights;
        }

        if mv.is_castle_move() {
            let (rook_from, rook_to) = castle_rook_squares(mv);
            let rook = self.piece_at(rook_to);
            self.set(rook_to, None);
            self.set(rook_from, rook);
        }

        self.en_passant = en_passant;
        self.check_mate = false;
        self.stale_mate = false;
        self.legal_cache = None;
        Some(mv)
    }

    fn update_castle_rights(&mut self, mv: Move) {
        let piece = mv.piece_moved();
        let start = mv.start();

        match piece.piece_type {
            Type::King => self.castle_rights.revoke_all(piece.color),
            Type::Rook if start.row() == piece.color.home_row() => {
                match (start.col(), self.config.rook_rights) {
                    (0, _) => self.castle_rights.revoke(piece.color, CastleSide::Queen),
                    (7, RookRightsRule::Symmetric) => {
                        self.castle_rights.revoke(piece.color, CastleSide::King)
                    }
                    (7, RookRightsRule::QueensideOnly) => {
                        self.castle_rights.revoke(piece.color, CastleSide::Queen)
                    }
                    _ => {}
                }
            }
            _ => {}
        }

        // A rook taken on its home square takes the right with it.
        if let Some(captured) = mv.piece_captured() {
            let end = mv.end();
            if captured.piece_type == Type::Rook && end.row() == captured.color.home_row() {
                match end.col() {
                    0 => self.castle_rights.revoke(captured.color, CastleSide::Queen),
                    7 => self.castle_rights.revoke(captured.color, CastleSide::King),
                    _ => {}
                }
            }
        }
    }

    // ===========================
    // Generation and legality
    // ===========================

    /// Pseudo-legal moves for the side to move, castling excluded.
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.pseudo_moves_into(self.turn, GenMode::Moves, &mut moves);
        moves
    }

    /// Scans the board row-major and dispatches on piece kind.
    pub(crate) fn pseudo_moves_into(&self, color: Color, mode: GenMode, moves: &mut MoveList) {
        for square in Square::all() {
            let piece = match self.piece_at(square) {
                Some(piece) if piece.is(color) => piece,
                _ => continue,
            };
            match piece.piece_type {
                Type::Pawn => self.pawn_moves_into(square, piece, mode, moves),
                Type::Knight => self.knight_moves_into(square, piece, moves),
                Type::Bishop => self.bishop_moves_into(square, piece, moves),
                Type::Rook => self.rook_moves_into(square, piece, moves),
                Type::Queen => self.queen_moves_into(square, piece, moves),
                Type::King => self.king_moves_into(square, piece, moves),
            }
        }
    }

    /// Every legal move for the side to move, in board scan order with
    /// castling last. Sets the checkmate or stalemate flag when empty.
    pub fn legal_moves(&mut self) -> MoveList {
        let saved_en_passant = self.en_passant;
        let saved_rights = self.castle_rights;
        let mover = self.turn;

        let mut moves = self.pseudo_legal_moves();
        self.castle_moves_into(&mut moves);
        let candidates = moves.len();

        moves.retain(|mv| self.keeps_king_safe(*mv, mover));

        self.en_passant = saved_en_passant;
        self.castle_rights = saved_rights;
        self.check_mate = false;
        self.stale_mate = false;

        if moves.is_empty() {
            if self.in_check() {
                self.check_mate = true;
                info!("{mover} is checkmated after {} plies", self.ply());
            } else {
                self.stale_mate = true;
                info!("{mover} is stalemated after {} plies", self.ply());
            }
        }

        trace!("{mover}: {} of {candidates} candidates legal", moves.len());
        self.legal_cache = Some(moves.clone());
        moves
    }

    fn keeps_king_safe(&mut self, mv: Move, mover: Color) -> bool {
        self.make_move(mv);
        let safe = !self.attacked_by(self.king_square(mover), mover.opposite());
        self.unmake_move();
        safe
    }

    /// Looks up a legal move by its `"e2e4"` notation.
    pub fn find_move(&mut self, notation: &str) -> Result<Move, PositionError> {
        let (start, end) = parse_notation(notation)?;
        let legal = match &self.legal_cache {
            Some(legal) => legal.clone(),
            None => self.legal_moves(),
        };
        legal
            .into_iter()
            .find(|mv| mv.start() == start && mv.end() == end)
            .ok_or_else(|| PositionError::NoSuchMove {
                notation: notation.to_string(),
            })
    }

    /// Whether the side to move's king is attacked.
    pub fn in_check(&self) -> bool {
        self.attacked_by(self.king_square(self.turn), self.turn.opposite())
    }

    /// Whether the opponent of the side to move attacks `square`.
    pub fn square_under_attack(&self, square: Square) -> bool {
        self.attacked_by(square, self.turn.opposite())
    }

    /// Runs the attacker's generator in attack mode and looks for `square`
    /// among the destinations. Castling is never generated here.
    pub fn attacked_by(&self, square: Square, attacker: Color) -> bool {
        let mut moves = MoveList::new();
        self.pseudo_moves_into(attacker, GenMode::Attacks, &mut moves);
        moves.iter().any(|mv| mv.end() == square)
    }

    // ===========================
    // Perft
    // ===========================

    /// Counts leaf nodes of the legal move tree. Leaves the position as it
    /// was, with terminal flags cleared.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move();
        }
        nodes
    }

    /// Perft split by first move.
    pub fn divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        let moves = self.legal_moves();
        let mut counts = Vec::with_capacity(moves.len());
        for mv in moves {
            self.make_move(mv);
            let count = self.perft(depth.saturating_sub(1));
            self.unmake_move();
            counts.push((mv, count));
        }
        counts
    }
}

/// (home, destination) of the rook in a castling move.
fn castle_rook_squares(mv: Move) -> (Square, Square) {
    let side = if mv.end().col() > mv.start().col() {
        CastleSide::King
    } else {
        CastleSide::Queen
    };
    let row = mv.start().row() as u8;
    let rook_to = mv.end().col() as isize - side.direction();
    (
        Square::at(row, side.rook_col() as u8),
        Square::at(row, rook_to as u8),
    )
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.board.iter().enumerate() {
            let line: String = cells
                .iter()
                .map(|cell| cell.map_or('.', |piece| piece.to_char()))
                .collect();
            writeln!(f, "{} {}", 8 - row, line)?;
        }
        write!(f, "  abcdefgh")
    }
}
