use super::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward the h-file rook.
    King,
    /// Toward the a-file rook.
    Queen,
}

impl CastleSide {
    /// Home column of the rook on this side.
    pub fn rook_col(&self) -> usize {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }

    /// Column step the king takes toward the rook.
    pub fn direction(&self) -> isize {
        match self {
            CastleSide::King => 1,
            CastleSide::Queen => -1,
        }
    }
}

/// Castling eligibility, snapshotted once per ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    pub wks: bool,
    pub bks: bool,
    pub wqs: bool,
    pub bqs: bool,
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastleRights {
    pub const fn new(wks: bool, bks: bool, wqs: bool, bqs: bool) -> Self {
        Self { wks, bks, wqs, bqs }
    }

    pub const fn all() -> Self {
        Self::new(true, true, true, true)
    }

    pub const fn none() -> Self {
        Self::new(false, false, false, false)
    }

    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::King) => self.wks,
            (Color::White, CastleSide::Queen) => self.wqs,
            (Color::Black, CastleSide::King) => self.bks,
            (Color::Black, CastleSide::Queen) => self.bqs,
        }
    }

    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::White, CastleSide::King) => self.wks = false,
            (Color::White, CastleSide::Queen) => self.wqs = false,
            (Color::Black, CastleSide::King) => self.bks = false,
            (Color::Black, CastleSide::Queen) => self.bqs = false,
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastleSide::King);
        self.revoke(color, CastleSide::Queen);
    }

    pub fn any(&self, color: Color) -> bool {
        self.has(color, CastleSide::King) || self.has(color, CastleSide::Queen)
    }
}
