//! Rule switches for a [`Position`](super::Position).
//!
//! The defaults give standard chess. The alternatives exist to reproduce
//! older behavior when comparing against recorded games.

/// How a rook leaving its home square affects castling rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RookRightsRule {
    /// The a-file rook clears the queenside right, the h-file rook the kingside right.
    #[default]
    Symmetric,
    /// Either home rook clears only its color's queenside right.
    /// Kingside rights then survive a kingside rook move.
    QueensideOnly,
}

/// Rule configuration carried by every position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    /// Castling-rights bookkeeping for rook moves.
    pub rook_rights: RookRightsRule,
    /// Reject moves passed to `apply` that are not in the current legal list.
    pub verify_applied_moves: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl RulesConfig {
    /// Standard chess with checked `apply`.
    pub fn standard() -> Self {
        Self {
            rook_rights: RookRightsRule::Symmetric,
            verify_applied_moves: true,
        }
    }

    /// Reproduces the queenside-only rook bookkeeping.
    pub fn legacy_rook_rights() -> Self {
        Self {
            rook_rights: RookRightsRule::QueensideOnly,
            ..Self::standard()
        }
    }

    /// Skip legality verification in `apply`. Callers must only pass moves
    /// drawn from the latest `legal_moves` result.
    pub fn unchecked(self) -> Self {
        Self {
            verify_applied_moves: false,
            ..self
        }
    }
}
