use super::*;

// ==================== STALEMATE TESTS ====================

#[test]
fn test_basic_stalemate() {
    let mut pos = position(&[("a1", 'K'), ("c2", 'q'), ("h8", 'k')]);

    assert!(!pos.in_check(), "King should not be in check");
    assert!(pos.legal_moves().is_empty(), "Should have no legal moves");
    assert!(pos.is_stalemate(), "Should be stalemate");
    assert!(!pos.is_checkmate());
    assert_eq!(pos.status(), GameStatus::Stalemate);
    assert!(pos.status().is_over());
}

#[test]
fn test_queen_and_king_stalemate_black() {
    let mut pos = build(&[("h8", 'k'), ("g6", 'Q'), ("f7", 'K')], Color::Black, CastleRights::none());

    assert!(pos.legal_moves().is_empty());
    assert!(pos.is_stalemate());
    assert!(!pos.is_checkmate());
}

#[test]
fn test_not_stalemate_has_pawn_move() {
    let mut pos = position(&[("a1", 'K'), ("h4", 'P'), ("c2", 'q'), ("h8", 'k')]);

    let moves = pos.legal_moves();

    assert_eq!(moves_from(&moves, "h4"), vec!["h4h5"]);
    assert!(!pos.is_stalemate(), "Not stalemate - pawn can move");
}

#[test]
fn test_blocked_pawn_does_not_prevent_stalemate() {
    let mut pos = position(&[("a1", 'K'), ("h4", 'P'), ("h5", 'p'), ("c2", 'q'), ("h8", 'k')]);

    assert!(pos.legal_moves().is_empty());
    assert!(pos.is_stalemate());
}
