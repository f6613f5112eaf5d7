use super::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

// ==================== UNDO TESTS ====================

#[test]
fn test_undo_empty_history() {
    let mut pos = Position::default();

    let err = pos.undo().unwrap_err();

    assert_eq!(err, PositionError::EmptyHistory);
    assert_eq!(err.kind(), "empty_history");
    assert_eq!(Snapshot::of(&pos), Snapshot::of(&Position::default()));
}

#[test]
fn test_every_opening_move_reverses() {
    let mut pos = Position::default();
    let before = Snapshot::of(&pos);

    for mv in pos.legal_moves() {
        pos.apply(mv).unwrap();
        assert_eq!(pos.ply(), 1);
        assert_eq!(pos.turn(), Color::Black);

        let undone = pos.undo().unwrap();
        assert_eq!(undone, mv);
        assert_eq!(Snapshot::of(&pos), before, "{mv} did not reverse cleanly");
    }
}

#[test]
fn test_turn_alternates() {
    let mut pos = Position::default();

    play(&mut pos, &["e2e4"]);
    assert_eq!(pos.turn(), Color::Black);
    play(&mut pos, &["e7e5"]);
    assert_eq!(pos.turn(), Color::White);

    pos.undo().unwrap();
    assert_eq!(pos.turn(), Color::Black);
    pos.undo().unwrap();
    assert_eq!(pos.turn(), Color::White);
}

#[test]
fn test_illegal_apply_rejected() {
    let mut pos = Position::default();
    let before = Snapshot::of(&pos);
    let pawn = Piece::new(Color::White, Type::Pawn);
    let leap = Move::new(sq("e2"), sq("e5"), pawn, None, MoveType::Normal);

    let err = pos.apply(leap).unwrap_err();

    assert_eq!(
        err,
        PositionError::IllegalMove {
            notation: "e2e5".to_string()
        }
    );
    assert_eq!(Snapshot::of(&pos), before);
}

#[test]
fn test_apply_rejects_self_check() {
    // the e-file bishop is pinned against the king
    let mut pos = position(&[("e1", 'K'), ("e2", 'B'), ("e8", 'r'), ("a8", 'k')]);
    let bishop = Piece::new(Color::White, Type::Bishop);
    let unpin = Move::new(sq("e2"), sq("d3"), bishop, None, MoveType::Normal);

    assert!(pos.apply(unpin).is_err());
    assert_eq!(pos.ply(), 0);
}

#[test]
fn test_apply_uses_generated_move() {
    let mut pos = Position::default();
    let pawn = Piece::new(Color::White, Type::Pawn);
    // same squares, but stated as if it captured something
    let stated = Move::new(sq("e2"), sq("e4"), pawn, Some(Piece::new(Color::Black, Type::Knight)), MoveType::Normal);

    pos.apply(stated).unwrap();

    assert_eq!(pos.last_move().unwrap().piece_captured(), None);
    pos.undo().unwrap();
    assert_eq!(Snapshot::of(&pos), Snapshot::of(&Position::default()));
}

#[test]
fn test_unchecked_apply() {
    let mut pos = Position::with_config(RulesConfig::default().unchecked());

    let mv = pos.find_move("g1f3").unwrap();
    pos.apply(mv).unwrap();

    assert_eq!(pos.piece_at(sq("f3")), Some(Piece::new(Color::White, Type::Knight)));
    assert_eq!(pos.undo().unwrap(), mv);
    assert_eq!(pos.piece_at(sq("g1")), Some(Piece::new(Color::White, Type::Knight)));
}

#[test]
fn test_undo_restores_capture() {
    let mut pos = Position::default();
    play(&mut pos, &["e2e4", "d7d5", "e4d5"]);

    let undone = pos.undo().unwrap();

    assert_eq!(undone.piece_captured(), Some(Piece::new(Color::Black, Type::Pawn)));
    assert_eq!(pos.piece_at(sq("d5")), Some(Piece::new(Color::Black, Type::Pawn)));
    assert_eq!(pos.piece_at(sq("e4")), Some(Piece::new(Color::White, Type::Pawn)));
    assert_eq!(pos.en_passant_target(), Some(sq("d6")));
}

#[test]
fn test_unwind_whole_game() {
    let mut pos = Position::default();
    let line = [
        "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1", "f8c5", "d2d4", "e5d4", "e4e5", "d7d5",
        "e5d6", "c5b6", "d6c7", "d8e7",
    ];
    play(&mut pos, &line);
    assert_eq!(pos.ply(), line.len());
    let history: Vec<String> = pos.move_history().map(|mv| mv.to_notation()).collect();
    assert_eq!(history, line);
    assert_eq!(pos.last_move().map(|mv| mv.to_notation()), Some("d8e7".to_string()));

    let mut taken_back = Vec::new();
    while let Ok(mv) = pos.undo() {
        taken_back.push(mv.to_notation());
    }
    taken_back.reverse();

    assert_eq!(taken_back, line);
    assert_eq!(pos.move_history().count(), 0);
    assert_eq!(Snapshot::of(&pos), Snapshot::of(&Position::default()));
    assert_eq!(pos.castle_rights_history(), &[CastleRights::all()]);
}

/// Random playouts: every legal move must leave the mover's king safe and
/// must be undone exactly.
#[test]
fn test_random_playouts_undo_exactly() {
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pos = Position::default();

        for _ in 0..60 {
            let moves = pos.legal_moves();
            let Some(&chosen) = moves.choose(&mut rng) else {
                break;
            };

            let before = Snapshot::of(&pos);
            let mover = pos.turn();
            for &mv in &moves {
                pos.make_move(mv);
                assert!(
                    !pos.attacked_by(pos.king_square(mover), mover.opposite()),
                    "seed {seed}: {mv} leaves the king in check\n{pos}"
                );
                pos.unmake_move();
                assert_eq!(Snapshot::of(&pos), before, "seed {seed}: {mv} did not reverse");
            }

            pos.apply(chosen).unwrap();
        }
    }
}
