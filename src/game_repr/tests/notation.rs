use super::*;

// ==================== NOTATION TESTS ====================

#[test]
fn test_opening_notation_shape() {
    let mut pos = Position::default();

    for mv in pos.legal_moves() {
        let text = mv.to_notation();
        let bytes = text.as_bytes();
        assert_eq!(bytes.len(), 4, "{text}");
        assert!((b'a'..=b'h').contains(&bytes[0]) && (b'a'..=b'h').contains(&bytes[2]));
        assert!((b'1'..=b'8').contains(&bytes[1]) && (b'1'..=b'8').contains(&bytes[3]));

        assert_eq!(parse_notation(&text).unwrap(), (mv.start(), mv.end()));
        assert_eq!(format!("{mv}"), text);
    }
}

#[test]
fn test_move_id() {
    let mut pos = Position::default();
    let e2e4 = pos.find_move("e2e4").unwrap();

    assert_eq!(e2e4.id(), 6444);
    assert_eq!(e2e4.start(), Square::new(6, 4).unwrap());
    assert_eq!(e2e4.end(), Square::new(4, 4).unwrap());
}

#[test]
fn test_square_notation() {
    assert_eq!(sq("a8"), Square::new(0, 0).unwrap());
    assert_eq!(sq("h1"), Square::new(7, 7).unwrap());
    assert_eq!(Square::new(6, 4).unwrap().to_notation(), "e2");
}

#[test]
fn test_find_move_errors() {
    let mut pos = Position::default();

    assert_eq!(pos.find_move("e2").unwrap_err().kind(), "invalid_notation");
    assert_eq!(pos.find_move("i2i4").unwrap_err().kind(), "invalid_notation");
    assert_eq!(pos.find_move("e2e9").unwrap_err().kind(), "invalid_notation");
    assert_eq!(
        pos.find_move("e2e5").unwrap_err(),
        PositionError::NoSuchMove {
            notation: "e2e5".to_string()
        }
    );
}

#[test]
fn test_castle_notation_is_king_move() {
    let mut pos = build(&[("e1", 'K'), ("h1", 'R'), ("e8", 'k')], Color::White, CastleRights::all());

    let moves = pos.legal_moves();

    assert!(has_move(&moves, "e1g1"));
    let castle = moves.iter().find(|m| m.is_castle_move()).unwrap();
    assert_eq!(castle.to_notation(), "e1g1");
}

#[test]
fn test_position_display() {
    let pos = Position::default();
    let text = pos.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "8 rnbqkbnr");
    assert_eq!(lines[6], "2 PPPPPPPP");
    assert_eq!(lines[7], "1 RNBQKBNR");
    assert_eq!(lines[8], "  abcdefgh");
}
