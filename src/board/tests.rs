use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
}

#[test]
fn test_stone_symbol() {
    assert_eq!(Stone::Black.symbol(), "●");
    assert_eq!(Stone::White.symbol(), "○");
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.row, 7);
    assert_eq!(pos.col, 7);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2.row, 7);
    assert_eq!(pos2.col, 7);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
    assert_eq!(Pos::checked(3, 4), Some(Pos::new(3, 4)));
    assert_eq!(Pos::checked(3, 15), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_notation_center() {
    assert_eq!(Pos::new(7, 7).to_notation(), "H8");
    assert_eq!(Pos::from_notation("H8"), Some(Pos::new(7, 7)));
    assert_eq!(Pos::new(0, 0).to_notation(), "A1");
    assert_eq!(Pos::new(14, 14).to_notation(), "O15");
    assert_eq!(Pos::new(9, 2).to_string(), "C10");
}

#[test]
fn test_notation_round_trip_all_cells() {
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        assert_eq!(Pos::from_notation(&pos.to_notation()), Some(pos));
    }
}

#[test]
fn test_notation_lowercase_column() {
    assert_eq!(Pos::from_notation("h8"), Some(Pos::new(7, 7)));
}

#[test]
fn test_notation_rejects_malformed() {
    for bad in ["", "H", "8", "P1", "Z9", "@3", "A0", "A16", "O99", "Hx", "H8a", "H 8", "H-1"] {
        assert_eq!(Pos::from_notation(bad), None, "{bad:?} should be rejected");
    }
}

#[test]
fn test_notation_error_kinds() {
    assert_eq!("".parse::<Pos>(), Err(NotationError::TooShort));
    assert_eq!("A".parse::<Pos>(), Err(NotationError::TooShort));
    assert_eq!("Q5".parse::<Pos>(), Err(NotationError::Column('Q')));
    assert_eq!(
        "Bx".parse::<Pos>(),
        Err(NotationError::RowNotNumeric("x".to_string()))
    );
    assert_eq!("C16".parse::<Pos>(), Err(NotationError::Row(16)));
    assert_eq!(NotationError::Row(0).to_string(), "row 0 is outside 1-15");
}

#[test]
fn test_pos_serde() {
    let json = serde_json::to_string(&Pos::new(7, 7)).unwrap();
    assert_eq!(json, r#"{"row":7,"col":7}"#);
    let back: Pos = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Pos::new(7, 7));
}
