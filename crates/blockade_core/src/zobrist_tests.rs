use super::*;

#[test]
fn test_zobrist_keys_unique() {
    // No collisions among the generated keys
    let mut seen = std::collections::HashSet::new();

    for cell in 0..CELL_COUNT {
        assert!(seen.insert(ZOBRIST.removed[cell]), "Duplicate removed key");
    }
    for player in 0..2 {
        for cell in 0..CELL_COUNT {
            assert!(seen.insert(ZOBRIST.pawns[player][cell]), "Duplicate pawn key");
        }
    }
}

#[test]
fn test_zobrist_pawn_keys_differ_per_player() {
    assert_ne!(ZOBRIST.pawn_key(0, 40), ZOBRIST.pawn_key(1, 40));
    assert_ne!(ZOBRIST.pawn_key(0, 40), ZOBRIST.removed_key(40));
}
