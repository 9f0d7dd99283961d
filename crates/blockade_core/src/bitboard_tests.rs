use super::*;
use crate::types::cell;

#[test]
fn test_from_cell() {
    assert_eq!(Bitboard::from_cell(0).0, 1);
    assert_eq!(Bitboard::from_cell(8).0, 256); // (8,0)
    assert_eq!(Bitboard::from_cell(80).0, 1 << 80); // (8,8)
}

#[test]
fn test_popcount() {
    assert_eq!(Bitboard::EMPTY.popcount(), 0);
    assert_eq!(Bitboard::from_cell(0).popcount(), 1);
    assert_eq!(Bitboard::FILE_A.popcount(), 9);
    assert_eq!(Bitboard::FILE_I.popcount(), 9);
    assert_eq!(Bitboard::ALL.popcount(), 81);
}

#[test]
fn test_iterator() {
    let bb = Bitboard(0b1010);
    let cells: Vec<u8> = bb.collect();
    assert_eq!(cells, vec![1, 3]);
}

#[test]
fn test_not_stays_on_board() {
    assert_eq!(!Bitboard::EMPTY, Bitboard::ALL);
    assert_eq!(!Bitboard::ALL, Bitboard::EMPTY);
}

#[test]
fn test_shifts() {
    let origin = Bitboard::from_cell(0);
    assert_eq!(origin.north(), Bitboard::from_cell(9));
    assert_eq!(origin.east(), Bitboard::from_cell(1));
    assert_eq!(origin.west(), Bitboard::EMPTY); // Wraps off board
    assert_eq!(origin.south(), Bitboard::EMPTY);

    let right_edge = Bitboard::from_cell(8);
    assert_eq!(right_edge.east(), Bitboard::EMPTY); // Wraps off board
    assert_eq!(right_edge.west(), Bitboard::from_cell(7));

    let top = Bitboard::from_cell(80);
    assert_eq!(top.north(), Bitboard::EMPTY);
    assert_eq!(top.north_east(), Bitboard::EMPTY);
}

#[test]
fn test_king_spread() {
    let centre = Bitboard::from_cell(cell(4, 4).unwrap());
    assert_eq!(centre.king_spread().popcount(), 8);

    let corner = Bitboard::from_cell(cell(0, 0).unwrap());
    let spread: Vec<u8> = corner.king_spread().collect();
    assert_eq!(
        spread,
        vec![cell(1, 0).unwrap(), cell(0, 1).unwrap(), cell(1, 1).unwrap()]
    );

    let edge = Bitboard::from_cell(cell(8, 4).unwrap());
    assert_eq!(edge.king_spread().popcount(), 5);
}
