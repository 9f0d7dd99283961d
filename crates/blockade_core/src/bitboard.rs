//! Bitboard representation for the 9×9 Blockade board.
//!
//! The 81 cells fit in the low bits of a `u128`. Bit `y * 9 + x` is the cell at
//! column `x`, row `y`; bits 81..128 are always zero.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::types::{BOARD_WIDTH, CELL_COUNT};

/// A set of cells on the Blockade board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u128);

const fn board_mask() -> u128 {
    (1u128 << CELL_COUNT) - 1
}

const fn file_mask(x: u8) -> u128 {
    let mut mask = 0u128;
    let mut y = 0u8;
    while y < BOARD_WIDTH as u8 {
        mask |= 1u128 << (y * BOARD_WIDTH as u8 + x);
        y += 1;
    }
    mask
}

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    /// Every cell of the board.
    pub const ALL: Bitboard = Bitboard(board_mask());

    pub const FILE_A: Bitboard = Bitboard(file_mask(0));
    pub const FILE_I: Bitboard = Bitboard(file_mask(8));

    // Masks used to stop horizontal shifts from wrapping between rows
    pub const NOT_FILE_A: Bitboard = Bitboard(board_mask() & !file_mask(0));
    pub const NOT_FILE_I: Bitboard = Bitboard(board_mask() & !file_mask(8));

    /// Create a bitboard with a single cell set.
    #[inline(always)]
    pub const fn from_cell(cell: u8) -> Self {
        Bitboard(1u128 << cell)
    }

    /// Check if the bitboard is empty.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if a specific cell is set.
    #[inline(always)]
    pub const fn contains(self, cell: u8) -> bool {
        (self.0 & (1u128 << cell)) != 0
    }

    /// Set a cell in the bitboard.
    #[inline(always)]
    pub fn set(&mut self, cell: u8) {
        self.0 |= 1u128 << cell;
    }

    /// Clear a cell in the bitboard.
    #[inline(always)]
    pub fn clear(&mut self, cell: u8) {
        self.0 &= !(1u128 << cell);
    }

    /// Count the number of set bits (population count).
    #[inline(always)]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Get the index of the least significant bit, or None if empty.
    #[inline(always)]
    pub const fn lsb(self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as u8)
        }
    }

    /// Get and remove the least significant bit. Returns the cell index.
    #[inline(always)]
    pub fn pop_lsb(&mut self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            let cell = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1; // Clear the LSB
            Some(cell)
        }
    }

    /// Shift toward higher rows.
    #[inline(always)]
    pub const fn north(self) -> Bitboard {
        Bitboard((self.0 << 9) & board_mask())
    }

    /// Shift toward row 0.
    #[inline(always)]
    pub const fn south(self) -> Bitboard {
        Bitboard(self.0 >> 9)
    }

    /// Shift toward higher columns, masking out wrapping.
    #[inline(always)]
    pub const fn east(self) -> Bitboard {
        Bitboard((self.0 << 1) & Self::NOT_FILE_A.0)
    }

    /// Shift toward column 0, masking out wrapping.
    #[inline(always)]
    pub const fn west(self) -> Bitboard {
        Bitboard((self.0 >> 1) & Self::NOT_FILE_I.0)
    }

    #[inline(always)]
    pub const fn north_east(self) -> Bitboard {
        Bitboard((self.0 << 10) & Self::NOT_FILE_A.0)
    }

    #[inline(always)]
    pub const fn north_west(self) -> Bitboard {
        Bitboard((self.0 << 8) & Self::NOT_FILE_I.0)
    }

    #[inline(always)]
    pub const fn south_east(self) -> Bitboard {
        Bitboard((self.0 >> 8) & Self::NOT_FILE_A.0)
    }

    #[inline(always)]
    pub const fn south_west(self) -> Bitboard {
        Bitboard((self.0 >> 10) & Self::NOT_FILE_I.0)
    }

    /// Every cell one king step away from any cell in the set.
    #[inline(always)]
    pub const fn king_spread(self) -> Bitboard {
        Bitboard(
            self.north().0
                | self.south().0
                | self.east().0
                | self.west().0
                | self.north_east().0
                | self.north_west().0
                | self.south_east().0
                | self.south_west().0,
        )
    }
}

// Operator implementations for convenient bitwise operations
impl BitAnd for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

/// Complement within the board; off-board bits stay clear.
impl Not for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(!self.0 & board_mask())
    }
}

/// Iterator over set cells in ascending order.
impl Iterator for Bitboard {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_lsb()
    }
}

#[cfg(test)]
#[path = "bitboard_tests.rs"]
mod bitboard_tests;
