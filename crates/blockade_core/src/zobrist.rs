//! Zobrist fingerprints for Blockade states.
//!
//! A fingerprint is the XOR of one random key per removed cell and one key
//! per pawn placement. Ply and side to move are not part of it: every action
//! removes exactly one cell, so within one game the removed count already
//! fixes both.

use crate::types::CELL_COUNT;

/// Pre-computed random values for Zobrist hashing.
/// Generated using a fixed seed for reproducibility.
pub struct ZobristKeys {
    /// Random values for each removed cell.
    pub removed: [u64; CELL_COUNT],
    /// Random values for each pawn on each cell, indexed by [player][cell].
    pub pawns: [[u64; CELL_COUNT]; 2],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Generate Zobrist keys using xorshift64 with a fixed seed.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x9E3779B97F4A7C15u64; // Fixed seed

        let mut removed = [0u64; CELL_COUNT];
        let mut cell = 0;
        while cell < CELL_COUNT {
            state = xorshift64(state);
            removed[cell] = state;
            cell += 1;
        }

        let mut pawns = [[0u64; CELL_COUNT]; 2];
        let mut player = 0;
        while player < 2 {
            let mut cell = 0;
            while cell < CELL_COUNT {
                state = xorshift64(state);
                pawns[player][cell] = state;
                cell += 1;
            }
            player += 1;
        }

        ZobristKeys { removed, pawns }
    }

    #[inline(always)]
    pub fn removed_key(&self, cell: u8) -> u64 {
        self.removed[cell as usize]
    }

    #[inline(always)]
    pub fn pawn_key(&self, player: usize, cell: u8) -> u64 {
        self.pawns[player][cell as usize]
    }
}

/// Global static Zobrist keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
