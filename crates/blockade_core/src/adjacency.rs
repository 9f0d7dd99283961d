//! Pre-computed king-step neighbourhoods.
//!
//! Every cell has at most eight in-bounds neighbours. The table keeps both a
//! bitboard mask (for set operations) and a short list (for ordered
//! iteration). It is built once and only read afterwards.

use crate::bitboard::Bitboard;
use crate::types::CELL_COUNT;

#[derive(Clone, Debug)]
pub struct AdjacencyTable {
    masks: [Bitboard; CELL_COUNT],
    lists: [[u8; 8]; CELL_COUNT],
    lens: [u8; CELL_COUNT],
}

impl AdjacencyTable {
    pub fn new() -> Self {
        let mut masks = [Bitboard::EMPTY; CELL_COUNT];
        let mut lists = [[0u8; 8]; CELL_COUNT];
        let mut lens = [0u8; CELL_COUNT];

        for cell in 0..CELL_COUNT as u8 {
            let mask = Bitboard::from_cell(cell).king_spread();
            masks[cell as usize] = mask;
            for (i, n) in mask.enumerate() {
                lists[cell as usize][i] = n;
            }
            lens[cell as usize] = mask.popcount() as u8;
        }

        Self { masks, lists, lens }
    }

    /// Neighbour mask for a cell.
    #[inline(always)]
    pub fn mask(&self, cell: u8) -> Bitboard {
        self.masks[cell as usize]
    }

    /// Neighbours of a cell in ascending index order.
    #[inline(always)]
    pub fn neighbors(&self, cell: u8) -> &[u8] {
        let cell = cell as usize;
        &self.lists[cell][..self.lens[cell] as usize]
    }

    /// Union of the neighbourhoods of every cell in `cells`.
    #[inline]
    pub fn spread(&self, cells: Bitboard) -> Bitboard {
        let mut out = Bitboard::EMPTY;
        for cell in cells {
            out |= self.masks[cell as usize];
        }
        out
    }
}

impl Default for AdjacencyTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "adjacency_tests.rs"]
mod adjacency_tests;
