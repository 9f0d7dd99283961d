//! Territory partition by simultaneous breadth-first expansion.
//!
//! Both pawns flood outward over free cells one king step per round. A cell
//! first reached by only one side belongs to that side. A cell first reached
//! by both sides in the same round is contested: it belongs to nobody, is
//! never reassigned, and does not extend either frontier.

use crate::{adjacency::AdjacencyTable, bitboard::Bitboard, state::GameState, types::Player};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    /// Cells owned by each player, including the pawn's own cell.
    pub regions: [u32; 2],
    /// Free cells reached by both sides in the same round.
    pub contested: u32,
    /// Free cells neither side can reach.
    pub unreachable: u32,
}

impl Partition {
    /// `(mine, theirs)` from `perspective`'s point of view.
    #[inline]
    pub fn counts_for(&self, perspective: Player) -> (i32, i32) {
        (
            self.regions[perspective.idx()] as i32,
            self.regions[perspective.other().idx()] as i32,
        )
    }
}

pub fn partition(state: &GameState, adj: &AdjacencyTable) -> Partition {
    let free = state.free_cells();

    let mut frontiers = [
        Bitboard::from_cell(state.pawns[0]),
        Bitboard::from_cell(state.pawns[1]),
    ];
    let mut owned = frontiers;
    let mut seen = state.occupied();
    let mut contested = Bitboard::EMPTY;

    while !(frontiers[0].is_empty() && frontiers[1].is_empty()) {
        let reach0 = adj.spread(frontiers[0]) & free & !seen;
        let reach1 = adj.spread(frontiers[1]) & free & !seen;

        let both = reach0 & reach1;
        frontiers[0] = reach0 & !both;
        frontiers[1] = reach1 & !both;

        owned[0] |= frontiers[0];
        owned[1] |= frontiers[1];
        contested |= both;
        seen |= reach0 | reach1;
    }

    Partition {
        regions: [owned[0].popcount(), owned[1].popcount()],
        contested: contested.popcount(),
        unreachable: (free & !seen).popcount(),
    }
}

/// `(mine, theirs)` region sizes for `perspective`.
pub fn partition_counts(state: &GameState, adj: &AdjacencyTable, perspective: Player) -> (i32, i32) {
    partition(state, adj).counts_for(perspective)
}

#[cfg(test)]
#[path = "partition_tests.rs"]
mod partition_tests;
