//! Static evaluation: territory plus weighted mobility, with terminal bonuses.

use crate::{
    actiongen::count_legal_moves, adjacency::AdjacencyTable, partition::partition,
    state::GameState, types::Player,
};

/// Score for a side that cannot move on its turn. Larger than any positional
/// term can ever add up to.
pub const WIN_SCORE: i32 = 1_000_000;

/// Subtracted from `WIN_SCORE` per ply, so faster wins score higher.
pub const PLY_PENALTY: i32 = 1_000;

/// Largest mobility weight for which the terminal bonus still outweighs
/// every positional term (at most 81 + 8 * W, well under `WIN_SCORE / 2`).
pub const MAX_MOBILITY_WEIGHT: i32 = 1024;

/// Tunable evaluation weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalWeights {
    /// Multiplier on the mobility difference. Trades mobility against
    /// territory; re-tune both together. Must lie in
    /// `0..=MAX_MOBILITY_WEIGHT`.
    pub mobility: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self { mobility: 10 }
    }
}

/// Scores `state` for `perspective` with `to_move` about to play.
///
/// Positive is good for `perspective`.
pub fn evaluate(
    state: &GameState,
    adj: &AdjacencyTable,
    weights: &EvalWeights,
    perspective: Player,
    to_move: Player,
) -> i32 {
    state.assert_valid();
    debug_assert!(
        (0..=MAX_MOBILITY_WEIGHT).contains(&weights.mobility),
        "mobility weight {} out of range",
        weights.mobility
    );

    let opponent = perspective.other();
    let my_mobility = count_legal_moves(state, adj, perspective) as i32;
    let opp_mobility = count_legal_moves(state, adj, opponent) as i32;
    let (my_region, opp_region) = partition(state, adj).counts_for(perspective);

    let decided = WIN_SCORE - state.ply as i32 * PLY_PENALTY;
    let mut terminal = 0;
    if opp_mobility == 0 {
        terminal += if to_move == opponent {
            decided
        } else {
            WIN_SCORE / 2
        };
    }
    if my_mobility == 0 {
        terminal -= if to_move == perspective {
            decided
        } else {
            WIN_SCORE / 2
        };
    }

    terminal + (my_region - opp_region) + weights.mobility * (my_mobility - opp_mobility)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
