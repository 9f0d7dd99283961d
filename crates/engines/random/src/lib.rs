//! Random Action Blockade Engine
//!
//! Selects uniformly among every legal (move, removal) pair.
//! Useful for:
//! - Baseline comparisons (the alpha-beta engine should easily beat this)
//! - The driver's fallback when a search finishes no depth in time
//! - Stress testing the action generator

use blockade_core::{
    all_legal_actions, Action, AdjacencyTable, Engine, GameState, Player, SearchLimits,
    SearchResult,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A Blockade engine that plays random legal actions.
///
/// Draws from the complete enumeration rather than the reduced generator,
/// so every legal removal can come up.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    adj: AdjacencyTable,
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            adj: AdjacencyTable::new(),
            rng,
            nodes: 0,
        }
    }

    /// Any legal action for `player`, or None if it is boxed in.
    pub fn pick(&mut self, state: &GameState, player: Player) -> Option<Action> {
        let actions = all_legal_actions(state, &self.adj, player);
        self.nodes = actions.len() as u64;
        actions.choose(&mut self.rng).copied()
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, state: &GameState, player: Player, _limits: SearchLimits) -> SearchResult {
        let best_action = self.pick(state, player);

        SearchResult {
            best_action,
            score: 0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
