//! Alpha-beta Blockade engine
//!
//! Iterative-deepening minimax with alpha-beta pruning, a per-iteration
//! transposition cache and a territory-plus-mobility evaluation.
//! Children are visited in a seeded random order.

pub mod search;
pub mod transposition;

use std::time::Instant;

use blockade_core::{
    Action, AdjacencyTable, Engine, EvalWeights, GameState, Player, SearchLimits, SearchResult,
    MAX_DEPTH,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

pub use search::{SearchOutcome, Searcher, INFINITY, PROVEN_SCORE};
pub use transposition::{Bound, CacheEntry, TranspositionCache};

/// Engine state that survives between turns: the adjacency table, the
/// evaluation weights, the cache allocation and the shuffle RNG.
#[derive(Debug, Clone)]
pub struct AlphaBetaEngine {
    adj: AdjacencyTable,
    weights: EvalWeights,
    cache: TranspositionCache,
    rng: StdRng,
    max_depth: u8,
    /// Node counter for statistics
    nodes: u64,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Engine whose move choice is fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            adj: AdjacencyTable::new(),
            weights: EvalWeights::default(),
            cache: TranspositionCache::new(),
            rng,
            max_depth: MAX_DEPTH,
            nodes: 0,
        }
    }

    /// Prepare an engine for a game starting from `state`.
    pub fn initialize(state: &GameState) -> Self {
        state.assert_valid();
        Self::new()
    }

    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Cap iterative deepening below `MAX_DEPTH`.
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth.clamp(1, MAX_DEPTH);
        self
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    pub fn adjacency(&self) -> &AdjacencyTable {
        &self.adj
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Best action for `player` found before `deadline`, or None if no
    /// depth finished in time or `player` cannot move.
    pub fn choose_action(
        &mut self,
        state: &GameState,
        player: Player,
        deadline: Instant,
    ) -> Option<Action> {
        let mut limits = SearchLimits::until(deadline);
        limits.depth = self.max_depth;
        self.search(state, player, limits).best_action
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for AlphaBetaEngine {
    fn search(&mut self, state: &GameState, player: Player, mut limits: SearchLimits) -> SearchResult {
        limits.start();
        let max_depth = limits.max_depth().min(self.max_depth);

        let outcome = {
            let mut searcher = Searcher::new(
                &self.adj,
                &self.weights,
                &mut self.cache,
                &mut self.rng,
                &limits.time_control,
                player,
            );
            searcher.find_best_move(state, max_depth)
        };
        self.nodes = outcome.nodes;

        debug!(
            ?player,
            depth = outcome.depth,
            score = outcome.score,
            nodes = outcome.nodes,
            stopped = outcome.stopped,
            "search finished"
        );

        SearchResult {
            best_action: outcome.best_action,
            score: outcome.score,
            depth: outcome.depth,
            nodes: outcome.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.cache.clear();
        self.nodes = 0;
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
