//! Minimax search with alpha-beta pruning and iterative deepening

use blockade_core::{
    count_legal_moves, evaluate, generate_actions, Action, AdjacencyTable, EvalWeights, GameState, Player,
    TimeControl, CELL_COUNT, PLY_PENALTY, WIN_SCORE,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::transposition::{Bound, TranspositionCache};

/// Window bound larger than any evaluation.
pub const INFINITY: i32 = i32::MAX / 2;

/// Scores at or beyond this are forced wins or losses inside the horizon.
pub const PROVEN_SCORE: i32 = WIN_SCORE - (CELL_COUNT as i32) * PLY_PENALTY;

/// Value of one searched node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeResult {
    pub value: i32,
    /// Only set for nodes that were expanded, never for cache hits or leaves.
    pub best_action: Option<Action>,
    /// The deadline passed somewhere below this node; value is meaningless.
    pub cancelled: bool,
}

impl NodeResult {
    fn value(value: i32) -> Self {
        Self {
            value,
            best_action: None,
            cancelled: false,
        }
    }

    fn cancelled() -> Self {
        Self {
            value: 0,
            best_action: None,
            cancelled: true,
        }
    }
}

/// Result from `find_best_move` for the deepest completed iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best action of the deepest completed depth (None if none completed
    /// or there is no legal action)
    pub best_action: Option<Action>,
    /// Minimax value of that depth
    pub score: i32,
    /// Deepest completed depth (0 if none)
    pub depth: u8,
    /// Nodes visited across all iterations
    pub nodes: u64,
    /// True if an iteration was abandoned because time ran out
    pub stopped: bool,
}

/// Everything one search call needs, borrowed from the engine.
pub struct Searcher<'a, R: ?Sized> {
    adj: &'a AdjacencyTable,
    weights: &'a EvalWeights,
    cache: &'a mut TranspositionCache,
    rng: &'a mut R,
    tc: &'a TimeControl,
    perspective: Player,
    nodes: u64,
}

impl<'a, R: Rng + ?Sized> Searcher<'a, R> {
    pub fn new(
        adj: &'a AdjacencyTable,
        weights: &'a EvalWeights,
        cache: &'a mut TranspositionCache,
        rng: &'a mut R,
        tc: &'a TimeControl,
        perspective: Player,
    ) -> Self {
        Self {
            adj,
            weights,
            cache,
            rng,
            tc,
            perspective,
            nodes: 0,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Iterative deepening from depth 1 up to `max_depth`.
    ///
    /// Each depth starts from an empty cache. A depth cut short by the
    /// deadline is discarded and the previous depth's answer is kept.
    pub fn find_best_move(&mut self, state: &GameState, max_depth: u8) -> SearchOutcome {
        let mut outcome = SearchOutcome {
            best_action: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stopped: false,
        };

        if count_legal_moves(state, self.adj, self.perspective) == 0 {
            return outcome;
        }

        for depth in 1..=max_depth {
            if self.tc.check_time() {
                outcome.stopped = true;
                break;
            }

            self.cache.clear();
            let result = self.minimax(state, depth, self.perspective, -INFINITY, INFINITY);

            if result.cancelled {
                trace!(depth, nodes = self.nodes, "iteration cancelled");
                outcome.stopped = true;
                break;
            }

            outcome.best_action = result.best_action;
            outcome.score = result.value;
            outcome.depth = depth;
            debug!(
                depth,
                score = result.value,
                nodes = self.nodes,
                action = ?result.best_action,
                "depth complete"
            );

            if result.value.abs() >= PROVEN_SCORE {
                debug!(depth, score = result.value, "result proven, stopping");
                break;
            }
        }

        outcome.nodes = self.nodes;
        outcome
    }

    /// Depth-limited minimax with alpha-beta pruning.
    ///
    /// The node maximizes when `to_move` is the perspective player. Children
    /// are visited in random order.
    pub fn minimax(
        &mut self,
        state: &GameState,
        depth: u8,
        to_move: Player,
        mut alpha: i32,
        mut beta: i32,
    ) -> NodeResult {
        if self.tc.should_check_time(self.nodes) && self.tc.check_time() {
            return NodeResult::cancelled();
        }
        self.nodes += 1;

        let key = state.fingerprint();
        if let Some(value) = self.cache.lookup(key, depth, alpha, beta) {
            return NodeResult::value(value);
        }

        if depth == 0 || count_legal_moves(state, self.adj, to_move) == 0 {
            let value = evaluate(state, self.adj, self.weights, self.perspective, to_move);
            self.cache.store(key, depth, value, Bound::Exact);
            return NodeResult::value(value);
        }

        let mut children: Vec<(Action, GameState)> = generate_actions(state, self.adj, to_move)
            .into_iter()
            .map(|action| (action, state.apply(to_move, action)))
            .collect();
        children.shuffle(&mut *self.rng);

        let maximizing = to_move == self.perspective;
        let (alpha_orig, beta_orig) = (alpha, beta);
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        let mut best_action = None;

        for (action, child) in children {
            let result = self.minimax(&child, depth - 1, to_move.other(), alpha, beta);
            if result.cancelled {
                return NodeResult::cancelled();
            }

            if maximizing {
                if result.value > best {
                    best = result.value;
                    best_action = Some(action);
                }
                alpha = alpha.max(best);
            } else {
                if result.value < best {
                    best = result.value;
                    best_action = Some(action);
                }
                beta = beta.min(best);
            }

            if beta <= alpha {
                break; // Cutoff
            }
        }

        let bound = if best <= alpha_orig {
            Bound::Upper
        } else if best >= beta_orig {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.cache.store(key, depth, best, bound);

        NodeResult {
            value: best,
            best_action,
            cancelled: false,
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
