pub mod actiongen;
pub mod adjacency;
pub mod bitboard;
pub mod eval;
pub mod partition;
pub mod perft;
pub mod protocol;
pub mod state;
pub mod time_control;
pub mod types;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use actiongen::*;
pub use adjacency::AdjacencyTable;
pub use bitboard::*;
pub use eval::{EvalWeights, MAX_MOBILITY_WEIGHT, PLY_PENALTY, WIN_SCORE, evaluate};
pub use partition::{Partition, partition, partition_counts};
pub use perft::perft;
pub use state::*;
pub use time_control::*;
pub use types::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait: implemented by every Blockade engine (alpha-beta, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best action found (None if no legal action or no depth completed)
    pub best_action: Option<Action>,
    /// Evaluation score from the engine's perspective
    pub score: i32,
    /// Deepest fully completed search depth
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

/// Trait that all Blockade engines implement.
///
/// Lets the driver and the tournament runner swap between the alpha-beta
/// engine and baselines without caring which one they hold.
pub trait Engine: Send {
    /// Choose an action for `player` in `state` within `limits`.
    fn search(&mut self, state: &GameState, player: Player, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
