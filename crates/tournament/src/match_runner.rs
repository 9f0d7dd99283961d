//! Match runner for playing games between engines

use blockade_core::{
    count_legal_moves, is_legal_action, AdjacencyTable, Engine, GameState, Player, SearchLimits,
};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::elo::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Maximum time per action (None = depth only)
    pub time_per_move: Option<Duration>,
    /// Actions per game before declaring a draw
    pub max_moves: u32,
    /// Swap which engine moves first every other game
    pub alternate_sides: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            time_per_move: None,
            max_moves: 100,
            alternate_sides: true,
        }
    }
}

impl MatchConfig {
    fn search_limits(&self) -> SearchLimits {
        match self.time_per_move {
            Some(time) => SearchLimits::depth_and_time(self.depth, time),
            None => SearchLimits::depth(self.depth),
        }
    }
}

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The side to move had no legal action
    Blocked(Player),
    /// The engine returned no action or an illegal one while it could move
    Forfeit(Player),
    /// Move cap reached
    MoveLimit,
}

impl GameEnd {
    /// Result from player 0's perspective
    pub fn result(self) -> GameResult {
        match self {
            GameEnd::Blocked(Player::Zero) | GameEnd::Forfeit(Player::Zero) => GameResult::Loss,
            GameEnd::Blocked(Player::One) | GameEnd::Forfeit(Player::One) => GameResult::Win,
            GameEnd::MoveLimit => GameResult::Draw,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
    adj: AdjacencyTable,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            adj: AdjacencyTable::new(),
        }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_first = !self.config.alternate_sides || game_num % 2 == 0;

            let game_result = if engine1_first {
                self.play_game(engine1, engine2).result()
            } else {
                self.play_game(engine2, engine1).result().flipped()
            };
            result.record(game_result);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                side = if engine1_first { 0 } else { 1 },
                ?game_result,
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "game finished"
            );
        }

        result
    }

    /// Play one game from the start position; `first` controls player 0.
    pub fn play_game(&self, first: &mut dyn Engine, second: &mut dyn Engine) -> GameEnd {
        let mut state = GameState::startpos();
        let mut to_move = Player::Zero;
        first.new_game();
        second.new_game();

        for _ in 0..self.config.max_moves {
            if count_legal_moves(&state, &self.adj, to_move) == 0 {
                debug!(ply = state.ply, ?to_move, "side to move is blocked");
                return GameEnd::Blocked(to_move);
            }

            // Fresh limits per action so the clock restarts
            let limits = self.config.search_limits();
            let engine: &mut dyn Engine = match to_move {
                Player::Zero => &mut *first,
                Player::One => &mut *second,
            };
            let result = engine.search(&state, to_move, limits);

            match result.best_action {
                Some(action) if is_legal_action(&state, &self.adj, to_move, action) => {
                    state = state.apply(to_move, action);
                    to_move = to_move.other();
                }
                Some(action) => {
                    warn!(engine = engine.name(), %action, "illegal action, forfeiting");
                    return GameEnd::Forfeit(to_move);
                }
                None => {
                    warn!(engine = engine.name(), "no action while moves exist, forfeiting");
                    return GameEnd::Forfeit(to_move);
                }
            }
        }

        GameEnd::MoveLimit
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
