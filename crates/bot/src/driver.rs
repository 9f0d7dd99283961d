//! Turn loop: read the referee's update, search, answer before the deadline.

use std::io::{BufRead, Write};
use std::time::Instant;

use alphabeta_engine::AlphaBetaEngine;
use anyhow::{Context, Result};
use blockade_core::protocol::{format_action, format_random, read_init, read_turn, ProtocolError, TokenReader};
use blockade_core::{Engine, SearchLimits};
use random_engine::RandomEngine;
use tracing::{debug, info, warn};

use crate::config::BotConfig;
use crate::session::Session;

/// Search engine plus the random fallback used when no depth finishes.
pub struct Bot {
    engine: AlphaBetaEngine,
    fallback: RandomEngine,
    max_depth: u8,
    local: bool,
}

impl Bot {
    pub fn new(config: &BotConfig) -> Self {
        let (engine, fallback) = match config.seed {
            Some(seed) => (
                AlphaBetaEngine::with_seed(seed),
                RandomEngine::with_seed(seed.rotate_left(32)),
            ),
            None => (AlphaBetaEngine::new(), RandomEngine::new()),
        };
        Self {
            engine: engine
                .with_weights(config.weights)
                .with_max_depth(config.max_depth),
            fallback,
            max_depth: config.max_depth,
            local: config.local,
        }
    }

    /// Pick our action, record it in `session` and return the reply line.
    pub fn play_turn(&mut self, session: &mut Session, deadline: Instant) -> String {
        let state = *session.state();
        let me = session.me();

        let mut limits = SearchLimits::until(deadline);
        limits.depth = self.max_depth;
        let result = self.engine.search(&state, me, limits);

        let (action, note) = match result.best_action {
            Some(action) => (
                action,
                format!("d{} s{} n{}", result.depth, result.score, result.nodes),
            ),
            None => match self.fallback.pick(&state, me) {
                Some(action) => {
                    warn!(ply = state.ply, "no search depth finished, playing a random action");
                    (action, "random".to_string())
                }
                None => {
                    warn!(ply = state.ply, "no legal action left");
                    return format_random(self.local.then_some("blocked"));
                }
            },
        };

        debug!(%action, depth = result.depth, score = result.score, "chose action");
        session.commit(action);
        format_action(action, self.local.then_some(note.as_str()))
    }
}

/// Play one game over `input`/`output` until the referee closes the input.
pub fn run<R: BufRead, W: Write>(config: &BotConfig, input: R, mut output: W) -> Result<()> {
    let mut tokens = TokenReader::new(input);
    let start = read_init(&mut tokens).context("failed to read starting position")?;
    let mut session = Session::from_init(start)?;
    let mut bot = Bot::new(config);
    info!(player = ?session.me(), "game started");

    loop {
        let turn = match read_turn(&mut tokens) {
            Ok(turn) => turn,
            Err(ProtocolError::Eof) => {
                info!(ply = session.state().ply, "input closed");
                return Ok(());
            }
            Err(e) => return Err(e).context("failed to read turn input"),
        };
        let turn_start = Instant::now();

        session.observe(turn)?;
        let deadline = turn_start + config.budget(session.is_first_turn());
        let line = bot.play_turn(&mut session, deadline);

        writeln!(output, "{line}")?;
        output.flush()?;
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod driver_tests;
