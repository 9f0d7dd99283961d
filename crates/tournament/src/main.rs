//! Tournament CLI
//!
//! Run matches between engines and track Elo ratings.

use std::path::{Path, PathBuf};

use alphabeta_engine::AlphaBetaEngine;
use anyhow::{bail, Context, Result};
use blockade_core::Engine;
use clap::{Args, Parser, Subcommand};
use random_engine::RandomEngine;
use tournament::{EloTracker, MatchRunner, TournamentConfig, TournamentResults};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tournament", about = "Blockade engine tournament runner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a match between two engines
    Match {
        /// Engine spec: `alphabeta`, `alphabeta:<max depth>`, `random`
        engine1: String,
        engine2: String,
        #[command(flatten)]
        opts: MatchOpts,
    },
    /// Play one engine against every configured opponent
    Gauntlet {
        challenger: String,
        #[command(flatten)]
        opts: MatchOpts,
        /// Write the tournament results as JSON
        #[arg(long)]
        results: Option<PathBuf>,
    },
    /// Show the stored ratings
    #[command(alias = "elo")]
    Leaderboard {
        #[arg(long, default_value = "tournament_elo.json")]
        elo_file: PathBuf,
    },
}

#[derive(Args)]
struct MatchOpts {
    /// TOML file with tournament settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    games: Option<u32>,
    #[arg(short, long)]
    depth: Option<u8>,
    /// Budget per action in milliseconds
    #[arg(long)]
    time_ms: Option<u64>,
    /// Seed for both engines, for reproducible matches
    #[arg(long)]
    seed: Option<u64>,
}

impl MatchOpts {
    fn load_config(&self) -> Result<TournamentConfig> {
        let mut config = match &self.config {
            Some(path) => TournamentConfig::load(path)?,
            None => TournamentConfig::default(),
        };
        if let Some(games) = self.games {
            config.games_per_match = games;
        }
        if let Some(depth) = self.depth {
            config.search_depth = depth;
        }
        if self.time_ms.is_some() {
            config.time_per_move_ms = self.time_ms;
        }
        Ok(config)
    }
}

fn create_engine(spec: &str, seed: Option<u64>) -> Result<Box<dyn Engine>> {
    let (kind, arg) = match spec.split_once(':') {
        Some((kind, arg)) => (kind, Some(arg)),
        None => (spec, None),
    };

    match kind.to_lowercase().as_str() {
        "alphabeta" | "ab" => {
            let mut engine = match seed {
                Some(seed) => AlphaBetaEngine::with_seed(seed),
                None => AlphaBetaEngine::new(),
            };
            if let Some(depth) = arg {
                let depth: u8 = depth
                    .parse()
                    .with_context(|| format!("bad depth in engine spec {spec:?}"))?;
                engine = engine.with_max_depth(depth);
            }
            Ok(Box::new(engine))
        }
        "random" => Ok(Box::new(match seed {
            Some(seed) => RandomEngine::with_seed(seed),
            None => RandomEngine::new(),
        })),
        _ => bail!("unknown engine {spec:?} (expected alphabeta[:depth] or random)"),
    }
}

fn run_match(engine1_spec: &str, engine2_spec: &str, opts: &MatchOpts) -> Result<()> {
    let config = opts.load_config()?;
    info!(
        engine1 = engine1_spec,
        engine2 = engine2_spec,
        games = config.games_per_match,
        depth = config.search_depth,
        "starting match"
    );

    let mut engine1 = create_engine(engine1_spec, opts.seed)?;
    let mut engine2 = create_engine(engine2_spec, opts.seed.map(|s| s.wrapping_add(1)))?;

    let runner = MatchRunner::new(config.match_config());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut tracker = EloTracker::load_or_default(&config.elo_file)?;
    tracker.update_ratings(engine1_spec, engine2_spec, &result);
    println!("\n{}", tracker.format_leaderboard());
    tracker
        .save(&config.elo_file)
        .context("failed to save Elo tracker")?;
    Ok(())
}

fn run_gauntlet(challenger_spec: &str, opts: &MatchOpts, results_path: Option<&Path>) -> Result<()> {
    let config = opts.load_config()?;
    if config.opponents.is_empty() {
        bail!("gauntlet needs at least one opponent in the config");
    }

    let mut tracker = EloTracker::load_or_default(&config.elo_file)?;
    let mut results = TournamentResults::new(
        &format!("Gauntlet: {challenger_spec}"),
        std::iter::once(challenger_spec.to_string())
            .chain(config.opponents.iter().cloned())
            .collect(),
        config.clone(),
    );
    let runner = MatchRunner::new(config.match_config());

    for (i, opponent) in config.opponents.iter().enumerate() {
        info!(challenger = challenger_spec, opponent = %opponent, "starting match");

        let offset = 2 * i as u64;
        let mut challenger = create_engine(challenger_spec, opts.seed.map(|s| s.wrapping_add(offset)))?;
        let mut opp_engine = create_engine(opponent, opts.seed.map(|s| s.wrapping_add(offset + 1)))?;

        let result = runner.run_match(challenger.as_mut(), opp_engine.as_mut());
        println!(
            "{} vs {}: {}-{}-{} (Score: {:.1}%)",
            challenger_spec,
            opponent,
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        );

        tracker.update_ratings(challenger_spec, opponent, &result);
        results.add_match(challenger_spec, opponent, result);
    }

    println!("\n{}", tracker.format_leaderboard());
    println!("{}", results.generate_report());

    tracker
        .save(&config.elo_file)
        .context("failed to save Elo tracker")?;
    if let Some(path) = results_path {
        results.save(path).context("failed to save results")?;
    }
    Ok(())
}

fn show_leaderboard(elo_file: &Path) -> Result<()> {
    if !elo_file.exists() {
        println!("No tournament data found. Run some matches first!");
        return Ok(());
    }
    let tracker = EloTracker::load(elo_file)?;
    println!("{}", tracker.format_leaderboard());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Match {
            engine1,
            engine2,
            opts,
        } => run_match(engine1, engine2, opts),
        Command::Gauntlet {
            challenger,
            opts,
            results,
        } => run_gauntlet(challenger, opts, results.as_deref()),
        Command::Leaderboard { elo_file } => show_leaderboard(elo_file),
    }
}
