//! Tournament Runner for Blockade engines
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Tracking Elo ratings across versions
//! - Persisting results and reports as JSON
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the alpha-beta and random engines
//! cargo run -p tournament -- match alphabeta random --games 20
//!
//! # Run a gauntlet with settings from a TOML file
//! cargo run -p tournament -- gauntlet alphabeta:7 --config tournament.toml
//! ```

mod elo;
mod error;
mod match_runner;
mod results;

pub use elo::*;
pub use error::TournamentError;
pub use match_runner::*;
pub use results::*;
