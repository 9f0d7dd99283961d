//! Blockade contest bot.
//!
//! Speaks the referee's line protocol on stdin/stdout. Logs go to stderr so
//! they never corrupt the protocol channel.

mod config;
mod driver;
mod session;

use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::BotConfig;

fn main() -> Result<()> {
    let config = BotConfig::from_env().context("invalid bot configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter())),
        )
        .with_writer(io::stderr)
        .with_ansi(config.local)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    driver::run(&config, stdin.lock(), stdout.lock())
}
