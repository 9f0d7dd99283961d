//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p blockade_core -- [depth]
//!
//! Examples:
//!   # Default: depth 3 over the built-in positions
//!   cargo flamegraph --example perft_bench -p blockade_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p blockade_core -- 4

use blockade_core::{AdjacencyTable, GameState, Player, perft};
use std::env;
use std::time::Instant;

/// Positions from different stages of a game, player 0 to move
const TEST_POSITIONS: &[(&str, &str, u32)] = &[
    (
        "Starting position",
        "
        .........
        .........
        .........
        .........
        0.......1
        .........
        .........
        .........
        .........
        ",
        0,
    ),
    (
        "Midgame",
        "
        ..#......
        .#..#....
        ...0.....
        ..#..#...
        .....#...
        ...#..1..
        ......#..
        .........
        ..#......
        ",
        10,
    ),
    (
        "Crowded",
        "
        #.#.#.#.#
        .#.#.#.#.
        #.#..0#.#
        .#.#.#.#.
        #.#.#.#.#
        .#.#..#..
        #.#.#1#.#
        .#...#.#.
        #.#.#.#.#
        ",
        36,
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);

    let adj = AdjacencyTable::new();

    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, diagram, ply) in TEST_POSITIONS {
        let state = GameState::from_diagram(diagram, *ply);

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&state, &adj, Player::Zero, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
