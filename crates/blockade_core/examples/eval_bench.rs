//! Evaluation benchmark for profiling with cargo-flamegraph.
//!
//! The leaf evaluation (mobility plus territory flood fill) dominates search
//! time, so this runs it in a tight loop on a few positions.
//!
//! Usage:
//!   cargo flamegraph --example eval_bench -p blockade_core

use blockade_core::{AdjacencyTable, EvalWeights, GameState, Player, evaluate, generate_actions_into};
use std::hint::black_box;
use std::time::Instant;

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Start",
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
    ),
    (
        "Split board",
        "
        ....#....
        ....#....
        ....#....
        ....#....
        0...#...1
        ....#....
        ....#....
        ....#....
        ....#....
        ",
    ),
];

const ITERATIONS: usize = 200_000;

fn main() {
    println!("=== Evaluation Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let adj = AdjacencyTable::new();
    let weights = EvalWeights::default();
    let mut action_buf = Vec::with_capacity(256);
    let mut total_time = std::time::Duration::ZERO;

    for (name, diagram) in TEST_POSITIONS {
        let state = GameState::from_diagram(diagram, 0);

        print!("{name:.<20}");

        let start = Instant::now();
        let mut actions_generated = 0usize;
        for _ in 0..ITERATIONS {
            black_box(evaluate(
                black_box(&state),
                &adj,
                &weights,
                Player::Zero,
                Player::Zero,
            ));
            generate_actions_into(&state, &adj, Player::Zero, &mut action_buf);
            actions_generated += action_buf.len();
        }
        let elapsed = start.elapsed();
        total_time += elapsed;

        let per_pos = actions_generated as f64 / ITERATIONS as f64;
        let eps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {per_pos:>5.1} actions/pos, {eps:>10.0} evals/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    let avg = if total_time.as_secs_f64() > 0.0 {
        (ITERATIONS * TEST_POSITIONS.len()) as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_time:.3?} ({avg:.0} positions/sec)");
}
