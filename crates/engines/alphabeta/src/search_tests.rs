use super::*;
use blockade_core::{cell, count_legal_moves, is_legal_action, MAX_DEPTH};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

const MIDGAME: &str = "
    .........
    ..#......
    ....#....
    .0...#...
    ...#.....
    .....1...
    ..#...#..
    .........
    ....#....
";

const CROWDED: &str = "
    0..#.....
    ##.#.###.
    ...#.#...
    .###.#.#.
    .....#.#.
    ####...#.
    ...#.###.
    .#.....#1
    .#.#####.
";

const CORNERED: &str = "
    0#.......
    ##.......
    .........
    .........
    .........
    .........
    .........
    .........
    ........1
";

/// Pawn 1 has a single free neighbour left after (7,7) is taken.
const ONE_MOVE_WIN: &str = "
    .........
    .........
    .........
    .........
    .........
    .........
    ......0..
    ........#
    ........1
";

fn search(state: &GameState, perspective: Player, depth: u8, seed: u64) -> SearchOutcome {
    let adj = AdjacencyTable::new();
    let weights = EvalWeights::default();
    let mut cache = TranspositionCache::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let tc = TimeControl::new(None);
    let mut searcher = Searcher::new(&adj, &weights, &mut cache, &mut rng, &tc, perspective);
    searcher.find_best_move(state, depth)
}

/// Plain minimax without pruning or caching.
fn reference_value(
    state: &GameState,
    adj: &AdjacencyTable,
    perspective: Player,
    to_move: Player,
    depth: u8,
) -> i32 {
    let weights = EvalWeights::default();
    let actions = generate_actions(state, adj, to_move);
    if depth == 0 || actions.is_empty() {
        return evaluate(state, adj, &weights, perspective, to_move);
    }
    let values = actions.into_iter().map(|a| {
        reference_value(&state.apply(to_move, a), adj, perspective, to_move.other(), depth - 1)
    });
    if to_move == perspective {
        values.max().unwrap()
    } else {
        values.min().unwrap()
    }
}

#[test]
fn test_startpos_returns_legal_action() {
    let adj = AdjacencyTable::new();
    let state = GameState::startpos();
    let outcome = search(&state, Player::Zero, 2, 1);

    assert_eq!(outcome.depth, 2);
    assert!(!outcome.stopped);
    assert!(outcome.nodes > 0);
    let action = outcome.best_action.expect("start position has moves");
    assert!(is_legal_action(&state, &adj, Player::Zero, action));
}

#[test]
fn test_finds_immediate_win() {
    let adj = AdjacencyTable::new();
    let state = GameState::from_diagram(ONE_MOVE_WIN, 10);
    let outcome = search(&state, Player::Zero, 4, 3);

    let expected = Action::new(cell(7, 7).unwrap(), cell(7, 8).unwrap());
    assert_eq!(outcome.best_action, Some(expected));
    assert!(outcome.score >= PROVEN_SCORE);
    // Proven at the first depth, no deeper iteration needed
    assert_eq!(outcome.depth, 1);

    let after = state.apply(Player::Zero, expected);
    assert_eq!(count_legal_moves(&after, &adj, Player::One), 0);
}

#[test]
fn test_matches_plain_minimax_at_depth_two() {
    let adj = AdjacencyTable::new();
    let state = GameState::from_diagram(MIDGAME, 7);
    let expected = reference_value(&state, &adj, Player::Zero, Player::Zero, 2);

    for seed in [0, 1, 2, 99] {
        let outcome = search(&state, Player::Zero, 2, seed);
        assert_eq!(outcome.depth, 2);
        assert_eq!(outcome.score, expected, "seed {seed}");
    }
}

#[test]
fn test_matches_plain_minimax_at_depth_three() {
    let adj = AdjacencyTable::new();
    let state = GameState::from_diagram(CROWDED, 31);

    for perspective in Player::BOTH {
        let expected = reference_value(&state, &adj, perspective, perspective, 3);
        for seed in [5, 6] {
            let outcome = search(&state, perspective, 3, seed);
            if outcome.depth == 3 {
                assert_eq!(outcome.score, expected, "{perspective:?} seed {seed}");
            } else {
                // Stopped early on a proven result
                assert!(outcome.score.abs() >= PROVEN_SCORE);
            }
        }
    }
}

#[test]
fn test_best_action_achieves_reported_score() {
    let adj = AdjacencyTable::new();
    let state = GameState::from_diagram(MIDGAME, 7);
    let outcome = search(&state, Player::One, 2, 11);

    let action = outcome.best_action.unwrap();
    let child = state.apply(Player::One, action);
    assert_eq!(
        reference_value(&child, &adj, Player::One, Player::Zero, 1),
        outcome.score
    );
}

#[test]
fn test_deadline_mid_search_keeps_deepest_completed_depth() {
    let adj = AdjacencyTable::new();
    let weights = EvalWeights::default();
    let mut cache = TranspositionCache::new();
    let mut rng = StdRng::seed_from_u64(8);
    // Depth 1 from the start is a few dozen nodes; depth 50 never finishes
    let tc = TimeControl::until(Instant::now() + Duration::from_millis(200));
    let mut searcher = Searcher::new(&adj, &weights, &mut cache, &mut rng, &tc, Player::Zero);

    let state = GameState::startpos();
    let outcome = searcher.find_best_move(&state, MAX_DEPTH);

    assert!(outcome.stopped);
    assert!(outcome.depth >= 1);
    assert!(outcome.depth < MAX_DEPTH);
    let action = outcome.best_action.expect("a completed depth has an action");
    assert!(is_legal_action(&state, &adj, Player::Zero, action));
}

#[test]
fn test_deeper_iteration_never_prefers_a_worse_action() {
    let adj = AdjacencyTable::new();
    let cases = [(MIDGAME, 7, 1), (CROWDED, 31, 2)];

    for (diagram, ply, d) in cases {
        let state = GameState::from_diagram(diagram, ply);
        for perspective in Player::BOTH {
            let shallow = search(&state, perspective, d, 4);
            let deep = search(&state, perspective, d + 1, 4);
            if deep.depth <= d {
                // Proven before reaching d + 1
                continue;
            }

            let shallow_action = shallow.best_action.unwrap();
            let child = state.apply(perspective, shallow_action);
            let shallow_at_deep =
                reference_value(&child, &adj, perspective, perspective.other(), d);
            assert!(
                deep.score >= shallow_at_deep,
                "{perspective:?} depth {d}: {} < {shallow_at_deep}",
                deep.score
            );
        }
    }
}

#[test]
fn test_leaf_and_blocked_nodes_are_evaluated() {
    let adj = AdjacencyTable::new();
    let weights = EvalWeights::default();
    let mut cache = TranspositionCache::new();
    let mut rng = StdRng::seed_from_u64(0);
    let tc = TimeControl::new(None);
    let mut searcher = Searcher::new(&adj, &weights, &mut cache, &mut rng, &tc, Player::One);

    let start = GameState::startpos();
    let leaf = searcher.minimax(&start, 0, Player::One, -INFINITY, INFINITY);
    assert_eq!(leaf.value, evaluate(&start, &adj, &weights, Player::One, Player::One));
    assert_eq!(leaf.best_action, None);

    // Player 0 is boxed in: evaluated immediately whatever depth remains
    let cornered = GameState::from_diagram(CORNERED, 3);
    let blocked = searcher.minimax(&cornered, 4, Player::Zero, -INFINITY, INFINITY);
    assert_eq!(
        blocked.value,
        evaluate(&cornered, &adj, &weights, Player::One, Player::Zero)
    );
    assert_eq!(blocked.best_action, None);
    assert_eq!(searcher.nodes(), 2);
}

#[test]
fn test_expired_deadline_returns_nothing() {
    let adj = AdjacencyTable::new();
    let weights = EvalWeights::default();
    let mut cache = TranspositionCache::new();
    let mut rng = StdRng::seed_from_u64(0);
    let tc = TimeControl::until(Instant::now());
    let mut searcher = Searcher::new(&adj, &weights, &mut cache, &mut rng, &tc, Player::Zero);

    let outcome = searcher.find_best_move(&GameState::startpos(), 5);
    assert_eq!(outcome.best_action, None);
    assert_eq!(outcome.depth, 0);
    assert!(outcome.stopped);
}

#[test]
fn test_cornered_player_has_no_action() {
    let state = GameState::from_diagram(CORNERED, 3);
    let outcome = search(&state, Player::Zero, 3, 0);

    assert_eq!(outcome.best_action, None);
    assert_eq!(outcome.depth, 0);
    assert!(!outcome.stopped);
}

#[test]
fn test_same_seed_same_result() {
    let state = GameState::from_diagram(MIDGAME, 7);
    let a = search(&state, Player::Zero, 2, 42);
    let b = search(&state, Player::Zero, 2, 42);
    assert_eq!(a, b);
}

#[test]
fn test_minimax_cancels_mid_tree() {
    let adj = AdjacencyTable::new();
    let weights = EvalWeights::default();
    let mut cache = TranspositionCache::new();
    let mut rng = StdRng::seed_from_u64(0);
    let tc = TimeControl::new(None);
    tc.stop();
    let mut searcher = Searcher::new(&adj, &weights, &mut cache, &mut rng, &tc, Player::Zero);

    let result = searcher.minimax(&GameState::startpos(), 3, Player::Zero, -INFINITY, INFINITY);
    assert!(result.cancelled);
    assert_eq!(result.best_action, None);
}
