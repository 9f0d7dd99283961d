use super::*;
use blockade_core::{evaluate, generate_actions, is_legal_action};
use std::time::Duration;

#[test]
fn test_choose_action_is_legal() {
    let state = GameState::startpos();
    let mut engine = AlphaBetaEngine::initialize(&state).with_max_depth(2);

    let deadline = Instant::now() + Duration::from_secs(30);
    let action = engine
        .choose_action(&state, Player::Zero, deadline)
        .expect("start position has moves");
    assert!(is_legal_action(&state, engine.adjacency(), Player::Zero, action));
}

#[test]
fn test_choose_action_past_deadline_is_none() {
    let state = GameState::startpos();
    let mut engine = AlphaBetaEngine::with_seed(1);
    assert_eq!(engine.choose_action(&state, Player::One, Instant::now()), None);
}

#[test]
fn test_engine_trait_respects_depth_limit() {
    let mut engine = AlphaBetaEngine::with_seed(3);
    let result = engine.search(&GameState::startpos(), Player::Zero, SearchLimits::depth(1));

    assert_eq!(result.depth, 1);
    assert!(!result.stopped);
    assert!(result.best_action.is_some());
    assert_eq!(engine.nodes(), result.nodes);
}

#[test]
fn test_max_depth_caps_engine_trait_search() {
    let mut engine = AlphaBetaEngine::with_seed(3).with_max_depth(1);
    let result = engine.search(&GameState::startpos(), Player::Zero, SearchLimits::depth(4));
    assert_eq!(result.depth, 1);
}

#[test]
fn test_seeded_engines_agree() {
    let state = GameState::startpos();
    let mut a = AlphaBetaEngine::with_seed(9);
    let mut b = AlphaBetaEngine::with_seed(9);

    let ra = a.search(&state, Player::Zero, SearchLimits::depth(2));
    let rb = b.search(&state, Player::Zero, SearchLimits::depth(2));
    assert_eq!(ra.best_action, rb.best_action);
    assert_eq!(ra.score, rb.score);
}

#[test]
fn test_custom_weights_are_used() {
    let state = GameState::startpos();
    let adj = AdjacencyTable::new();
    let children: Vec<GameState> = generate_actions(&state, &adj, Player::Zero)
        .into_iter()
        .map(|a| state.apply(Player::Zero, a))
        .collect();

    let mut scores = Vec::new();
    for mobility in [0, 50] {
        let weights = EvalWeights { mobility };
        let mut engine = AlphaBetaEngine::with_seed(0).with_weights(weights);
        assert_eq!(engine.weights(), &weights);

        let result = engine.search(&state, Player::Zero, SearchLimits::depth(1));
        let expected = children
            .iter()
            .map(|child| evaluate(child, &adj, &weights, Player::Zero, Player::One))
            .max()
            .unwrap();
        assert_eq!(result.score, expected, "mobility {mobility}");
        scores.push(result.score);
    }

    // Stepping off the edge leaves player 0 more moves than player 1
    assert!(scores[1] > scores[0], "{scores:?}");
}
