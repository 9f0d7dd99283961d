use super::*;
use std::collections::HashSet;

fn c(x: i8, y: i8) -> u8 {
    cell(x, y).unwrap()
}

#[test]
fn test_startpos_actions() {
    let adj = AdjacencyTable::new();
    let state = GameState::startpos();
    let actions = generate_actions(&state, &adj, Player::Zero);

    // 5 destinations × 5 cells around the opponent
    assert_eq!(actions.len(), 25);

    let dests: HashSet<u8> = actions.iter().map(|a| a.move_to).collect();
    let expected_dests: HashSet<u8> = [c(0, 3), c(0, 5), c(1, 3), c(1, 4), c(1, 5)].into();
    assert_eq!(dests, expected_dests);

    let removals: HashSet<u8> = actions.iter().map(|a| a.remove).collect();
    let expected_removals: HashSet<u8> = [c(7, 3), c(7, 4), c(7, 5), c(8, 3), c(8, 5)].into();
    assert_eq!(removals, expected_removals);
}

#[test]
fn test_startpos_mobility() {
    let adj = AdjacencyTable::new();
    let state = GameState::startpos();
    assert_eq!(count_legal_moves(&state, &adj, Player::Zero), 5);
    assert_eq!(count_legal_moves(&state, &adj, Player::One), 5);
}

#[test]
fn test_full_board_fallback() {
    let adj = AdjacencyTable::new();
    let state = GameState::from_diagram(
        "
        0........
        .........
        .........
        .........
        .........
        .........
        .........
        .......##
        .......#1
        ",
        3,
    );

    let actions = generate_actions(&state, &adj, Player::Zero);
    // 3 destinations, each paired with every free cell after the move
    assert_eq!(actions.len(), 3 * 76);
    for action in &actions {
        assert!(is_legal_action(&state, &adj, Player::Zero, *action));
    }

    // The cornered side has no moves and therefore no actions
    assert!(generate_actions(&state, &adj, Player::One).is_empty());
    assert_eq!(count_legal_moves(&state, &adj, Player::One), 0);
}

#[test]
fn test_destination_is_not_a_removal_candidate() {
    let adj = AdjacencyTable::new();
    let state = GameState::from_diagram(
        "
        .........
        .........
        .........
        .......0.
        ........1
        .........
        .........
        .........
        .........
        ",
        0,
    );

    let actions = generate_actions(&state, &adj, Player::Zero);
    assert!(!actions.is_empty());
    for action in &actions {
        assert_ne!(action.move_to, action.remove);
        assert!(is_legal_action(&state, &adj, Player::Zero, *action));
    }

    // Vacating (7,3) frees a cell next to the opponent
    assert!(actions.contains(&Action::new(c(6, 3), c(7, 3))));
    // Moving onto (7,4) takes it out of the candidate set
    assert!(!actions.iter().any(|a| a.move_to == c(7, 4) && a.remove == c(7, 4)));
}

#[test]
fn test_actions_are_subset_of_all_legal() {
    let adj = AdjacencyTable::new();
    let state = GameState::from_diagram(
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
    );

    for player in Player::BOTH {
        let all: HashSet<Action> = all_legal_actions(&state, &adj, player).into_iter().collect();
        let reduced = generate_actions(&state, &adj, player);
        assert!(!reduced.is_empty());
        for action in reduced {
            assert!(all.contains(&action), "{action} not legal");
        }
    }
}

#[test]
fn test_is_legal_action_rejects() {
    let adj = AdjacencyTable::new();
    let state = GameState::startpos();

    // Not adjacent
    assert!(!is_legal_action(&state, &adj, Player::Zero, Action::new(c(2, 4), c(7, 4))));
    // Removing the opponent's pawn
    assert!(!is_legal_action(&state, &adj, Player::Zero, Action::new(c(1, 4), c(8, 4))));
    // Removing the destination
    assert!(!is_legal_action(&state, &adj, Player::Zero, Action::new(c(1, 4), c(1, 4))));
    // Removing the vacated start cell is fine
    assert!(is_legal_action(&state, &adj, Player::Zero, Action::new(c(1, 4), c(0, 4))));
    // Off the board
    assert!(!is_legal_action(&state, &adj, Player::Zero, Action::new(81, 0)));
}

#[test]
fn test_buffer_is_reused() {
    let adj = AdjacencyTable::new();
    let state = GameState::startpos();
    let mut buf = vec![Action::new(0, 0); 100];
    generate_actions_into(&state, &adj, Player::One, &mut buf);
    assert_eq!(buf.len(), 25);
}
