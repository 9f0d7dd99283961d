use super::*;
use blockade_core::cell;

fn c(x: i8, y: i8) -> u8 {
    cell(x, y).unwrap()
}

#[test]
fn test_seat_from_start_coordinate() {
    assert_eq!(Session::from_init(Coord::new(0, 4)).unwrap().me(), Player::Zero);
    assert_eq!(Session::from_init(Coord::new(8, 4)).unwrap().me(), Player::One);
    assert_eq!(
        Session::from_init(Coord::new(4, 4)).unwrap_err(),
        SessionError::UnknownStart(Coord::new(4, 4))
    );
    assert!(Session::from_init(Coord::new(-1, 4)).is_err());
}

#[test]
fn test_first_turn_sentinel_changes_nothing() {
    let mut session = Session::from_init(Coord::new(0, 4)).unwrap();
    session
        .observe(TurnInput {
            opponent: Coord::new(8, 4),
            last_removed: None,
        })
        .unwrap();

    assert_eq!(*session.state(), GameState::startpos());
    assert!(session.is_first_turn());
}

#[test]
fn test_turns_alternate_and_count_plies() {
    let mut session = Session::from_init(Coord::new(8, 4)).unwrap();

    // Player 0 opened with (1,4) removing (7,4)
    session
        .observe(TurnInput {
            opponent: Coord::new(1, 4),
            last_removed: Some(Coord::new(7, 4)),
        })
        .unwrap();
    assert_eq!(session.state().pawn(Player::Zero), c(1, 4));
    assert!(session.state().is_removed(c(7, 4)));
    assert_eq!(session.state().ply, 1);

    session.commit(Action::new(c(7, 3), c(2, 4)));
    assert!(!session.is_first_turn());
    assert_eq!(session.state().pawn(Player::One), c(7, 3));
    assert_eq!(session.state().ply, 2);

    session
        .observe(TurnInput {
            opponent: Coord::new(1, 3),
            last_removed: Some(Coord::new(6, 3)),
        })
        .unwrap();
    assert_eq!(session.state().ply, 3);
    assert_eq!(session.state().removed.popcount(), 3);
}

#[test]
fn test_repeated_removal_is_not_counted_twice() {
    let mut session = Session::from_init(Coord::new(8, 4)).unwrap();
    let input = TurnInput {
        opponent: Coord::new(1, 4),
        last_removed: Some(Coord::new(7, 4)),
    };
    session.observe(input).unwrap();
    session.observe(input).unwrap();
    assert_eq!(session.state().ply, 1);
}

#[test]
fn test_inconsistent_updates_are_rejected() {
    let mut session = Session::from_init(Coord::new(0, 4)).unwrap();

    // Onto our own pawn
    assert_eq!(
        session.observe(TurnInput {
            opponent: Coord::new(0, 4),
            last_removed: None,
        }),
        Err(SessionError::BadOpponentCell(Coord::new(0, 4)))
    );

    // Removal under the opponent's new cell
    assert_eq!(
        session.observe(TurnInput {
            opponent: Coord::new(7, 4),
            last_removed: Some(Coord::new(7, 4)),
        }),
        Err(SessionError::BadRemovedTile(Coord::new(7, 4)))
    );

    // Failed updates leave the state alone
    assert_eq!(*session.state(), GameState::startpos());
}
