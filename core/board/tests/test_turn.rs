//! 回合流程測試

use pursuit_board::component::{Position, Role};
use pursuit_board::error::{ErrorKind, MovementError};
use pursuit_board::loader::{build_arena, builtin_scenarios, load_from_ascii};
use pursuit_board::logic::board::is_adjacent;
use pursuit_board::logic::encounter::Outcome;
use pursuit_board::logic::movement::{Advance, Direction, HaltReason};
use pursuit_board::logic::turn::{player_turn, pursuer_turn};

#[test]
fn test_player_steps_onto_pursuer_is_caught_immediately() {
    let ascii = r#"
. P .
. E .
. . $
    "#;
    let (mut arena, markers) = load_from_ascii(ascii).unwrap();
    assert_eq!(markers["P"][0], Position { x: 1, y: 0 });
    assert_eq!(markers["E"][0], Position { x: 1, y: 1 });

    let outcome = player_turn(&mut arena, Direction::Down).unwrap();
    assert_eq!(outcome, Outcome::PlayerCaught);
    assert_eq!(arena.position_of(Role::Player), Some(Position { x: 1, y: 1 }));
}

#[test]
fn test_player_reaches_goal() {
    let ascii = r#"
. P $
E . .
    "#;
    let (mut arena, _) = load_from_ascii(ascii).unwrap();
    assert_eq!(
        player_turn(&mut arena, Direction::Right).unwrap(),
        Outcome::PlayerWon
    );
}

#[test]
fn test_player_turn_rejected_move() {
    let ascii = r#"
P X
E $
    "#;
    let (mut arena, markers) = load_from_ascii(ascii).unwrap();
    let err = player_turn(&mut arena, Direction::Right).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Movement(MovementError::Blocked { .. })
    ));
    let err = player_turn(&mut arena, Direction::Up).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Movement(MovementError::OutOfBounds { .. })
    ));
    assert_eq!(arena.position_of(Role::Player), Some(markers["P"][0]));
}

#[test]
fn test_pursuer_advances_one_step() {
    let ascii = r#"
E . . . P
. . . . .
. . . . $
    "#;
    let (mut arena, _) = load_from_ascii(ascii).unwrap();
    let turn = pursuer_turn(&mut arena).unwrap();

    assert_eq!(
        turn.path,
        Some(vec![
            Position { x: 1, y: 0 },
            Position { x: 2, y: 0 },
            Position { x: 3, y: 0 },
            Position { x: 4, y: 0 },
        ])
    );
    assert_eq!(turn.advance, Some(Advance::Moved(Position { x: 1, y: 0 })));
    assert_eq!(turn.outcome, Outcome::Ongoing);
    assert_eq!(arena.position_of(Role::Pursuer), Some(Position { x: 1, y: 0 }));
}

#[test]
fn test_pursuer_catches_player() {
    let ascii = r#"
$ . .
E P .
    "#;
    let (mut arena, markers) = load_from_ascii(ascii).unwrap();
    let turn = pursuer_turn(&mut arena).unwrap();
    assert_eq!(turn.advance, Some(Advance::Moved(markers["P"][0])));
    assert_eq!(turn.outcome, Outcome::PlayerCaught);
}

#[test]
fn test_unreachable_player_wins_without_pursuer_moving() {
    let ascii = r#"
E . X . .
. . X P .
. . X . $
    "#;
    let (mut arena, markers) = load_from_ascii(ascii).unwrap();
    let turn = pursuer_turn(&mut arena).unwrap();
    assert_eq!(turn.path, None);
    assert_eq!(turn.advance, None);
    assert_eq!(turn.outcome, Outcome::PlayerWon);
    assert_eq!(arena.position_of(Role::Pursuer), Some(markers["E"][0]));
}

#[test]
fn test_pursuer_refuses_to_step_onto_goal() {
    let ascii = r#"
E . $
    "#;
    let (mut arena, markers) = load_from_ascii(ascii).unwrap();
    let goal = markers["$"][0];
    arena.place(Role::Player, goal).unwrap();

    let turn = pursuer_turn(&mut arena).unwrap();
    assert_eq!(turn.advance, Some(Advance::Moved(Position { x: 1, y: 0 })));

    let turn = pursuer_turn(&mut arena).unwrap();
    assert_eq!(
        turn.advance,
        Some(Advance::Halted {
            at: Position { x: 1, y: 0 },
            next: goal,
            reason: HaltReason::Goal,
        })
    );
    assert_eq!(turn.outcome, Outcome::PlayerWon);
    assert_eq!(arena.position_of(Role::Pursuer), Some(Position { x: 1, y: 0 }));
}

#[test]
fn test_pursuer_on_player_cell_does_not_move() {
    let ascii = r#"
. . E
. . $
    "#;
    let (mut arena, markers) = load_from_ascii(ascii).unwrap();
    let shared = markers["E"][0];
    arena.place(Role::Player, shared).unwrap();

    let turn = pursuer_turn(&mut arena).unwrap();
    assert_eq!(turn.path, Some(vec![]));
    assert_eq!(turn.advance, None);
    assert_eq!(turn.outcome, Outcome::PlayerCaught);
    assert_eq!(arena.position_of(Role::Pursuer), Some(shared));
}

#[test]
fn test_pursuer_turn_requires_placed_agents() {
    let (mut arena, _) = load_from_ascii(". E .").unwrap();
    assert!(pursuer_turn(&mut arena).is_err());
}

#[test]
fn test_builtin_scenarios_rounds_keep_invariants() {
    let script = [
        Direction::Down,
        Direction::Right,
        Direction::Right,
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    for config in builtin_scenarios().unwrap() {
        let mut arena = build_arena(&config).unwrap();
        for direction in script {
            let outcome = match player_turn(&mut arena, direction) {
                Ok(outcome) => outcome,
                // 被拒絕的移動不算回合
                Err(_) => continue,
            };
            if outcome.is_over() {
                break;
            }

            let before = arena.position_of(Role::Pursuer).unwrap();
            let turn = pursuer_turn(&mut arena).unwrap();
            let after = arena.position_of(Role::Pursuer).unwrap();

            assert!(!arena.grid.is_blocked(after), "{}", config.name);
            assert!(!arena.grid.is_goal(after), "{}", config.name);
            if turn.path.is_some() {
                assert!(is_adjacent(before, after), "{}", config.name);
            } else {
                assert_eq!(before, after, "{}", config.name);
            }
            if turn.outcome.is_over() {
                break;
            }
        }
    }
}
