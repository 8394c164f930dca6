//! 路徑搜尋測試

use pursuit_board::component::Position;
use pursuit_board::core_types::Grid;
use pursuit_board::loader::load_from_ascii;
use pursuit_board::logic::board::{is_adjacent, manhattan_distance};
use pursuit_board::logic::pathfinding::find_path;

fn assert_valid_path(grid: &Grid, start: Position, goal: Position, path: &[Position]) {
    let mut prev = start;
    for (idx, &pos) in path.iter().enumerate() {
        assert!(is_adjacent(prev, pos), "step {}: {:?} -> {:?}", idx, prev, pos);
        assert!(!grid.is_blocked(pos), "step {}: {:?} is blocked", idx, pos);
        if idx + 1 < path.len() {
            assert!(!grid.is_goal(pos), "step {}: passes through goal", idx);
        }
        prev = pos;
    }
    assert_eq!(path.last(), Some(&goal));
}

#[test]
fn test_find_path_first_level() {
    let mut grid = Grid::new(7, 7);
    for (x, y) in [(0, 4), (6, 6), (3, 3), (2, 5), (1, 2), (2, 2)] {
        grid.add_obstacle(Position { x, y }).unwrap();
    }
    grid.set_goal(Position { x: 4, y: 3 }).unwrap();

    let start = Position { x: 6, y: 4 };
    let goal = Position { x: 0, y: 1 };
    let path = find_path(&grid, start, goal).unwrap();

    assert!(!path.is_empty());
    assert_valid_path(&grid, start, goal, &path);
    // 障礙物沒有擋住所有最短路徑
    assert_eq!(path.len(), manhattan_distance(start, goal));
}

#[test]
fn test_find_path_shortest_with_obstacles() {
    let test_data = [
        (
            r#"
S . . . .
X X X X .
G . . . .
            "#,
            10,
        ),
        (
            r#"
S . X . G
. . X . .
. . . . .
            "#,
            8,
        ),
        (
            r#"
S . $ . G
. . . . .
            "#,
            6,
        ),
        (
            r#"
. . . . .
. X X X .
. X G X .
. . . X S
            "#,
            13,
        ),
    ];

    for (idx, (ascii, expected_len)) in test_data.iter().enumerate() {
        let (arena, markers) = load_from_ascii(ascii).unwrap();
        let start = markers["S"][0];
        let goal = markers["G"][0];
        let path = find_path(&arena.grid, start, goal).unwrap();
        assert_eq!(path.len(), *expected_len, "Case {}: {:?}", idx, path);
        assert_valid_path(&arena.grid, start, goal, &path);
    }
}

#[test]
fn test_find_path_unreachable() {
    let test_data = [
        // 目標四面被障礙物包圍
        r#"
S . . . .
. . X . .
. X G X .
. . X . .
        "#,
        // 牆把棋盤切成兩半
        r#"
S . X . .
. . X . G
. . X . .
        "#,
        // 唯一通道上是棋盤目標格
        r#"
S X . . .
. $ X . G
X . . . .
        "#,
    ];

    for (idx, ascii) in test_data.iter().enumerate() {
        let (arena, markers) = load_from_ascii(ascii).unwrap();
        let result = find_path(&arena.grid, markers["S"][0], markers["G"][0]);
        assert_eq!(result, None, "Case {}", idx);
    }
}

#[test]
fn test_find_path_to_enclosed_board_goal() {
    let ascii = r#"
S . . . .
. . X . .
. X $ X .
. . X . .
    "#;
    let (arena, markers) = load_from_ascii(ascii).unwrap();
    assert_eq!(find_path(&arena.grid, markers["S"][0], markers["$"][0]), None);
}

#[test]
fn test_find_path_board_goal_as_final_hop() {
    let ascii = r#"
S . .
X X .
$ . .
    "#;
    let (arena, markers) = load_from_ascii(ascii).unwrap();
    let start = markers["S"][0];
    let goal = markers["$"][0];
    let path = find_path(&arena.grid, start, goal).unwrap();
    assert_eq!(path.len(), 6);
    assert_valid_path(&arena.grid, start, goal, &path);
}

#[test]
fn test_find_path_deterministic() {
    let ascii = r#"
S . . . . .
. . X . . .
. . . . X .
. X . . . .
. . . . . G
    "#;
    let (arena, markers) = load_from_ascii(ascii).unwrap();
    let start = markers["S"][0];
    let goal = markers["G"][0];
    let first = find_path(&arena.grid, start, goal).unwrap();
    assert_eq!(first.len(), manhattan_distance(start, goal));
    for _ in 0..20 {
        assert_eq!(find_path(&arena.grid, start, goal).unwrap(), first);
    }
}
