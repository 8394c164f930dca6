//! 遊戲常數定義

use crate::alias::MovementCost;
use crate::logic::movement::Direction;

/// 每一步的移動成本（不支援其他地形成本）
pub const STEP_COST: MovementCost = 1;

/// 相鄰格的固定展開順序，確保搜尋結果可重現
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// 內建的三個 7x7 關卡
pub const BUILTIN_SCENARIOS: &str = r#"
[[scenarios]]
name = "first"
width = 7
height = 7
player = { x = 0, y = 1 }
pursuer = { x = 6, y = 4 }
goal = { x = 4, y = 3 }
obstacles = [
    { x = 0, y = 4 },
    { x = 6, y = 6 },
    { x = 3, y = 3 },
    { x = 2, y = 5 },
    { x = 1, y = 2 },
    { x = 2, y = 2 },
]

[[scenarios]]
name = "again"
width = 7
height = 7
player = { x = 0, y = 0 }
pursuer = { x = 3, y = 4 }
goal = { x = 3, y = 3 }
obstacles = [
    { x = 0, y = 4 },
    { x = 6, y = 6 },
    { x = 5, y = 3 },
    { x = 6, y = 5 },
    { x = 1, y = 2 },
    { x = 4, y = 2 },
]

[[scenarios]]
name = "last"
width = 7
height = 7
player = { x = 1, y = 5 }
pursuer = { x = 5, y = 4 }
goal = { x = 6, y = 3 }
obstacles = [
    { x = 0, y = 2 },
    { x = 2, y = 6 },
    { x = 5, y = 3 },
    { x = 2, y = 6 },
    { x = 1, y = 2 },
    { x = 4, y = 4 },
]
"#;

/// 每回合追擊者沿路徑前進的步數
pub const PURSUER_STEPS_PER_ROUND: usize = 1;
