//! 主控台棋盤繪製

use pursuit_board::component::{Position, Role};
use pursuit_board::core_types::Arena;
use pursuit_board::loader::{
    EMPTY_SYMBOL, GOAL_SYMBOL, OBSTACLE_SYMBOL, PLAYER_SYMBOL, PURSUER_SYMBOL,
};

/// 把棋盤畫成一行一列的符號（優先序：目標 > 玩家 > 追擊者 > 障礙物）
pub fn render_board(arena: &Arena) -> String {
    let grid = &arena.grid;
    let mut out = String::new();
    for y in 0..grid.height() {
        let row: Vec<&str> = (0..grid.width())
            .map(|x| cell_symbol(arena, Position { x, y }))
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

fn cell_symbol(arena: &Arena, pos: Position) -> &'static str {
    let occupants = arena.occupants_at(pos);
    if arena.grid.is_goal(pos) {
        GOAL_SYMBOL
    } else if occupants.contains(&Role::Player) {
        PLAYER_SYMBOL
    } else if occupants.contains(&Role::Pursuer) {
        PURSUER_SYMBOL
    } else if arena.grid.is_blocked(pos) {
        OBSTACLE_SYMBOL
    } else {
        EMPTY_SYMBOL
    }
}

/// 路徑顯示為 `(x, y) -> (x, y) -> ...`
pub fn format_path(path: &[Position]) -> String {
    path.iter()
        .map(|pos| format!("({}, {})", pos.x, pos.y))
        .collect::<Vec<_>>()
        .join(" -> ")
}
