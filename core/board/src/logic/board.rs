//! 棋盤邏輯

use crate::alias::MovementCost;
use crate::component::Position;
use crate::core_types::Grid;

/// 驗證位置是否在棋盤邊界內
pub fn is_valid_position(grid: &Grid, pos: Position) -> bool {
    grid.in_bounds(pos)
}

/// 曼哈頓距離（四方向、每步成本 1 時的可採納啟發值）
pub fn manhattan_distance(from: Position, to: Position) -> MovementCost {
    from.x.abs_diff(to.x) + from.y.abs_diff(to.y)
}

/// 兩格是否上下左右相鄰
pub fn is_adjacent(a: Position, b: Position) -> bool {
    manhattan_distance(a, b) == 1
}
