//! A* 路徑搜尋
//!
//! 四方向、每步成本固定，啟發函式為曼哈頓距離（可採納且一致，結果必為最短路徑）。
//! 同分時依 (f, 座標) 排序，相同輸入保證得到相同路徑。

use crate::alias::MovementCost;
use crate::component::Position;
use crate::constants::STEP_COST;
use crate::core_types::Grid;
use crate::logic::board::{is_adjacent, manhattan_distance};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// 路徑：不含起點、含終點，相鄰兩格恰差一步
pub type Path = Vec<Position>;

/// 計算 `start` 到 `goal` 的最短路徑
///
/// - 障礙物與棋盤目標格不可作為中途節點
/// - `goal` 只要與目前節點相鄰就可作為最後一步（即使它是棋盤目標格）
/// - `start == goal` 回傳空路徑
/// - 找不到路徑（或起訖點不合法）回傳 `None`
pub fn find_path(grid: &Grid, start: Position, goal: Position) -> Option<Path> {
    if !grid.in_bounds(start) || !grid.in_bounds(goal) || grid.is_blocked(goal) {
        tracing::debug!(?start, ?goal, "invalid search endpoints");
        return None;
    }

    let mut g_score: HashMap<Position, MovementCost> = HashMap::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut frontier: BinaryHeap<Reverse<(MovementCost, Position)>> = BinaryHeap::new();

    g_score.insert(start, 0);
    frontier.push(Reverse((manhattan_distance(start, goal), start)));

    while let Some(Reverse((f, current))) = frontier.pop() {
        if current == goal {
            let path = reconstruct_path(&came_from, start, goal);
            tracing::debug!(?start, ?goal, len = path.len(), "path found");
            return Some(path);
        }

        let Some(&g) = g_score.get(&current) else {
            continue;
        };
        // 跳過過時的隊列項（已有更優路徑）
        if f > g + manhattan_distance(current, goal) {
            continue;
        }

        for next in successors(grid, current, goal) {
            let candidate = g + STEP_COST;
            // 同分時保留先找到的路線
            if g_score.get(&next).is_some_and(|&known| known <= candidate) {
                continue;
            }
            tracing::trace!(?current, ?next, g = candidate, "relax");
            g_score.insert(next, candidate);
            came_from.insert(next, current);
            frontier.push(Reverse((candidate + manhattan_distance(next, goal), next)));
        }
    }

    tracing::debug!(?start, ?goal, "no path");
    None
}

// 一般相鄰格，再加上相鄰的搜尋終點（棋盤目標格不在一般相鄰格中）
fn successors(grid: &Grid, current: Position, goal: Position) -> Vec<Position> {
    let mut next = grid.neighbors(current);
    if is_adjacent(current, goal) && !next.contains(&goal) {
        next.push(goal);
    }
    next
}

fn reconstruct_path(
    came_from: &HashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Path {
    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        path.push(current);
        match came_from.get(&current) {
            Some(&prev) => current = prev,
            None => break,
        }
    }
    path.reverse();
    path
}
