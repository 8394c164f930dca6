//! 移動邏輯
//!
//! - 玩家：單步移動，檢查邊界與障礙物（可以踏上目標格）
//! - 追擊者：沿預先算好的路徑逐格前進，每一步都重新檢查棋盤狀態

use crate::component::{Agent, Position};
use crate::core_types::Grid;
use crate::error::{BoardError, MovementError, Result};
use crate::logic::board::{is_adjacent, is_valid_position};
use strum_macros::{Display, EnumIter, EnumString};

/// 移動方向（四方向）
///
/// 上 = y - 1，下 = y + 1，左 = x - 1，右 = x + 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// 解析玩家輸入（"up"/"down"/"left"/"right"，不分大小寫，忽略前後空白）
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        input
            .parse()
            .map_err(|_| MovementError::UnknownDirection(input.to_string()).into())
    }
}

/// 計算從當前位置往指定方向移動一格後的位置，檢查棋盤邊界
///
/// 返回 `None` 當新位置超出棋盤邊界
pub fn step_in_direction(grid: &Grid, pos: Position, direction: Direction) -> Option<Position> {
    let new_pos = match direction {
        Direction::Up => {
            if pos.y == 0 {
                return None;
            }
            Position {
                x: pos.x,
                y: pos.y - 1,
            }
        }
        Direction::Down => Position {
            x: pos.x,
            y: pos.y + 1,
        },
        Direction::Left => {
            if pos.x == 0 {
                return None;
            }
            Position {
                x: pos.x - 1,
                y: pos.y,
            }
        }
        Direction::Right => Position {
            x: pos.x + 1,
            y: pos.y,
        },
    };

    if is_valid_position(grid, new_pos) {
        Some(new_pos)
    } else {
        None
    }
}

/// 玩家往指定方向走一格
///
/// 成功時更新代理人位置並回傳新位置；
/// 超出邊界或撞上障礙物時回傳錯誤，代理人位置不變，由呼叫端決定是否重新輸入。
pub fn move_player(grid: &Grid, agent: &mut Agent, direction: Direction) -> Result<Position> {
    let Some(from) = agent.pos else {
        return Err(BoardError::AgentNotPlaced { role: agent.role }.into());
    };

    let Some(to) = step_in_direction(grid, from, direction) else {
        tracing::debug!(?from, %direction, "player move rejected: out of bounds");
        return Err(MovementError::OutOfBounds {
            x: from.x,
            y: from.y,
            direction,
        }
        .into());
    };

    if grid.is_blocked(to) {
        tracing::debug!(?from, %direction, "player move rejected: blocked");
        return Err(MovementError::Blocked {
            x: from.x,
            y: from.y,
            direction,
        }
        .into());
    }

    agent.pos = Some(to);
    tracing::debug!(?from, ?to, %direction, "player moved");
    Ok(to)
}

/// 追擊者停下的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HaltReason {
    /// 下一格是障礙物
    Blocked,
    /// 下一格是目標格（追擊者不得踏上）
    Goal,
    /// 下一格在棋盤外
    OutOfBounds,
    /// 下一格與目前位置不相鄰
    NotAdjacent,
}

/// 追擊者前進的結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// 走完可走的步數，停在此位置
    Moved(Position),
    /// 路徑上的下一格不可進入，停在 `at`
    Halted {
        at: Position,
        next: Position,
        reason: HaltReason,
    },
}

impl Advance {
    /// 追擊者目前所在位置
    pub fn position(&self) -> Position {
        match *self {
            Advance::Moved(pos) => pos,
            Advance::Halted { at, .. } => at,
        }
    }
}

/// 追擊者沿整條路徑前進
pub fn advance_pursuer(grid: &Grid, agent: &mut Agent, path: &[Position]) -> Result<Advance> {
    advance_pursuer_by(grid, agent, path, path.len())
}

/// 追擊者沿路徑最多前進 `max_steps` 步
///
/// 每一步前都以「目前」的棋盤狀態檢查下一格，遇到障礙物或目標格立即停下，
/// 不會踏上該格。剩餘的路徑直接捨棄，不保留到下一回合。
/// 本函式不會阻塞，逐步播放的延遲由呼叫端負責。
pub fn advance_pursuer_by(
    grid: &Grid,
    agent: &mut Agent,
    path: &[Position],
    max_steps: usize,
) -> Result<Advance> {
    let Some(mut current) = agent.pos else {
        return Err(BoardError::AgentNotPlaced { role: agent.role }.into());
    };

    for &next in path.iter().take(max_steps) {
        if let Some(reason) = halt_reason(grid, current, next) {
            tracing::debug!(at = ?current, ?next, %reason, "pursuer halted");
            return Ok(Advance::Halted {
                at: current,
                next,
                reason,
            });
        }
        current = next;
        agent.pos = Some(current);
        tracing::debug!(to = ?current, "pursuer stepped");
    }

    Ok(Advance::Moved(current))
}

fn halt_reason(grid: &Grid, from: Position, next: Position) -> Option<HaltReason> {
    if !is_valid_position(grid, next) {
        Some(HaltReason::OutOfBounds)
    } else if grid.is_blocked(next) {
        Some(HaltReason::Blocked)
    } else if grid.is_goal(next) {
        Some(HaltReason::Goal)
    } else if !is_adjacent(from, next) {
        Some(HaltReason::NotAdjacent)
    } else {
        None
    }
}
