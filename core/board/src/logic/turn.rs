//! 回合流程
//!
//! 一回合 = 玩家移動 → 判定 → 追擊者重新規劃路徑 → 追擊者前進一步 → 判定。
//! 分數統計、畫面與輸入由呼叫端負責。

use crate::component::{Agent, Position};
use crate::constants::PURSUER_STEPS_PER_ROUND;
use crate::core_types::Arena;
use crate::error::{BoardError, Result};
use crate::logic::encounter::Outcome;
use crate::logic::movement::{Advance, Direction, advance_pursuer_by, move_player};
use crate::logic::pathfinding::{Path, find_path};

/// 追擊者半回合的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PursuerTurn {
    /// 本回合算出的完整路徑（`None` 表示追不到玩家）
    pub path: Option<Path>,
    /// 實際前進的結果；追不到玩家時不會移動
    pub advance: Option<Advance>,
    pub outcome: Outcome,
}

/// 玩家半回合：移動後立即判定（與追擊者的「舊」位置比較）
///
/// 移動被拒絕時回傳錯誤，呼叫端可重新詢問方向。
pub fn player_turn(arena: &mut Arena, direction: Direction) -> Result<Outcome> {
    move_player(&arena.grid, &mut arena.player, direction)?;
    Ok(arena.outcome())
}

/// 追擊者半回合：重新規劃到玩家目前位置的路徑，前進一步後判定
///
/// 找不到路徑時判玩家獲勝，追擊者不移動。
/// 路徑為空（已與玩家同格）時追擊者也不移動，直接判定（被抓）。
pub fn pursuer_turn(arena: &mut Arena) -> Result<PursuerTurn> {
    let target = placed(&arena.player)?;
    let from = placed(&arena.pursuer)?;

    let path = find_path(&arena.grid, from, target);
    let steps = match &path {
        None => {
            tracing::info!(?from, ?target, "pursuer cannot reach player");
            return Ok(PursuerTurn {
                path,
                advance: None,
                outcome: Outcome::PlayerWon,
            });
        }
        Some(steps) if steps.is_empty() => {
            return Ok(PursuerTurn {
                path,
                advance: None,
                outcome: arena.outcome(),
            });
        }
        Some(steps) => steps,
    };

    let advance = advance_pursuer_by(
        &arena.grid,
        &mut arena.pursuer,
        steps,
        PURSUER_STEPS_PER_ROUND,
    )?;
    Ok(PursuerTurn {
        advance: Some(advance),
        outcome: arena.outcome(),
        path,
    })
}

fn placed(agent: &Agent) -> Result<Position> {
    agent.pos.ok_or_else(|| {
        BoardError::AgentNotPlaced {
            role: agent.role,
        }
        .into()
    })
}
