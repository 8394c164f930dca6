//! 基本資料類型定義

use crate::alias::Coord;
use crate::component::{Agent, Position, Role};
use crate::constants::DIRECTIONS;
use crate::error::{BoardError, Result};
use crate::logic::encounter::{Outcome, evaluate};
use crate::logic::movement::step_in_direction;
use std::collections::HashSet;

/// 固定尺寸的棋盤：障礙物集合與唯一的目標格
///
/// 不變式：目標格永遠不在障礙物集合中。
/// 遊戲開始後只會被讀取，不會被修改。
#[derive(Debug, Clone)]
pub struct Grid {
    width: Coord,
    height: Coord,
    obstacles: HashSet<Position>,
    goal: Option<Position>,
}

impl Grid {
    pub fn new(width: Coord, height: Coord) -> Self {
        Self {
            width,
            height,
            obstacles: HashSet::new(),
            goal: None,
        }
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn goal(&self) -> Option<Position> {
        self.goal
    }

    /// 所有障礙物（依座標排序）
    pub fn obstacles(&self) -> Vec<Position> {
        let mut obstacles: Vec<Position> = self.obstacles.iter().copied().collect();
        obstacles.sort();
        obstacles
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn is_blocked(&self, pos: Position) -> bool {
        self.obstacles.contains(&pos)
    }

    pub fn is_goal(&self, pos: Position) -> bool {
        self.goal == Some(pos)
    }

    /// 上下左右四個相鄰格中，在棋盤內、非障礙物、非目標格者
    ///
    /// 順序固定為上、下、左、右。目標格刻意排除：
    /// 一般的圖擴展不能「穿過」目標格，目標只能是搜尋的終點。
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        DIRECTIONS
            .iter()
            .filter_map(|&direction| step_in_direction(self, pos, direction))
            .filter(|&next| !self.is_blocked(next) && !self.is_goal(next))
            .collect()
    }

    /// 設定目標格（取代舊的目標），僅限佈置階段使用
    pub fn set_goal(&mut self, pos: Position) -> Result<()> {
        self.check_bounds(pos)?;
        if self.is_blocked(pos) {
            return Err(BoardError::GoalOnObstacle { x: pos.x, y: pos.y }.into());
        }
        self.goal = Some(pos);
        Ok(())
    }

    /// 加入障礙物，僅限佈置階段使用；重複加入同一格不會報錯
    pub fn add_obstacle(&mut self, pos: Position) -> Result<()> {
        self.check_bounds(pos)?;
        if self.is_goal(pos) {
            return Err(BoardError::ObstacleOnGoal { x: pos.x, y: pos.y }.into());
        }
        self.obstacles.insert(pos);
        Ok(())
    }

    pub(crate) fn check_bounds(&self, pos: Position) -> Result<()> {
        if self.in_bounds(pos) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            }
            .into())
        }
    }
}

/// 一局遊戲的棋盤與兩位代理人
///
/// 格子不記錄「誰站在上面」，佔據狀態一律由代理人位置推導。
#[derive(Debug, Clone)]
pub struct Arena {
    pub grid: Grid,
    pub player: Agent,
    pub pursuer: Agent,
}

impl Arena {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            player: Agent::new(Role::Player),
            pursuer: Agent::new(Role::Pursuer),
        }
    }

    pub fn agent(&self, role: Role) -> &Agent {
        match role {
            Role::Player => &self.player,
            Role::Pursuer => &self.pursuer,
        }
    }

    pub fn agent_mut(&mut self, role: Role) -> &mut Agent {
        match role {
            Role::Player => &mut self.player,
            Role::Pursuer => &mut self.pursuer,
        }
    }

    pub fn position_of(&self, role: Role) -> Option<Position> {
        self.agent(role).pos
    }

    /// 放置（或重新放置）代理人，舊位置自動釋放
    pub fn place(&mut self, role: Role, pos: Position) -> Result<()> {
        self.grid.check_bounds(pos)?;
        if self.grid.is_blocked(pos) {
            return Err(BoardError::Blocked { x: pos.x, y: pos.y }.into());
        }
        let agent = self.agent_mut(role);
        tracing::debug!(%role, from = ?agent.pos, to = ?pos, "place agent");
        agent.pos = Some(pos);
        Ok(())
    }

    /// 查詢指定位置上的代理人
    pub fn occupants_at(&self, pos: Position) -> Vec<Role> {
        [&self.player, &self.pursuer]
            .into_iter()
            .filter(|agent| agent.pos == Some(pos))
            .map(|agent| agent.role)
            .collect()
    }

    /// 依目前位置判定勝負；任一代理人未放置時視為進行中
    pub fn outcome(&self) -> Outcome {
        let (Some(player), Some(pursuer)) = (self.player.pos, self.pursuer.pos) else {
            return Outcome::Ongoing;
        };
        match self.grid.goal() {
            Some(goal) => evaluate(player, pursuer, goal),
            None if player == pursuer => Outcome::PlayerCaught,
            None => Outcome::Ongoing,
        }
    }
}
