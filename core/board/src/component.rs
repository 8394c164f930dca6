//! 棋盤上的基本元件：座標、角色、代理人

use crate::alias::Coord;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// 棋盤位置（座標）
///
/// 排序先比 x 再比 y，路徑搜尋以此打破同分。
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub x: Coord,
    pub y: Coord,
}

/// 代理人角色（每種角色同時只有一位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Player,
    Pursuer,
}

/// 代理人：角色 + 目前位置
///
/// `pos` 為 `None` 表示尚未放上棋盤
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    pub role: Role,
    pub pos: Option<Position>,
}

impl Agent {
    pub fn new(role: Role) -> Self {
        Self { role, pos: None }
    }
}
