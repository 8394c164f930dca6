//! Loader 相關的資料結構定義

use crate::alias::Coord;
use crate::component::Position;
use serde::{Deserialize, Serialize};

/// 單一關卡設定：棋盤尺寸、障礙物、起始位置與目標
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,
    pub width: Coord,
    pub height: Coord,
    pub player: Position,
    pub pursuer: Position,
    pub goal: Position,
    #[serde(default)]
    pub obstacles: Vec<Position>,
}

/// 關卡檔（TOML `[[scenarios]]` 陣列）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub scenarios: Vec<ScenarioConfig>,
}
