//! 棋盤與關卡載入器

use crate::component::{Position, Role};
use crate::constants::BUILTIN_SCENARIOS;
use crate::core_types::{Arena, Grid};
use crate::error::{Context, LoadError, Result};
use crate::loader_schema::{ScenarioConfig, ScenarioFile};
use std::collections::HashMap;

/// 障礙物符號
pub const OBSTACLE_SYMBOL: &str = "X";
/// 目標符號
pub const GOAL_SYMBOL: &str = "$";
/// 玩家符號
pub const PLAYER_SYMBOL: &str = "P";
/// 追擊者符號
pub const PURSUER_SYMBOL: &str = "E";
/// 空格符號
pub const EMPTY_SYMBOL: &str = ".";

/// 從 TOML 字串解析關卡列表
pub fn load_scenarios(toml_str: &str) -> Result<Vec<ScenarioConfig>> {
    let file: ScenarioFile = toml::from_str(toml_str).map_err(|e| LoadError::DeserializeError {
        format: "TOML".to_string(),
        reason: e.to_string(),
    })?;
    Ok(file.scenarios)
}

/// 內建的關卡列表
pub fn builtin_scenarios() -> Result<Vec<ScenarioConfig>> {
    load_scenarios(BUILTIN_SCENARIOS).context("載入內建關卡")
}

/// 依關卡設定建立棋盤與代理人
///
/// 先放障礙物，再設定目標，最後放置玩家與追擊者；任何一步不合法都會回傳錯誤。
pub fn build_arena(config: &ScenarioConfig) -> Result<Arena> {
    let scenario = || format!("建立關卡 {}", config.name);

    if config.width == 0 || config.height == 0 {
        return Err(LoadError::InvalidScenario {
            scenario: config.name.clone(),
        }
        .into());
    }

    let mut grid = Grid::new(config.width, config.height);
    for &pos in &config.obstacles {
        grid.add_obstacle(pos).context(scenario())?;
    }
    grid.set_goal(config.goal).context(scenario())?;

    let mut arena = Arena::new(grid);
    arena.place(Role::Player, config.player).context(scenario())?;
    arena
        .place(Role::Pursuer, config.pursuer)
        .context(scenario())?;

    tracing::debug!(
        name = %config.name,
        width = config.width,
        height = config.height,
        obstacles = config.obstacles.len(),
        "arena built"
    );
    Ok(arena)
}

/// 從 ASCII 格式載入棋盤
///
/// ASCII 格式：每行用空格分隔的符號
/// - `.` = 空格
/// - `X` = 障礙物，`$` = 目標，`P` = 玩家，`E` = 追擊者（各最多一個，障礙物除外）
/// - 其他字符串（`S`、`G` 等）= 標記位置（視為空格）
/// - 所有非 `.` 的符號都會收集到標記映射
///
/// 返回：(棋盤, 標記映射)
///
/// 例如：
/// ```text
/// P . X
/// . X $
/// . . E
/// ```
pub fn load_from_ascii(ascii: &str) -> Result<(Arena, HashMap<String, Vec<Position>>)> {
    let lines: Vec<&str> = ascii
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(LoadError::ParseError("棋盤為空".to_string()).into());
    }

    // 推導寬度（第一行的符號數）
    let width = lines[0].split_whitespace().count();
    let height = lines.len();

    let mut markers: HashMap<String, Vec<Position>> = HashMap::new();
    for (y, line) in lines.iter().enumerate() {
        let cells: Vec<&str> = line.split_whitespace().collect();
        if cells.len() != width {
            return Err(LoadError::ParseError(format!(
                "第 {} 行有 {} 格，應為 {} 格",
                y,
                cells.len(),
                width
            ))
            .into());
        }
        for (x, cell) in cells.into_iter().enumerate() {
            // 非 `.` 的符號記為標記
            if cell != EMPTY_SYMBOL {
                markers
                    .entry(cell.to_string())
                    .or_insert_with(Vec::new)
                    .push(Position { x, y });
            }
        }
    }

    for symbol in [GOAL_SYMBOL, PLAYER_SYMBOL, PURSUER_SYMBOL] {
        if markers.get(symbol).is_some_and(|positions| positions.len() > 1) {
            return Err(LoadError::ParseError(format!("符號 {} 只能出現一次", symbol)).into());
        }
    }

    let mut grid = Grid::new(width, height);
    for &pos in markers.get(OBSTACLE_SYMBOL).into_iter().flatten() {
        grid.add_obstacle(pos)?;
    }
    if let Some(&goal) = markers.get(GOAL_SYMBOL).and_then(|p| p.first()) {
        grid.set_goal(goal)?;
    }

    let mut arena = Arena::new(grid);
    for (symbol, role) in [(PLAYER_SYMBOL, Role::Player), (PURSUER_SYMBOL, Role::Pursuer)] {
        if let Some(&pos) = markers.get(symbol).and_then(|p| p.first()) {
            arena.place(role, pos)?;
        }
    }

    Ok((arena, markers))
}
