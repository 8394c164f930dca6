//! 命令列參數與關卡檔載入

use anyhow::{Context, Result, bail};
use clap::Parser;
use pursuit_board::loader::{builtin_scenarios, load_scenarios};
use pursuit_board::loader_schema::ScenarioConfig;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "chase", version, about = "棋盤追逐遊戲：避開追擊者並抵達目標")]
pub struct Args {
    /// 關卡檔（TOML `[[scenarios]]`），未指定時使用內建的三個關卡
    #[arg(long, env = "CHASE_SCENARIOS")]
    pub scenarios: Option<PathBuf>,

    /// 追擊者移動前的延遲（毫秒）
    #[arg(long, env = "CHASE_STEP_DELAY_MS", default_value_t = 0)]
    pub step_delay_ms: u64,

    /// tracing 過濾條件，例如 `pursuit_board=debug`
    #[arg(long, env = "RUST_LOG", default_value = crate::constants::DEFAULT_LOG_FILTER)]
    pub log: String,
}

/// 讀取關卡列表：指定檔案或內建關卡
pub fn load_scenario_set(path: Option<&Path>) -> Result<Vec<ScenarioConfig>> {
    let scenarios = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("讀取關卡檔 {}", path.display()))?;
            load_scenarios(&content).with_context(|| format!("解析關卡檔 {}", path.display()))?
        }
        None => builtin_scenarios()?,
    };

    if scenarios.is_empty() {
        bail!("關卡檔中沒有任何關卡");
    }
    Ok(scenarios)
}
