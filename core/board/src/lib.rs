//! 追逐遊戲核心
//!
//! 固定尺寸棋盤上的回合制追逐：玩家避開障礙物前往目標格，
//! 追擊者每回合以 A* 重新規劃到玩家的最短路徑並前進一步。
//!
//! 本 crate 不處理畫面、輸入與計分，只提供同步、無阻塞的呼叫介面。

pub mod alias;
pub mod component;
pub mod constants;
pub mod core_types;
pub mod error;
pub mod loader;
pub mod loader_schema;
pub mod logic;
