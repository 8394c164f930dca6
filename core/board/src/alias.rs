//! 型別別名

/// 棋盤座標
pub type Coord = usize;

/// 移動成本（每步固定為 1）
pub type MovementCost = usize;
