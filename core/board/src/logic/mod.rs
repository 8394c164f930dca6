//! 核心業務邏輯

pub mod board;
pub mod encounter;
pub mod movement;
pub mod pathfinding;
pub mod turn;
