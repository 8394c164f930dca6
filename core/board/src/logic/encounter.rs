//! 勝負判定

use crate::component::Position;
use strum_macros::Display;

/// 一回合（半回合）結束後的局面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Outcome {
    /// 遊戲繼續
    Ongoing,
    /// 玩家被追擊者抓到
    PlayerCaught,
    /// 玩家抵達目標
    PlayerWon,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// 依位置判定勝負
///
/// 判定順序：先判斷是否被抓，再判斷是否抵達目標。
/// 玩家移動後與追擊者移動後各判定一次，不會同時出現兩種結果。
pub fn evaluate(player: Position, pursuer: Position, goal: Position) -> Outcome {
    if player == pursuer {
        Outcome::PlayerCaught
    } else if player == goal {
        Outcome::PlayerWon
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_precedence() {
        let a = Position { x: 0, y: 0 };
        let b = Position { x: 1, y: 0 };
        let c = Position { x: 2, y: 0 };
        let test_data = [
            // (player, pursuer, goal, expected)
            (a, a, c, Outcome::PlayerCaught),
            // 同時在目標格上也算被抓
            (a, a, a, Outcome::PlayerCaught),
            (c, a, c, Outcome::PlayerWon),
            (a, b, c, Outcome::Ongoing),
            (b, c, c, Outcome::Ongoing),
        ];
        for (idx, (player, pursuer, goal, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(evaluate(player, pursuer, goal), expected, "Case {}", idx);
        }
    }

    #[test]
    fn test_is_over() {
        assert!(!Outcome::Ongoing.is_over());
        assert!(Outcome::PlayerCaught.is_over());
        assert!(Outcome::PlayerWon.is_over());
    }
}
