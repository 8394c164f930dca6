//! 主控台回合迴圈：畫面、輸入、延遲與計分

use crate::constants::{DIRECTION_PROMPT, INVALID_MOVE_MESSAGE};
use crate::render::{format_path, render_board};
use anyhow::Result;
use pursuit_board::core_types::Arena;
use pursuit_board::error::ErrorKind;
use pursuit_board::logic::encounter::Outcome;
use pursuit_board::logic::movement::{Advance, Direction};
use pursuit_board::logic::turn::{player_turn, pursuer_turn};
use std::io::{BufRead, Write};
use std::time::Duration;

/// 跨關卡的勝負統計
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    pub player: u32,
    pub pursuer: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWon => self.player += 1,
            Outcome::PlayerCaught => self.pursuer += 1,
            Outcome::Ongoing => {}
        }
    }
}

/// 單局遊戲的結束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Finished(Outcome),
    /// 輸入結束（EOF），遊戲中止
    InputClosed,
}

/// 綁定輸入輸出的遊戲階段
pub struct Session<R, W> {
    input: R,
    output: W,
    step_delay: Duration,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, step_delay: Duration) -> Self {
        Self {
            input,
            output,
            step_delay,
        }
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// 進行一局直到分出勝負或輸入結束
    pub fn play(&mut self, arena: &mut Arena) -> Result<GameEnd> {
        loop {
            write!(self.output, "{}", render_board(arena))?;

            let Some(direction) = self.prompt_direction()? else {
                return Ok(GameEnd::InputClosed);
            };

            match player_turn(arena, direction) {
                Ok(outcome) if outcome.is_over() => return Ok(GameEnd::Finished(outcome)),
                Ok(_) => {}
                Err(err) if matches!(err.kind(), ErrorKind::Movement(_)) => {
                    tracing::debug!(%err, "player move rejected");
                    self.say(INVALID_MOVE_MESSAGE)?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            }

            if !self.step_delay.is_zero() {
                std::thread::sleep(self.step_delay);
            }

            let turn = pursuer_turn(arena)?;
            match &turn.path {
                Some(path) => self.say(&format!("追擊者路徑: {}", format_path(path)))?,
                None => self.say("追擊者追不到你！")?,
            }
            if let Some(Advance::Halted { next, reason, .. }) = turn.advance {
                self.say(&format!(
                    "追擊者停在原地（({}, {}) 不可進入: {}）",
                    next.x, next.y, reason
                ))?;
            }

            if turn.outcome.is_over() {
                return Ok(GameEnd::Finished(turn.outcome));
            }
        }
    }

    // 讀到合法方向為止；EOF 回傳 None
    fn prompt_direction(&mut self) -> Result<Option<Direction>> {
        loop {
            write!(self.output, "{DIRECTION_PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match Direction::parse(&line) {
                Ok(direction) => return Ok(Some(direction)),
                Err(err) => self.say(&err.to_string())?,
            }
        }
    }
}

/// 結束訊息
pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWon => "你贏了！",
        Outcome::PlayerCaught => "你輸了！",
        Outcome::Ongoing => "遊戲進行中",
    }
}
