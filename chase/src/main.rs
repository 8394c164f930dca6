mod config;
mod constants;
mod game;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Args, load_scenario_set};
use constants::{APP_TITLE, DEFAULT_LOG_FILTER};
use game::{GameEnd, Scoreboard, Session, outcome_message};
use pursuit_board::loader::build_arena;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_tracing(&args.log);

    let scenarios = load_scenario_set(args.scenarios.as_deref())?;
    tracing::info!(count = scenarios.len(), "scenarios loaded");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(
        stdin.lock(),
        stdout.lock(),
        Duration::from_millis(args.step_delay_ms),
    );
    let mut score = Scoreboard::default();

    session.say(&format!("{APP_TITLE}：開始！"))?;
    for config in &scenarios {
        let mut arena =
            build_arena(config).with_context(|| format!("無法建立關卡 {}", config.name))?;
        session.say(&format!("== 關卡 {} ==", config.name))?;

        match session.play(&mut arena)? {
            GameEnd::Finished(outcome) => {
                score.record(outcome);
                session.say(outcome_message(outcome))?;
                session.say(&format!(
                    "玩家: {} 追擊者: {}",
                    score.player, score.pursuer
                ))?;
            }
            GameEnd::InputClosed => {
                tracing::info!(scenario = %config.name, "input closed");
                break;
            }
        }
    }

    Ok(())
}

fn setup_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
