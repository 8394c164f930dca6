//! 錯誤處理系統
//!
//! 所有錯誤皆可由呼叫端恢復（拒絕移動、重新輸入），核心不會 panic。
//! 找不到路徑與追擊中止不是錯誤，分別以 `None` 與 `Advance::Halted` 表示。

use crate::alias::Coord;
use crate::component::Role;
use crate::logic::movement::Direction;
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 頂層錯誤，包含原始錯誤和 context 鏈
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    contexts: Vec<String>,
}

/// 錯誤種類
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Movement(#[from] MovementError),
}

/// 棋盤錯誤
#[derive(Debug, ThisError)]
pub enum BoardError {
    #[error("位置超出棋盤邊界: ({x}, {y}) 邊界 ({width}, {height})")]
    OutOfBounds {
        x: Coord,
        y: Coord,
        width: Coord,
        height: Coord,
    },
    #[error("位置 ({x}, {y}) 是障礙物")]
    Blocked { x: Coord, y: Coord },
    #[error("目標不可設在障礙物上: ({x}, {y})")]
    GoalOnObstacle { x: Coord, y: Coord },
    #[error("障礙物不可放在目標上: ({x}, {y})")]
    ObstacleOnGoal { x: Coord, y: Coord },
    #[error("{role} 尚未放上棋盤")]
    AgentNotPlaced { role: Role },
}

/// 格式載入錯誤
#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("解析失敗: {0}")]
    ParseError(String),
    #[error("{format} 反序列化失敗: {reason}")]
    DeserializeError { format: String, reason: String },
    #[error("場景 {scenario} 設定錯誤")]
    InvalidScenario { scenario: String },
}

/// 移動相關錯誤
#[derive(Debug, ThisError)]
pub enum MovementError {
    #[error("未知方向: {0}（可用 up/down/left/right）")]
    UnknownDirection(String),
    #[error("從 ({x}, {y}) 往 {direction} 會超出棋盤邊界")]
    OutOfBounds {
        x: Coord,
        y: Coord,
        direction: Direction,
    },
    #[error("從 ({x}, {y}) 往 {direction} 是障礙物")]
    Blocked {
        x: Coord,
        y: Coord,
        direction: Direction,
    },
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 添加錯誤上下文，自動記錄呼叫位置
    #[track_caller]
    pub fn context<C: Into<String>>(mut self, context: C) -> Self {
        let loc = std::panic::Location::caller();
        let msg = format!("{} [{}:{}]", context.into(), loc.file(), loc.line());
        self.contexts.push(msg);
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for ctx in &self.contexts {
            write!(f, "\n  {}", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(error: E) -> Self {
        Self {
            kind: error.into(),
            contexts: Vec::new(),
        }
    }
}

/// Result 擴展 trait，用於添加錯誤上下文
pub trait Context<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    #[track_caller]
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        // map_err 的閉包會吃掉 track_caller，所以手動展開
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e.context(context)),
        }
    }
}
