pub const APP_TITLE: &str = "追逐遊戲";
pub const DIRECTION_PROMPT: &str = "輸入方向 (up/down/left/right): ";
pub const INVALID_MOVE_MESSAGE: &str = "方向無效或被擋住，請再試一次。";
pub const DEFAULT_LOG_FILTER: &str = "warn";
