use pursuit_board::error::{Context, Error, LoadError, Result};

// clear; cargo fmt; cargo test -- --nocapture
#[test]
fn show_error_messages() {
    let scene_err = LoadError::ParseError("Invalid symbol".to_string());
    let err: Error = scene_err.into();
    let err = err
        .context("解析行：5")
        .context("處理棋盤配置")
        .context("載入關卡檔案");

    let error_str = err.to_string();

    // 驗證原始錯誤訊息
    assert!(error_str.contains("Invalid symbol"));

    // 驗證 contexts 存在且附上呼叫位置
    assert!(error_str.contains("解析行：5 ["));
    assert!(error_str.contains("處理棋盤配置 ["));
    assert!(error_str.contains("載入關卡檔案 ["));
    assert!(error_str.contains("test_error.rs:9]"));
    assert!(error_str.contains("test_error.rs:10]"));
    assert!(error_str.contains("test_error.rs:11]"));
}

#[test]
fn result_context_records_caller() {
    fn fails() -> Result<()> {
        Err(LoadError::ParseError("bad".to_string()).into())
    }

    let err = fails().context("外層").unwrap_err();
    let error_str = err.to_string();
    assert!(error_str.starts_with("解析失敗: bad"));
    assert!(error_str.contains("外層 ["));
    assert!(error_str.contains("test_error.rs:"));
}
