//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use keiba_sign::error::KeibaSignError;
use keiba_sign::{report, source};
use std::path::Path;

/// 存在しないCSVファイルを読み込んだ場合
#[test]
fn test_load_nonexistent_file() {
    let result = source::load_file(Path::new("/nonexistent/path/entries.csv"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, KeibaSignError::FileNotFound(_)));
}

/// 存在しない結果JSONを読み込んだ場合
#[test]
fn test_load_nonexistent_json() {
    let result = report::load_json(Path::new("/nonexistent/result.json"));
    assert!(matches!(result, Err(KeibaSignError::FileNotFound(_))));
}

/// KeibaSignErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        KeibaSignError::Config("テスト設定エラー".to_string()),
        KeibaSignError::MissingSheetUrl,
        KeibaSignError::FileNotFound("entries.csv".to_string()),
        KeibaSignError::SheetFetch("接続失敗".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingSheetUrlエラーのメッセージ確認
#[test]
fn test_missing_sheet_url_message() {
    let err = KeibaSignError::MissingSheetUrl;
    let display = format!("{}", err);

    assert!(display.contains("シートURL"));
    assert!(display.contains("keiba-sign config"));
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = KeibaSignError::Config("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: KeibaSignError = io_err.into();

    assert!(matches!(err, KeibaSignError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: KeibaSignError = json_err.into();

    assert!(matches!(err, KeibaSignError::JsonParse(_)));
}
