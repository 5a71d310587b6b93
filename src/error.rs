use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeibaSignError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("シートURLが設定されていません。`keiba-sign config --set-sheet-url URL` で設定してください")]
    MissingSheetUrl,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("シート取得エラー: {0}")]
    SheetFetch(String),

    #[error("CSV解析エラー: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KeibaSignError>;
