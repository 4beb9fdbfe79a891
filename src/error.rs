use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("棚卸しファイルが不正: {0}")]
    InventoryFormat(String),

    #[error("キーワードファイル読み込みエラー: {0}")]
    Spreadsheet(String),

    #[error("並列処理エラー: {0}")]
    ThreadPool(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] geomech_common::Error),
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
