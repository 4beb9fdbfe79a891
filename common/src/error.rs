//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Keyword column not found: {0}")]
    MissingColumn(String),

    #[error("Keyword header row not found (skipped {0} rows)")]
    MissingHeader(usize),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
