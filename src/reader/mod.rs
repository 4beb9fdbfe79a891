//! 文書読み込みモジュール
//!
//! - テキスト: バイト列を読み込み、UTF-8として寛容にデコード
//! - スプレッドシート: 全シートをテキスト化（calamine）
//! - パス長超過・未検出時はスクラッチディレクトリへの退避コピーで1回だけ再試行

pub mod long_path;
pub mod spreadsheet;

pub use long_path::{extended_length_form, ScratchDir};

use geomech_common::Sentinel;
use std::io;
use std::path::Path;
use thiserror::Error;

/// ファイル単位のエラー種別（レポートのエラー行になる）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileErrorKind {
    /// 形式として読めない・破損
    NotReadable,
    /// 数式の解析失敗
    FormulaError,
    /// パス長超過
    PathTooLong,
    /// ファイルが見つからない
    NotFound,
    /// 上記以外の読み込み失敗（権限なし・ディレクトリ等）
    Unreadable,
}

impl FileErrorKind {
    pub fn sentinel(&self) -> Sentinel {
        match self {
            FileErrorKind::NotReadable => Sentinel::FileNotSupported,
            FileErrorKind::FormulaError => Sentinel::FormulaError,
            FileErrorKind::PathTooLong => Sentinel::PathTooLong,
            FileErrorKind::NotFound => Sentinel::FileNotFound,
            FileErrorKind::Unreadable => Sentinel::ReadError,
        }
    }

    /// 退避コピーでの再試行対象か
    fn is_retryable(&self) -> bool {
        matches!(self, FileErrorKind::PathTooLong | FileErrorKind::NotFound)
    }
}

impl std::fmt::Display for FileErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sentinel().label())
    }
}

/// ファイル単位のエラー（レポートではエラー行として記録し、実行は継続）
#[derive(Error, Debug)]
#[error("{kind}: {detail}")]
pub struct FileError {
    pub kind: FileErrorKind,
    pub detail: String,
}

impl FileError {
    pub fn new(kind: FileErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

/// IOエラーを分類
pub fn classify_io(err: io::Error) -> FileError {
    if err.kind() == io::ErrorKind::NotFound {
        FileError::new(FileErrorKind::NotFound, err.to_string())
    } else if is_name_too_long(&err) {
        FileError::new(FileErrorKind::PathTooLong, err.to_string())
    } else {
        FileError::new(FileErrorKind::Unreadable, format!("{:?}: {}", err.kind(), err))
    }
}

#[cfg(windows)]
const NAME_TOO_LONG_CODES: &[i32] = &[206]; // ERROR_FILENAME_EXCED_RANGE
#[cfg(target_os = "linux")]
const NAME_TOO_LONG_CODES: &[i32] = &[36]; // ENAMETOOLONG
#[cfg(all(unix, not(target_os = "linux")))]
const NAME_TOO_LONG_CODES: &[i32] = &[63]; // ENAMETOOLONG (BSD系)
#[cfg(not(any(unix, windows)))]
const NAME_TOO_LONG_CODES: &[i32] = &[];

fn is_name_too_long(err: &io::Error) -> bool {
    err.raw_os_error()
        .is_some_and(|code| NAME_TOO_LONG_CODES.contains(&code))
}

/// 読み込み方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Text,
    Spreadsheet,
}

/// 読み込んだ文書
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Text(String),
    /// シートごとのテキスト（シート順）
    Sheets(Vec<String>),
}

/// 文書を読み込む（パス長超過・未検出時は1回だけ退避コピーで再試行）
///
/// # Arguments
/// * `path` - 対象ファイル
/// * `kind` - 読み込み方法
/// * `index` - 退避コピーの名前空間（並列時の衝突回避）
/// * `scratch` - 退避先
pub fn read_document(
    path: &Path,
    kind: DocumentKind,
    index: usize,
    scratch: &ScratchDir,
) -> Result<Document, FileError> {
    match read_once(path, kind) {
        Err(err) if err.is_retryable() => {
            log::debug!("再試行（退避コピー）: {} ({})", path.display(), err);
            let copy = scratch.copy_aside(index, path).map_err(classify_io)?;
            read_once(&copy, kind)
        }
        result => result,
    }
}

fn read_once(path: &Path, kind: DocumentKind) -> Result<Document, FileError> {
    match kind {
        DocumentKind::Text => read_text(path).map(Document::Text),
        DocumentKind::Spreadsheet => spreadsheet::read_sheets(path).map(Document::Sheets),
    }
}

/// テキストファイルを読み込み（不正なUTF-8は置換文字に）
pub fn read_text(path: &Path) -> Result<String, FileError> {
    let bytes = std::fs::read(path).map_err(classify_io)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
