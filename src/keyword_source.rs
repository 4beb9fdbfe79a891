//! キーワードファイルの読み込み
//!
//! スプレッドシート（先頭シート）またはCSVから `KeywordStore` を構築する。

use crate::error::{ClassifierError, Result};
use crate::reader::spreadsheet::{open_ranges, range_rows};
use geomech_common::KeywordStore;
use std::path::Path;

/// キーワードファイルを読み込む
///
/// # Arguments
/// * `path` - xlsx/xls/ods/csv
/// * `skip_rows` - ヘッダー前の読み飛ばし行数
pub fn load_keywords(path: &Path, skip_rows: usize) -> Result<KeywordStore> {
    if !path.exists() {
        return Err(ClassifierError::FileNotFound(path.display().to_string()));
    }

    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let store = if is_csv {
        let content = std::fs::read_to_string(path)?;
        KeywordStore::from_csv_str(&content, skip_rows)?
    } else {
        let ranges = open_ranges(path).map_err(|e| ClassifierError::Spreadsheet(e.to_string()))?;
        let (_, range) = ranges
            .first()
            .ok_or_else(|| ClassifierError::Spreadsheet("シートがありません".into()))?;
        KeywordStore::from_rows(&range_rows(range), skip_rows)?
    };

    log::info!("キーワード読み込み: {} ({}件)", path.display(), store.len());
    Ok(store)
}
