//! キーワードストア
//!
//! カテゴリごとに正規化済み・重複なしのキーワードリストを保持する。
//! 起動時に一度だけ構築し、以降は変更しない。

use crate::category::Category;
use crate::csv::parse_csv_line;
use crate::error::{Error, Result};
use crate::normalizer::normalize;
use std::collections::HashMap;

/// キーワードファイルのデフォルトの読み飛ばし行数（ヘッダー前の説明行）
pub const DEFAULT_SKIP_ROWS: usize = 3;

/// カテゴリ → キーワードリスト
#[derive(Debug, Clone, Default)]
pub struct KeywordStore {
    entries: HashMap<Category, Vec<String>>,
}

impl KeywordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// キーワードを追加
    ///
    /// 文書と同じ正規化（記号除去あり）を適用し、前後の空白を除去する。
    /// 空文字列・重複は追加しない。追加した場合は `true`。
    pub fn insert(&mut self, category: Category, raw: &str) -> bool {
        let keyword = normalize(raw, true).trim().to_string();
        if keyword.is_empty() {
            return false;
        }

        let list = self.entries.entry(category).or_default();
        if list.contains(&keyword) {
            return false;
        }
        list.push(keyword);
        true
    }

    /// カテゴリ別のリストから構築
    pub fn from_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (Category, Vec<S>)>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for (category, keywords) in columns {
            for keyword in keywords {
                store.insert(category, keyword.as_ref());
            }
        }
        store
    }

    /// 表形式データから構築
    ///
    /// 先頭 `skip_rows` 行を読み飛ばし、次の行をヘッダーとして
    /// `DCM` / `LOT` / `GEOMECH` / `WELLS` 列を探す（大文字小文字無視）。
    pub fn from_rows(rows: &[Vec<String>], skip_rows: usize) -> Result<Self> {
        let header = rows.get(skip_rows).ok_or(Error::MissingHeader(skip_rows))?;

        let mut columns = Vec::new();
        for category in Category::KEYWORD_CATEGORIES {
            let index = header
                .iter()
                .position(|cell| Category::from_column(cell) == Some(category))
                .ok_or_else(|| Error::MissingColumn(category.label().to_string()))?;
            columns.push((category, index));
        }

        let mut store = Self::new();
        // キーワード行がない場合もカテゴリは登録しておく
        for category in Category::KEYWORD_CATEGORIES {
            store.entries.entry(category).or_default();
        }

        for row in &rows[skip_rows + 1..] {
            for &(category, index) in &columns {
                if let Some(cell) = row.get(index) {
                    store.insert(category, cell);
                }
            }
        }

        Ok(store)
    }

    /// CSV文字列から構築
    pub fn from_csv_str(content: &str, skip_rows: usize) -> Result<Self> {
        let rows: Vec<Vec<String>> = content.lines().map(parse_csv_line).collect();
        Self::from_rows(&rows, skip_rows)
    }

    /// カテゴリのキーワード一覧（未登録なら空）
    pub fn keywords(&self, category: Category) -> &[String] {
        self.entries
            .get(&category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// 全カテゴリのキーワード総数
    pub fn len(&self) -> usize {
        self.entries.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_insert_normalizes_and_dedups() {
        let mut store = KeywordStore::new();
        assert!(store.insert(Category::Wells, "Well-Test"));
        assert!(!store.insert(Category::Wells, "well test"));
        assert!(!store.insert(Category::Wells, "  WELL   TEST "));
        assert!(store.insert(Category::Wells, "Wellbore"));
        assert_eq!(store.keywords(Category::Wells), &["well test", "wellbore"]);
    }

    #[test]
    fn test_insert_skips_empty() {
        let mut store = KeywordStore::new();
        assert!(!store.insert(Category::Lot, ""));
        assert!(!store.insert(Category::Lot, " - "));
        assert!(!store.insert(Category::Lot, "NaN"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_same_keyword_in_two_categories() {
        let store = KeywordStore::from_columns([
            (Category::Lot, vec!["leak off"]),
            (Category::Geomech, vec!["leak off"]),
        ]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let store = KeywordStore::new();
        assert!(store.keywords(Category::Dcm).is_empty());
    }

    #[test]
    fn test_from_rows_skips_leading_rows() {
        let rows = vec![
            row(&["Keyword parameters"]),
            row(&["rev 2"]),
            row(&[]),
            row(&["Dcm", "Lot", "Geomech", "Wells"]),
            row(&["drilling campaign", "leak-off test", "geomechanics", "wellbore"]),
            row(&["", "FIT", "pore pressure", ""]),
        ];

        let store = KeywordStore::from_rows(&rows, DEFAULT_SKIP_ROWS).unwrap();
        assert_eq!(store.keywords(Category::Dcm), &["drilling campaign"]);
        assert_eq!(store.keywords(Category::Lot), &["leak off test", "fit"]);
        assert_eq!(store.keywords(Category::Geomech), &["geomechanics", "pore pressure"]);
        assert_eq!(store.keywords(Category::Wells), &["wellbore"]);
    }

    #[test]
    fn test_from_rows_missing_column() {
        let rows = vec![row(&["DCM", "LOT", "GEOMECH"]), row(&["a1", "b1", "c1"])];
        let err = KeywordStore::from_rows(&rows, 0).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(ref c) if c == "WELLS"));
    }

    #[test]
    fn test_from_rows_missing_header() {
        let rows = vec![row(&["only"]), row(&["two"])];
        let err = KeywordStore::from_rows(&rows, 3).unwrap_err();
        assert!(matches!(err, Error::MissingHeader(3)));
    }

    #[test]
    fn test_from_csv_str() {
        let csv = "\
title,,,
,,,
,,,
WELLS,DCM,LOT,GEOMECH
\"well test, extended\",dcm plan,lot,stress
";
        let store = KeywordStore::from_csv_str(csv, 3).unwrap();
        assert_eq!(store.keywords(Category::Wells), &["well test extended"]);
        assert_eq!(store.keywords(Category::Dcm), &["dcm plan"]);
        assert_eq!(store.keywords(Category::Geomech), &["stress"]);
    }
}
