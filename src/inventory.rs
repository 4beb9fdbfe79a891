//! 棚卸しCSVの読み込みと形式フィルタ

use crate::error::{ClassifierError, Result};
use geomech_common::csv::parse_csv_line;
use std::path::{Path, PathBuf};

/// 棚卸しの1件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEntry {
    pub name: String,
    pub format: String,
    pub path: PathBuf,
}

/// 棚卸し一覧（読み込み後は不変）
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    entries: Vec<InventoryEntry>,
}

impl Inventory {
    /// CSVファイルから読み込み
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ClassifierError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_csv_str(&content)
    }

    /// CSV文字列から読み込み
    ///
    /// `FORMAT` 列は必須。パスは `ABSPATH` 列を優先し、なければ `FILEPATH` 列を使う。
    pub fn from_csv_str(content: &str) -> Result<Self> {
        let mut lines = content.lines().filter(|l| !l.trim().is_empty());

        let header: Vec<String> = lines
            .next()
            .map(parse_csv_line)
            .ok_or_else(|| ClassifierError::InventoryFormat("ヘッダー行がありません".into()))?;
        let column = |name: &str| header.iter().position(|h| h.trim().eq_ignore_ascii_case(name));

        let format_idx = column("FORMAT")
            .ok_or_else(|| ClassifierError::InventoryFormat("FORMAT列がありません".into()))?;
        let path_idx = column("ABSPATH")
            .or_else(|| column("FILEPATH"))
            .ok_or_else(|| ClassifierError::InventoryFormat("ABSPATH/FILEPATH列がありません".into()))?;
        let name_idx = column("NAME");

        let mut entries = Vec::new();
        for (line_no, line) in lines.enumerate() {
            let fields = parse_csv_line(line);
            let (Some(format), Some(path)) = (fields.get(format_idx), fields.get(path_idx)) else {
                log::warn!("棚卸し{}行目: 列数不足のためスキップ", line_no + 2);
                continue;
            };

            let path = PathBuf::from(path.trim());
            let name = name_idx
                .and_then(|i| fields.get(i))
                .cloned()
                .unwrap_or_else(|| {
                    path.file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default()
                });

            entries.push(InventoryEntry {
                name,
                format: format.trim().to_string(),
                path,
            });
        }

        Ok(Self { entries })
    }

    /// 記録された形式が一致するパスを棚卸し順で返す
    pub fn filter_format(&self, format: &str) -> Vec<PathBuf> {
        self.entries
            .iter()
            .filter(|e| e.format == format)
            .map(|e| e.path.clone())
            .collect()
    }

    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 形式指定を正規化（大文字・ドット付き）
pub fn canonical_format(ext: &str) -> String {
    let ext = ext.trim().to_uppercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}
