//! ファイル棚卸しモジュール
//!
//! ルート直下の指定フォルダ（省略時はルート全体）を再帰的に走査し、
//! 分類対象の一覧（NAME, FORMAT, FILEPATH, ABSPATH）を作成する。

use crate::error::{ClassifierError, Result};
use geomech_common::csv::format_csv_line;
use std::collections::HashMap;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 棚卸しCSVのヘッダー
pub const INVENTORY_HEADER: [&str; 4] = ["NAME", "FORMAT", "FILEPATH", "ABSPATH"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    /// 大文字・ドット付き拡張子（拡張子なしは空文字）
    pub format: String,
    /// ルートからの相対パス
    pub file_path: PathBuf,
    pub abs_path: PathBuf,
}

/// 拡張子を `.TXT` 形式で取得
pub fn format_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_uppercase()))
        .unwrap_or_default()
}

/// ディレクトリツリーを走査
///
/// # Arguments
/// * `root` - ルートディレクトリ
/// * `folders` - ルート直下の対象フォルダ（空ならルート全体）
pub fn scan_tree(root: &Path, folders: &[String]) -> Result<Vec<FileEntry>> {
    if !root.is_dir() {
        return Err(ClassifierError::FolderNotFound(root.display().to_string()));
    }

    let root = if root.is_absolute() {
        root.to_path_buf()
    } else {
        std::env::current_dir()?.join(root)
    };

    let targets: Vec<PathBuf> = if folders.is_empty() {
        vec![root.clone()]
    } else {
        folders.iter().map(|f| root.join(f)).collect()
    };

    let mut entries = Vec::new();

    for target in &targets {
        if !target.is_dir() {
            log::warn!("フォルダが存在しないためスキップ: {}", target.display());
            continue;
        }

        for entry in WalkDir::new(target)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let abs_path = entry.path().to_path_buf();
            let file_path = abs_path
                .strip_prefix(&root)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| abs_path.clone());

            entries.push(FileEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                format: format_of(&abs_path),
                file_path,
                abs_path,
            });

            if entries.len() % 1000 == 0 {
                log::debug!("File {}", entries.len());
            }
        }
    }

    // 相対パスでソート
    entries.sort_by(|a, b| a.file_path.cmp(&b.file_path));

    Ok(entries)
}

/// 棚卸しCSVを書き出し
pub fn write_inventory(entries: &[FileEntry], output: &Path) -> Result<()> {
    let file = std::fs::File::create(output)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", format_csv_line(&INVENTORY_HEADER))?;
    for entry in entries {
        let file_path = entry.file_path.to_string_lossy();
        let abs_path = entry.abs_path.to_string_lossy();
        let fields = [entry.name.as_str(), entry.format.as_str(), &*file_path, &*abs_path];
        writeln!(writer, "{}", format_csv_line(&fields))?;
    }

    writer.flush()?;
    Ok(())
}

/// 形式ごとの件数（件数の降順、同数は形式名順）
pub fn format_counts(entries: &[FileEntry]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.format.as_str()).or_insert(0) += 1;
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(format, count)| (format.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// 形式別件数CSVを書き出し
pub fn write_format_counts(counts: &[(String, usize)], output: &Path) -> Result<()> {
    let mut content = String::from("FORMAT,COUNT\n");
    for (format, count) in counts {
        let count = count.to_string();
        content.push_str(&format_csv_line(&[format.as_str(), count.as_str()]));
        content.push('\n');
    }
    std::fs::write(output, content)?;
    Ok(())
}
