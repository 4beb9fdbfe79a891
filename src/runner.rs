//! 分類実行モジュール
//!
//! 棚卸しから形式の一致するパスを取り出し、ファイルごとに読み込み・分類して
//! レポートを出力する。
//!
//! ## 処理フロー
//! 1. 形式指定の正規化（`txt` → `.TXT`）
//! 2. 棚卸しの形式フィルタ・件数制限
//! 3. ファイルごとの読み込み・分類（rayonで並列、出力は棚卸し順）
//! 4. レポート出力・退避コピーの削除

use crate::error::{ClassifierError, Result};
use crate::inventory::{canonical_format, Inventory};
use crate::reader::{read_document, Document, DocumentKind, FileErrorKind, ScratchDir};
use crate::report::write_report;
use crate::scanner::format_of;
use chrono::NaiveDate;
use geomech_common::{aggregate_sheets, ClassificationEngine, ReportRow};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// スプレッドシートとして読む形式
pub const SPREADSHEET_FORMATS: &[&str] = &[".XLS", ".XLSX", ".XLSM", ".XLSB", ".ODS"];

/// テキストとして読む既知の形式
pub const TEXT_FORMATS: &[&str] = &[".DSB", ".OUT", ".FAO", ".TB", ".STR", ".LOG", ".TXT"];

/// 形式から読み込み方法を決定（未知の形式は `None`）
pub fn document_kind(format: &str) -> Option<DocumentKind> {
    if SPREADSHEET_FORMATS.contains(&format) {
        Some(DocumentKind::Spreadsheet)
    } else if TEXT_FORMATS.contains(&format) {
        Some(DocumentKind::Text)
    } else {
        None
    }
}

/// 実行オプション
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// 先頭から処理する件数（0は無制限）
    pub limit: usize,
    /// 並列数（1で逐次）
    pub jobs: usize,
    pub reports_dir: PathBuf,
    /// レポート名に使う日付
    pub date: NaiveDate,
    pub show_progress: bool,
}

impl RunOptions {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            limit: 0,
            jobs: 1,
            reports_dir: reports_dir.into(),
            date: chrono::Local::now().date_naive(),
            show_progress: false,
        }
    }
}

/// 形式1つ分の実行結果
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub format: String,
    pub rows: Vec<ReportRow>,
    pub report_path: PathBuf,
}

pub struct ClassificationRunner<'a> {
    engine: &'a ClassificationEngine,
    inventory: &'a Inventory,
    options: RunOptions,
}

impl<'a> ClassificationRunner<'a> {
    pub fn new(engine: &'a ClassificationEngine, inventory: &'a Inventory, options: RunOptions) -> Self {
        Self {
            engine,
            inventory,
            options,
        }
    }

    /// 複数形式を順に実行（形式ごとにレポート1件）
    pub fn run_all<S: AsRef<str>>(&self, formats: &[S]) -> Result<Vec<RunOutcome>> {
        let mut outcomes = Vec::with_capacity(formats.len());
        for format in formats {
            outcomes.push(self.run(format.as_ref())?);
        }
        Ok(outcomes)
    }

    /// 1形式を実行
    pub fn run(&self, format: &str) -> Result<RunOutcome> {
        let format = canonical_format(format);
        log::info!("{} classification started.", format);

        let mut paths = self.inventory.filter_format(&format);
        if self.options.limit > 0 {
            paths.truncate(self.options.limit);
        }

        let kind = match document_kind(&format) {
            Some(kind) => kind,
            None => {
                log::warn!("File extension {} not recognized. Defaulting to text file.", format);
                DocumentKind::Text
            }
        };

        let scratch = ScratchDir::new()?;
        let rows = self.classify_paths(&paths, kind, &scratch)?;
        let report_path = write_report(&rows, &self.options.reports_dir, &format, self.options.date)?;
        log::info!("Report saved: {}", report_path.display());

        if let Err(e) = scratch.close() {
            log::warn!("一時フォルダの削除に失敗: {}", e);
        }

        Ok(RunOutcome {
            format,
            rows,
            report_path,
        })
    }

    /// パス一覧を分類（結果は入力順）
    pub fn classify_paths(&self, paths: &[PathBuf], kind: DocumentKind, scratch: &ScratchDir) -> Result<Vec<ReportRow>> {
        let progress = self.progress_bar(paths.len() as u64);

        let rows = if self.options.jobs <= 1 {
            paths
                .iter()
                .enumerate()
                .map(|(index, path)| {
                    let row = classify_path(self.engine, path, kind, index, scratch);
                    progress.inc(1);
                    row
                })
                .collect::<Vec<_>>()
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.options.jobs)
                .build()
                .map_err(|e| ClassifierError::ThreadPool(e.to_string()))?;

            pool.install(|| {
                paths
                    .par_iter()
                    .enumerate()
                    .map(|(index, path)| {
                        let row = classify_path(self.engine, path, kind, index, scratch);
                        progress.inc(1);
                        row
                    })
                    .collect::<Vec<_>>()
            })
        };

        progress.finish_and_clear();
        Ok(rows)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.options.show_progress {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(len);
        let style = ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar
    }
}

/// 1ファイルを読み込み・分類してレポート行を作る
///
/// ファイル単位のエラーはエラー行として返し、実行は継続する。
pub fn classify_path(
    engine: &ClassificationEngine,
    path: &Path,
    kind: DocumentKind,
    index: usize,
    scratch: &ScratchDir,
) -> ReportRow {
    let abs_path = path.to_string_lossy();

    match read_document(path, kind, index, scratch) {
        Ok(Document::Text(text)) => ReportRow::from_classification(&abs_path, &engine.classify(&text)),
        Ok(Document::Sheets(sheets)) => aggregate_sheets(engine, &sheets).to_row(&abs_path),
        Err(err) => {
            if err.kind == FileErrorKind::Unreadable {
                log::error!("{}: {} ({})", err.kind, path.display(), err.detail);
            } else {
                log::warn!("{}: {} ({})", err.kind, path.display(), err.detail);
            }
            ReportRow::sentinel(&abs_path, err.kind.sentinel())
        }
    }
}

/// 棚卸しを経由せず単一ファイルを分類（形式は拡張子から判定）
pub fn check_file(engine: &ClassificationEngine, path: &Path) -> Result<ReportRow> {
    let format = format_of(path);
    let kind = document_kind(&format).unwrap_or(DocumentKind::Text);
    let scratch = ScratchDir::new()?;
    let row = classify_path(engine, path, kind, 0, &scratch);
    scratch.close()?;
    Ok(row)
}
