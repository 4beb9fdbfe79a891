//! Geomech Classifier Common Library
//!
//! キーワード分類エンジン（ファイルI/Oなし）

pub mod category;
pub mod classifier;
pub mod csv;
pub mod error;
pub mod keywords;
pub mod normalizer;
pub mod pattern;
pub mod report;
pub mod workbook;

pub use category::{Category, Sentinel};
pub use classifier::{Classification, ClassificationEngine};
pub use error::{Error, Result};
pub use keywords::{KeywordStore, DEFAULT_SKIP_ROWS};
pub use normalizer::normalize;
pub use pattern::CompiledPattern;
pub use report::{render_csv, ReportRow, REPORT_HEADER};
pub use workbook::{aggregate_sheets, Bucket, WorkbookVerdict};
