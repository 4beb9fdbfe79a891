//! 分類カテゴリ定義
//!
//! - Category: 分類ラベル（キーワード由来 + 手動確認）
//! - Sentinel: ファイル単位のエラーを表す行ラベル

/// 分類カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Dcm,
    ProbableDcm,
    Geomech,
    Lot,
    Wells,
    CheckManually,
}

impl Category {
    /// キーワードリストを持つカテゴリ（キーワードファイルの列）
    pub const KEYWORD_CATEGORIES: [Category; 4] =
        [Category::Dcm, Category::Lot, Category::Geomech, Category::Wells];

    /// ワークブック集計時のバケット順
    pub const BUCKET_ORDER: [Category; 6] = [
        Category::Dcm,
        Category::ProbableDcm,
        Category::Geomech,
        Category::Lot,
        Category::Wells,
        Category::CheckManually,
    ];

    /// レポートに出力するラベル
    pub fn label(&self) -> &'static str {
        match self {
            Category::Dcm => "DCM",
            Category::ProbableDcm => "Probable DCM",
            Category::Geomech => "GEOMECH",
            Category::Lot => "LOT",
            Category::Wells => "WELLS",
            Category::CheckManually => "CHECK MANUALLY",
        }
    }

    /// キーワードファイルの列名からカテゴリを取得（大文字小文字無視）
    pub fn from_column(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "DCM" => Some(Category::Dcm),
            "LOT" => Some(Category::Lot),
            "GEOMECH" => Some(Category::Geomech),
            "WELLS" => Some(Category::Wells),
            _ => None,
        }
    }

    /// バケット順でのインデックス
    pub fn bucket_index(&self) -> usize {
        match self {
            Category::Dcm => 0,
            Category::ProbableDcm => 1,
            Category::Geomech => 2,
            Category::Lot => 3,
            Category::Wells => 4,
            Category::CheckManually => 5,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// ファイル単位のエラー行ラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    FileNotSupported,
    FormulaError,
    PathTooLong,
    FileNotFound,
    ReadError,
}

impl Sentinel {
    pub fn label(&self) -> &'static str {
        match self {
            Sentinel::FileNotSupported => "FILE NOT SUPPORTED",
            Sentinel::FormulaError => "FORMULA ERROR",
            Sentinel::PathTooLong => "PATH TOO LONG",
            Sentinel::FileNotFound => "FILE NOT FOUND",
            Sentinel::ReadError => "READ ERROR",
        }
    }
}

impl std::fmt::Display for Sentinel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
