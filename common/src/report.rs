//! レポート行の型定義とCSV整形
//!
//! 列: `ABSPATH`, `LABEL`, `N_KEYWORDS`, `KEYWORDS`
//! ワークブックでは後ろ3列が `;` 区切りの並列リストになる。

use crate::category::Sentinel;
use crate::classifier::Classification;
use crate::csv::format_csv_line;
use serde::{Deserialize, Serialize};

/// レポートのヘッダー
pub const REPORT_HEADER: [&str; 4] = ["ABSPATH", "LABEL", "N_KEYWORDS", "KEYWORDS"];

/// レポート1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ReportRow {
    #[serde(rename = "ABSPATH")]
    pub abs_path: String,
    pub label: String,
    pub n_keywords: String,
    pub keywords: String,
}

impl ReportRow {
    /// 単一文書の分類結果から生成
    pub fn from_classification(path: &str, classification: &Classification) -> Self {
        Self {
            abs_path: path.to_string(),
            label: classification.category.label().to_string(),
            n_keywords: classification.count.to_string(),
            keywords: format_tokens(&classification.tokens),
        }
    }

    /// エラー行（3列すべて同じラベル）
    pub fn sentinel(path: &str, sentinel: Sentinel) -> Self {
        let label = sentinel.label().to_string();
        Self {
            abs_path: path.to_string(),
            label: label.clone(),
            n_keywords: label.clone(),
            keywords: label,
        }
    }

    /// `;` 区切りの区間数が3列で一致しているか
    pub fn is_consistent(&self) -> bool {
        let n = self.label.split(';').count();
        self.n_keywords.split(';').count() == n && self.keywords.split(';').count() == n
    }

    /// CSVの1行に整形（改行なし）
    pub fn to_csv_line(&self) -> String {
        format_csv_line(&[&self.abs_path, &self.label, &self.n_keywords, &self.keywords])
    }
}

/// トークンリストを文字列化（例: `["wellbore", "well test"]`）
pub fn format_tokens(tokens: &[String]) -> String {
    format!("{:?}", tokens)
}

/// レポート全体をCSV文字列に整形
pub fn render_csv(rows: &[ReportRow]) -> String {
    let mut out = format_csv_line(&REPORT_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&row.to_csv_line());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::csv::parse_csv_line;

    #[test]
    fn test_from_classification() {
        let classification = Classification {
            category: Category::Wells,
            count: 2,
            tokens: vec!["wellbore".to_string(), "well test".to_string()],
        };
        let row = ReportRow::from_classification("/data/a.txt", &classification);
        assert_eq!(row.label, "WELLS");
        assert_eq!(row.n_keywords, "2");
        assert_eq!(row.keywords, r#"["wellbore", "well test"]"#);
        assert!(row.is_consistent());
    }

    #[test]
    fn test_unmatched_row() {
        let row = ReportRow::from_classification("/data/b.txt", &Classification::unmatched());
        assert_eq!(row.label, "CHECK MANUALLY");
        assert_eq!(row.n_keywords, "0");
        assert_eq!(row.keywords, "[]");
    }

    #[test]
    fn test_sentinel_row() {
        let row = ReportRow::sentinel("/data/c.xls", Sentinel::FormulaError);
        assert_eq!(row.label, "FORMULA ERROR");
        assert_eq!(row.n_keywords, "FORMULA ERROR");
        assert_eq!(row.keywords, "FORMULA ERROR");
        assert!(row.is_consistent());
    }

    #[test]
    fn test_inconsistent_row_detected() {
        let row = ReportRow {
            abs_path: "x".to_string(),
            label: "GEOMECH;WELLS".to_string(),
            n_keywords: "1".to_string(),
            keywords: "[];[]".to_string(),
        };
        assert!(!row.is_consistent());
    }

    #[test]
    fn test_render_csv() {
        let rows = vec![ReportRow::from_classification(
            "/data/a, b.txt",
            &Classification {
                category: Category::Dcm,
                count: 1,
                tokens: vec!["dcm report".to_string()],
            },
        )];
        let csv = render_csv(&rows);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("ABSPATH,LABEL,N_KEYWORDS,KEYWORDS"));
        let fields = parse_csv_line(lines.next().unwrap());
        assert_eq!(fields, vec!["/data/a, b.txt", "DCM", "1", r#"["dcm report"]"#]);
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_serialize_column_names() {
        let row = ReportRow::sentinel("p", Sentinel::FileNotFound);
        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("ABSPATH").is_some());
        assert!(json.get("N_KEYWORDS").is_some());
        assert!(json.get("KEYWORDS").is_some());
    }
}
