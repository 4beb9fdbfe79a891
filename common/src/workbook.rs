//! ワークブック（複数シート）の集計
//!
//! シートごとに分類し、カテゴリ別バケットに件数・トークンを合算する。
//! 件数0のバケットは除外し、全バケットが0なら CHECK MANUALLY 1件に畳む。

use crate::category::Category;
use crate::classifier::{Classification, ClassificationEngine};
use crate::report::{format_tokens, ReportRow};

/// 集計後のバケット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub category: Category,
    pub count: usize,
    pub tokens: Vec<String>,
}

/// ワークブック単位の判定（空にはならない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookVerdict {
    pub buckets: Vec<Bucket>,
}

impl WorkbookVerdict {
    /// シート単位の分類結果を集計
    pub fn from_classifications<I>(classifications: I) -> Self
    where
        I: IntoIterator<Item = Classification>,
    {
        let mut buckets: Vec<Bucket> = Category::BUCKET_ORDER
            .iter()
            .map(|&category| Bucket {
                category,
                count: 0,
                tokens: Vec::new(),
            })
            .collect();

        for classification in classifications {
            let bucket = &mut buckets[classification.category.bucket_index()];
            bucket.count += classification.count;
            bucket.tokens.extend(classification.tokens);
        }

        if buckets.iter().all(|b| b.count == 0) {
            return Self {
                buckets: vec![Bucket {
                    category: Category::CheckManually,
                    count: 0,
                    tokens: Vec::new(),
                }],
            };
        }

        buckets.retain(|b| b.count > 0);
        Self { buckets }
    }

    /// ラベル一覧
    pub fn labels(&self) -> Vec<&'static str> {
        self.buckets.iter().map(|b| b.category.label()).collect()
    }

    /// `;` 区切りのレポート行に変換
    pub fn to_row(&self, path: &str) -> ReportRow {
        ReportRow {
            abs_path: path.to_string(),
            label: self.join(|b| b.category.label().to_string()),
            n_keywords: self.join(|b| b.count.to_string()),
            keywords: self.join(|b| format_tokens(&b.tokens)),
        }
    }

    fn join<F>(&self, field: F) -> String
    where
        F: Fn(&Bucket) -> String,
    {
        self.buckets.iter().map(field).collect::<Vec<_>>().join(";")
    }
}

/// シートテキストを個別に分類して集計
pub fn aggregate_sheets<S: AsRef<str>>(engine: &ClassificationEngine, sheets: &[S]) -> WorkbookVerdict {
    WorkbookVerdict::from_classifications(sheets.iter().map(|sheet| engine.classify(sheet.as_ref())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::KeywordStore;

    fn engine() -> ClassificationEngine {
        let store = KeywordStore::from_columns([
            (Category::Dcm, vec!["dcm report"]),
            (Category::Lot, vec!["leak off test"]),
            (Category::Geomech, vec!["geomechanics"]),
            (Category::Wells, vec!["wellbore", "well test"]),
        ]);
        ClassificationEngine::new(&store).unwrap()
    }

    #[test]
    fn test_merge_geomech_and_wells() {
        let sheets = [
            "Sheet summary: geomechanics model",
            "wellbore 1 NaN\nwell test 2 NaN",
            "budget NaN NaN",
        ];
        let verdict = aggregate_sheets(&engine(), &sheets);

        assert_eq!(verdict.labels(), vec!["GEOMECH", "WELLS"]);
        let row = verdict.to_row("/data/book.xls");
        assert_eq!(row.label, "GEOMECH;WELLS");
        assert_eq!(row.n_keywords, "1;2");
        assert_eq!(row.keywords, r#"["geomechanics"];["wellbore", "well test"]"#);
    }

    #[test]
    fn test_all_empty_collapses() {
        let verdict = aggregate_sheets(&engine(), &["nothing here", "", "budget"]);
        assert_eq!(
            verdict.buckets,
            vec![Bucket {
                category: Category::CheckManually,
                count: 0,
                tokens: Vec::new(),
            }]
        );

        let row = verdict.to_row("/data/empty.xls");
        assert_eq!(row.label, "CHECK MANUALLY");
        assert_eq!(row.n_keywords, "0");
        assert_eq!(row.keywords, "[]");
    }

    #[test]
    fn test_no_sheets_collapses() {
        let sheets: [&str; 0] = [];
        let verdict = aggregate_sheets(&engine(), &sheets);
        assert_eq!(verdict.labels(), vec!["CHECK MANUALLY"]);
    }

    #[test]
    fn test_sums_same_category_across_sheets() {
        let verdict = aggregate_sheets(&engine(), &["wellbore", "wellbore wellbore"]);
        assert_eq!(verdict.buckets.len(), 1);
        assert_eq!(verdict.buckets[0].category, Category::Wells);
        assert_eq!(verdict.buckets[0].count, 3);
        assert_eq!(verdict.buckets[0].tokens.len(), 3);
    }

    #[test]
    fn test_fixed_bucket_order() {
        // シート順に関係なくバケット順で出力
        let verdict = aggregate_sheets(&engine(), &["wellbore", "leak off test", "the dcm", "DCM report"]);
        assert_eq!(verdict.labels(), vec!["DCM", "Probable DCM", "LOT", "WELLS"]);
    }

    #[test]
    fn test_row_segments_are_parallel() {
        let verdict = aggregate_sheets(&engine(), &["geomechanics", "wellbore", "leak off test"]);
        let row = verdict.to_row("x");
        let n = row.label.split(';').count();
        assert_eq!(n, 3);
        assert_eq!(row.n_keywords.split(';').count(), n);
        assert_eq!(row.keywords.split(';').count(), n);
    }
}
