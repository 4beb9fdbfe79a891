//! 文書分類エンジン
//!
//! 正規化済みテキストに対してカテゴリパターンを固定の優先順で評価し、
//! 最初にマッチしたカテゴリを返す。
//!
//! 優先順: DCM → Probable DCM（`dcm` の部分一致）→ LOT → GEOMECH → WELLS
//! → CHECK MANUALLY

use crate::category::Category;
use crate::error::Result;
use crate::keywords::KeywordStore;
use crate::normalizer::normalize;
use crate::pattern::CompiledPattern;

/// キーワードリストで不一致でも、この略語があれば Probable DCM とする
const DCM_ACRONYM: &str = "dcm";

/// 1文書の分類結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    /// マッチ件数（`tokens.len()` と一致）
    pub count: usize,
    /// マッチしたトークン（出現順）
    pub tokens: Vec<String>,
}

impl Classification {
    fn matched(category: Category, tokens: Vec<String>) -> Self {
        Self {
            category,
            count: tokens.len(),
            tokens,
        }
    }

    /// キーワードが見つからなかった場合
    pub fn unmatched() -> Self {
        Self {
            category: Category::CheckManually,
            count: 0,
            tokens: Vec::new(),
        }
    }
}

/// 分類エンジン（構築後は不変）
#[derive(Debug, Clone)]
pub struct ClassificationEngine {
    dcm: CompiledPattern,
    lot: CompiledPattern,
    geomech: CompiledPattern,
    wells: CompiledPattern,
}

impl ClassificationEngine {
    /// キーワードストアから全カテゴリのパターンをコンパイル
    pub fn new(store: &KeywordStore) -> Result<Self> {
        Ok(Self {
            dcm: CompiledPattern::compile(store.keywords(Category::Dcm))?,
            lot: CompiledPattern::compile(store.keywords(Category::Lot))?,
            geomech: CompiledPattern::compile(store.keywords(Category::Geomech))?,
            wells: CompiledPattern::compile(store.keywords(Category::Wells))?,
        })
    }

    /// カテゴリのパターンを取得
    pub fn pattern(&self, category: Category) -> Option<&CompiledPattern> {
        match category {
            Category::Dcm => Some(&self.dcm),
            Category::Lot => Some(&self.lot),
            Category::Geomech => Some(&self.geomech),
            Category::Wells => Some(&self.wells),
            Category::ProbableDcm | Category::CheckManually => None,
        }
    }

    /// 文書テキストを分類する
    pub fn classify(&self, document: &str) -> Classification {
        let document = normalize(document, true);

        let dcm = self.dcm.find_all(&document);
        if !dcm.is_empty() {
            return Classification::matched(Category::Dcm, dcm);
        }

        let probable: Vec<String> = document
            .matches(DCM_ACRONYM)
            .map(|m| m.to_string())
            .collect();
        if !probable.is_empty() {
            return Classification::matched(Category::ProbableDcm, probable);
        }

        for (category, pattern) in [
            (Category::Lot, &self.lot),
            (Category::Geomech, &self.geomech),
            (Category::Wells, &self.wells),
        ] {
            let tokens = pattern.find_all(&document);
            if !tokens.is_empty() {
                return Classification::matched(category, tokens);
            }
        }

        Classification::unmatched()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ClassificationEngine {
        let store = KeywordStore::from_columns([
            (Category::Dcm, vec!["drilling campaign management", "dcm report"]),
            (Category::Lot, vec!["leak off test", "formation integrity"]),
            (Category::Geomech, vec!["geomechanics", "pore pressure", "stress"]),
            (Category::Wells, vec!["well test", "wellbore"]),
        ]);
        ClassificationEngine::new(&store).unwrap()
    }

    #[test]
    fn test_wellbore_document() {
        let result = engine().classify("The wellbore integrity was checked.");
        assert_eq!(result.category, Category::Wells);
        assert_eq!(result.count, 1);
        assert_eq!(result.tokens, vec!["wellbore"]);
    }

    #[test]
    fn test_dcm_beats_geomech() {
        let result = engine().classify("Geomechanics summary, see DCM-Report for stress data");
        assert_eq!(result.category, Category::Dcm);
        assert_eq!(result.tokens, vec!["dcm report"]);
    }

    #[test]
    fn test_probable_dcm_fallback() {
        let result = engine().classify("DCM: pore pressure. Attached dcm_v2 and xdcm notes");
        assert_eq!(result.category, Category::ProbableDcm);
        assert_eq!(result.count, 3);
        assert_eq!(result.tokens, vec!["dcm", "dcm", "dcm"]);
    }

    #[test]
    fn test_lot_before_geomech_and_wells() {
        let result = engine().classify("Leak-off test at the wellbore; stress regime normal");
        assert_eq!(result.category, Category::Lot);
        assert_eq!(result.tokens, vec!["leak off test"]);
    }

    #[test]
    fn test_geomech_counts_all_matches() {
        let result = engine().classify("Stress, stress and pore pressure. Also a wellbore.");
        assert_eq!(result.category, Category::Geomech);
        assert_eq!(result.count, 3);
        assert_eq!(result.tokens, vec!["stress", "stress", "pore pressure"]);
    }

    #[test]
    fn test_no_match() {
        let result = engine().classify("Quarterly budget and staffing plan");
        assert_eq!(result, Classification::unmatched());
        assert_eq!(result.count, 0);
        assert!(result.tokens.is_empty());
    }

    #[test]
    fn test_empty_store_only_probable_dcm() {
        let engine = ClassificationEngine::new(&KeywordStore::new()).unwrap();
        assert_eq!(engine.classify("wellbore").category, Category::CheckManually);
        assert_eq!(engine.classify("the DCM file").category, Category::ProbableDcm);
    }

    #[test]
    fn test_count_matches_tokens() {
        let engine = engine();
        for doc in ["", "wellbore wellbore", "dcm", "LOT", "formation integrity x stress"] {
            let result = engine.classify(doc);
            assert_eq!(result.count, result.tokens.len(), "{:?}", doc);
        }
    }

    #[test]
    fn test_pattern_accessor() {
        let engine = engine();
        assert!(engine.pattern(Category::Wells).is_some());
        assert!(engine.pattern(Category::ProbableDcm).is_none());
    }
}
