//! キーワードパターンのコンパイル
//!
//! カテゴリのキーワードリストを `(\bk1\b|\bk2\b|...)` 形式の
//! 単一の正規表現にまとめる。キーワードはエスケープしてリテラルとして扱う。

use crate::error::Result;
use regex::Regex;

/// カテゴリ1つ分のコンパイル済みパターン
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// キーワードが空の場合は `None`（何にもマッチしない）
    regex: Option<Regex>,
}

impl CompiledPattern {
    /// キーワードリストからパターンを構築
    pub fn compile<S: AsRef<str>>(keywords: &[S]) -> Result<Self> {
        match build_pattern(keywords) {
            Some(pattern) => Ok(Self {
                regex: Some(Regex::new(&pattern)?),
            }),
            None => Ok(Self { regex: None }),
        }
    }

    /// 1件以上マッチするか
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// 重複しない全マッチを出現順に返す
    pub fn find_all(&self, text: &str) -> Vec<String> {
        match &self.regex {
            Some(re) => re.find_iter(text).map(|m| m.as_str().to_string()).collect(),
            None => Vec::new(),
        }
    }

    /// 正規表現文字列（デバッグ用）
    pub fn as_str(&self) -> Option<&str> {
        self.regex.as_ref().map(|re| re.as_str())
    }
}

/// パターン文字列を組み立てる（キーワードが空なら `None`）
fn build_pattern<S: AsRef<str>>(keywords: &[S]) -> Option<String> {
    let alternatives: Vec<String> = keywords
        .iter()
        .map(|k| k.as_ref())
        .filter(|k| !k.is_empty())
        .map(|k| format!(r"\b{}\b", regex::escape(k)))
        .collect();

    if alternatives.is_empty() {
        return None;
    }

    Some(format!("({})", alternatives.join("|")))
}
