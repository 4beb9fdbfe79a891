//! テキスト正規化
//!
//! キーワード（読み込み時）と文書（分類時）の両方に同じ処理を適用し、
//! マッチングを対称にする。
//!
//! ## 処理フロー
//! 1. `NaN` の除去
//! 2. 記号の除去（オプション）
//! 3. 単独の英字1文字の除去
//! 4. 先頭の英字1文字の除去
//! 5. 連続空白の統一
//! 6. 先頭の `b ` の除去（バイト列デコードの残骸）
//! 7. 小文字化

use regex::Regex;

lazy_static::lazy_static! {
    static ref NAN_RE: Regex = Regex::new(r"NaN").unwrap();
    static ref SPECIAL_CHARS_RE: Regex = Regex::new(r"[^\w\s]").unwrap();
    static ref SINGLE_CHAR_RE: Regex = Regex::new(r"\s+(?i:[a-z])\s+").unwrap();
    static ref LEADING_CHAR_RE: Regex = Regex::new(r"^(?i:[a-z])\s+").unwrap();
    static ref SPACES_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref PREFIX_B_RE: Regex = Regex::new(r"^b\s+").unwrap();
}

/// テキストを正規化する
///
/// # Arguments
/// * `text` - 対象テキスト
/// * `strip_special_chars` - 単語文字・空白以外を空白に置換する
///
/// 冪等: `normalize(&normalize(x, s), s) == normalize(x, s)`
pub fn normalize(text: &str, strip_special_chars: bool) -> String {
    let mut doc = NAN_RE.replace_all(text, " ").into_owned();

    if strip_special_chars {
        doc = SPECIAL_CHARS_RE.replace_all(&doc, " ").into_owned();
    }

    // 隣接する1文字トークンは空白を共有するため、一度の置換では残る
    while SINGLE_CHAR_RE.is_match(&doc) {
        doc = SINGLE_CHAR_RE.replace_all(&doc, " ").into_owned();
    }

    doc = LEADING_CHAR_RE.replace(&doc, " ").into_owned();
    doc = SPACES_RE.replace_all(&doc, " ").into_owned();
    doc = PREFIX_B_RE.replace(&doc, "").into_owned();

    doc.to_lowercase()
}
