//! 最小限のCSV処理（ダブルクォート対応）
//!
//! 棚卸しCSV・キーワードCSVの読み込みと、レポートの書き出しで共用する。
//! 1行1レコードのみ対応（クォート内改行は非対応）。

/// CSV行をパース（ダブルクォート・`""` エスケープ対応）
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.trim_end_matches(['\r', '\n']).chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.trim().is_empty() => {
                // クォート前の空白は捨てる
                field.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            _ => field.push(c),
        }
    }

    // 最後のフィールド
    fields.push(field);
    fields
}

/// フィールドをCSV用にエスケープ
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// フィールド列をCSVの1行に整形（改行なし）
pub fn format_csv_line<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}
