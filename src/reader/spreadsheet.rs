//! スプレッドシート読み込み（calamine）
//!
//! ## シートのテキスト化
//! - 全セルが空の行は除外
//! - セルは `Display` で文字列化（空セルは空文字）し、半角スペースで連結
//! - 行は改行で連結

use super::{classify_io, FileError, FileErrorKind};
use calamine::{open_workbook, open_workbook_auto, Data, Ods, Range, Reader, Xls, XlsError, Xlsb, Xlsx, XlsxError};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek};
use std::path::Path;

type FileReader = BufReader<File>;

/// 全シートを読み込み、シート順にテキスト化
pub fn read_sheets(path: &Path) -> Result<Vec<String>, FileError> {
    // 存在確認を先に行う（形式判定失敗と区別するため）
    std::fs::metadata(path).map_err(classify_io)?;

    let ranges = open_ranges(path).map_err(classify_calamine)?;
    Ok(ranges.iter().map(|(_, range)| render_sheet(range)).collect())
}

/// 全シートの (シート名, セル範囲) を取得
///
/// 拡張子は大文字小文字を区別せずに形式を判定する。
pub fn open_ranges(path: &Path) -> Result<Vec<(String, Range<Data>)>, calamine::Error> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "xls" | "xla" => ranges_of(&mut open_workbook::<Xls<FileReader>, _>(path)?),
        "xlsx" | "xlsm" | "xlam" => ranges_of(&mut open_workbook::<Xlsx<FileReader>, _>(path)?),
        "xlsb" => ranges_of(&mut open_workbook::<Xlsb<FileReader>, _>(path)?),
        "ods" => ranges_of(&mut open_workbook::<Ods<FileReader>, _>(path)?),
        _ => ranges_of(&mut open_workbook_auto(path)?),
    }
}

fn ranges_of<RS, R>(workbook: &mut R) -> Result<Vec<(String, Range<Data>)>, calamine::Error>
where
    RS: Read + Seek,
    R: Reader<RS>,
    calamine::Error: From<R::Error>,
{
    let mut ranges = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name)?;
        ranges.push((name, range));
    }
    Ok(ranges)
}

/// calamineのエラーを分類
pub fn classify_calamine(err: calamine::Error) -> FileError {
    match err {
        calamine::Error::Io(e)
        | calamine::Error::Xls(XlsError::Io(e))
        | calamine::Error::Xlsx(XlsxError::Io(e)) => match e.kind() {
            // 途中で途切れた・壊れた内容は形式エラー扱い
            ErrorKind::UnexpectedEof | ErrorKind::InvalidData => {
                FileError::new(FileErrorKind::NotReadable, e.to_string())
            }
            _ => classify_io(e),
        },
        calamine::Error::Xls(
            e @ (XlsError::InvalidFormula { .. }
            | XlsError::IfTab(_)
            | XlsError::Etpg(_)
            | XlsError::StackLen),
        ) => FileError::new(FileErrorKind::FormulaError, e.to_string()),
        other => FileError::new(FileErrorKind::NotReadable, other.to_string()),
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// セル範囲を行列に変換
///
/// calamineの範囲は最初の非空セルから始まるため、
/// シート上の行位置が保たれるよう先頭に空行を補う。
pub fn range_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let (start_row, start_col) = range.start().unwrap_or((0, 0));

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![String::new(); start_col as usize];
        cells.extend(row.iter().map(cell_text));
        rows.push(cells);
    }
    rows
}

/// シートをテキスト化
pub fn render_sheet(range: &Range<Data>) -> String {
    range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>())
        .filter(|cells| cells.iter().any(|c| !c.trim().is_empty()))
        .map(|cells| cells.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
