//! レポート出力
//!
//! ファイル名は形式と実行日を含む: `report_<EXT>_<YYYYMMDD>.csv`

use crate::error::Result;
use chrono::NaiveDate;
use geomech_common::{render_csv, ReportRow};
use std::path::{Path, PathBuf};

/// レポートのファイル名
pub fn report_file_name(format: &str, date: NaiveDate) -> String {
    format!(
        "report_{}_{}.csv",
        format.trim_start_matches('.'),
        date.format("%Y%m%d")
    )
}

/// レポートを書き出し、保存先パスを返す
pub fn write_report(rows: &[ReportRow], dir: &Path, format: &str, date: NaiveDate) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(report_file_name(format, date));
    std::fs::write(&path, render_csv(rows))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geomech_common::Sentinel;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(report_file_name(".TXT", date()), "report_TXT_20261019.csv");
        assert_eq!(report_file_name(".XLS", date()), "report_XLS_20261019.csv");
    }

    #[test]
    fn test_write_report_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let reports = dir.path().join("Reports");
        let rows = vec![ReportRow::sentinel("/data/x.xls", Sentinel::FileNotSupported)];

        let path = write_report(&rows, &reports, ".XLS", date()).unwrap();
        assert_eq!(path, reports.join("report_XLS_20261019.csv"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "ABSPATH,LABEL,N_KEYWORDS,KEYWORDS\n/data/x.xls,FILE NOT SUPPORTED,FILE NOT SUPPORTED,FILE NOT SUPPORTED\n"
        );
    }
}
