use crate::error::{ClassifierError, Result};
use geomech_common::DEFAULT_SKIP_ROWS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 棚卸しCSV（NAME, FORMAT, FILEPATH/ABSPATH）
    pub filelist_path: PathBuf,
    /// キーワードファイル（xlsx/xls/ods/csv）
    pub keywords_path: PathBuf,
    /// キーワードファイルのヘッダー前の読み飛ばし行数
    pub keyword_skip_rows: usize,
    /// レポート出力先
    pub reports_dir: PathBuf,
    /// 並列数（未設定時はCPU数）
    pub jobs: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filelist_path: PathBuf::from("filelist.csv"),
            keywords_path: PathBuf::from("parameters.xlsx"),
            keyword_skip_rows: DEFAULT_SKIP_ROWS,
            reports_dir: PathBuf::from("Reports"),
            jobs: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ClassifierError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("geomech-classifier").join("config.json"))
    }

    /// 並列数（0や未設定はCPU数）
    pub fn effective_jobs(&self) -> usize {
        match self.jobs {
            Some(n) if n > 0 => n,
            _ => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}
